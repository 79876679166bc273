//! Lookup of renderers by the name a user selects them with.

use crate::renderer::{MessageRenderer, XmlMessageRenderer};

static XML: XmlMessageRenderer = XmlMessageRenderer::new();

/// Every registered renderer, in the order they are listed to users.
static RENDERERS: [&dyn MessageRenderer; 1] = [&XML];

/// Returns the renderer registered under `name`, ignoring ASCII case.
pub fn renderer_by_name(name: &str) -> Option<&'static dyn MessageRenderer> {
    RENDERERS
        .iter()
        .copied()
        .find(|r| r.name().eq_ignore_ascii_case(name.trim()))
}

/// Returns the names of all registered renderers.
pub fn renderer_names() -> impl Iterator<Item = &'static str> {
    RENDERERS.iter().map(|r| r.name())
}
