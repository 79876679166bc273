//! Rendering backends that turn compiler messages into report text.

use crate::diagnostic::Diagnostic;
use crate::escape::escape_xml;
use crate::severity::Severity;
use xmlreport_source::SourceLocation;

/// Trait for rendering compiler messages into formatted output strings.
///
/// A report is produced by calling [`render_preamble`](Self::render_preamble)
/// once, then [`render`](Self::render) or [`render_usage`](Self::render_usage)
/// any number of times, then [`render_conclusion`](Self::render_conclusion)
/// once. Concatenating the results in that order yields the whole report.
///
/// Implementations are stateless and never fail.
pub trait MessageRenderer: Send + Sync {
    /// Returns the text that opens a report.
    fn render_preamble(&self) -> String;

    /// Renders a single message.
    fn render(&self, severity: Severity, message: &str, location: Option<&SourceLocation>)
        -> String;

    /// Renders command-line usage text through the same channel as messages.
    fn render_usage(&self, usage: &str) -> String;

    /// Returns the text that closes a report.
    fn render_conclusion(&self) -> String;

    /// Returns the name this renderer is selected by.
    fn name(&self) -> &'static str;

    /// Renders a [`Diagnostic`] value.
    fn render_diagnostic(&self, diag: &Diagnostic) -> String {
        self.render(diag.severity, &diag.message, diag.location.as_ref())
    }
}

/// Renders messages as an XML document for IDEs and build tools.
///
/// Produces output like:
/// ```text
/// <MESSAGES><WARNING path="a.kt" line="3" column="5">bad &lt;code&gt;</WARNING>
/// <ERROR>oops</ERROR>
/// </MESSAGES>
/// ```
/// Each message becomes one element named after its severity. The message
/// text and the `path` attribute are escaped; the tag name and the numeric
/// attributes are written as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XmlMessageRenderer;

impl XmlMessageRenderer {
    /// The name of the root element wrapping every message.
    pub const ROOT_ELEMENT: &'static str = "MESSAGES";

    /// Creates a new XML renderer.
    pub const fn new() -> Self {
        Self
    }
}

impl MessageRenderer for XmlMessageRenderer {
    fn render_preamble(&self) -> String {
        format!("<{}>", Self::ROOT_ELEMENT)
    }

    fn render(
        &self,
        severity: Severity,
        message: &str,
        location: Option<&SourceLocation>,
    ) -> String {
        let tag = severity.presentable_name();
        let mut out = String::with_capacity(2 * tag.len() + message.len() + 8);

        out.push('<');
        out.push_str(tag);
        if let Some(loc) = location {
            out.push_str(&format!(
                " path=\"{}\" line=\"{}\" column=\"{}\"",
                escape_xml(&loc.path),
                loc.line,
                loc.column
            ));
        }
        out.push('>');

        out.push_str(&escape_xml(message));

        out.push_str("</");
        out.push_str(tag);
        out.push_str(">\n");
        out
    }

    fn render_usage(&self, usage: &str) -> String {
        self.render(Severity::StrongWarning, usage, None)
    }

    fn render_conclusion(&self) -> String {
        format!("</{}>", Self::ROOT_ELEMENT)
    }

    fn name(&self) -> &'static str {
        "XML"
    }
}

/// Renders a complete report: preamble, every diagnostic in order, conclusion.
pub fn render_document(renderer: &dyn MessageRenderer, diagnostics: &[Diagnostic]) -> String {
    let mut out = renderer.render_preamble();
    for diag in diagnostics {
        out.push_str(&renderer.render_diagnostic(diag));
    }
    out.push_str(&renderer.render_conclusion());
    out
}
