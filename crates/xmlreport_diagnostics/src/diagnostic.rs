//! Compiler messages with a severity and an optional source location.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use xmlreport_source::SourceLocation;

/// A single compiler-emitted message.
///
/// The location is optional: many messages (usage text, build summaries,
/// internal failures) are not tied to a position in any file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity of this message.
    pub severity: Severity,
    /// The message text, possibly multi-line.
    pub message: String,
    /// Where in source text the message applies, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    /// Creates a diagnostic with the given severity and no location.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            location: None,
        }
    }

    /// Creates a new error diagnostic with no location.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a new warning diagnostic with no location.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Attaches a source location to this diagnostic.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}
