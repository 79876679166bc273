//! Compiler message severities ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity of a compiler message.
///
/// Ordered from least severe (`Output`) to most severe (`Exception`), matching
/// the derived `PartialOrd`/`Ord` implementation based on declaration order.
/// The [presentable name](Self::presentable_name) doubles as the XML tag name
/// of a rendered message, so every name is a legal XML identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Raw output produced by the compiler, such as generated file names.
    Output,
    /// Progress messages that are only of interest when debugging the build.
    Logging,
    /// An informational message.
    Info,
    /// A potential issue that does not prevent compilation.
    Warning,
    /// A warning that must be shown even when warnings are suppressed.
    StrongWarning,
    /// A problem that prevents successful compilation.
    Error,
    /// An internal failure of the compiler itself.
    Exception,
}

impl Severity {
    /// Every severity, from least to most severe.
    pub const ALL: [Severity; 7] = [
        Severity::Output,
        Severity::Logging,
        Severity::Info,
        Severity::Warning,
        Severity::StrongWarning,
        Severity::Error,
        Severity::Exception,
    ];

    /// Returns the stable, upper-case name of this severity.
    pub fn presentable_name(self) -> &'static str {
        match self {
            Severity::Output => "OUTPUT",
            Severity::Logging => "LOGGING",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::StrongWarning => "STRONG_WARNING",
            Severity::Error => "ERROR",
            Severity::Exception => "EXCEPTION",
        }
    }

    /// Returns `true` for [`Error`](Severity::Error) and [`Exception`](Severity::Exception).
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error | Severity::Exception)
    }

    /// Returns `true` for [`Warning`](Severity::Warning) and
    /// [`StrongWarning`](Severity::StrongWarning).
    pub fn is_warning(self) -> bool {
        matches!(self, Severity::Warning | Severity::StrongWarning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.presentable_name())
    }
}

/// Error returned when a string names no known severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: '{input}'")]
pub struct ParseSeverityError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.presentable_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSeverityError {
                input: s.to_string(),
            })
    }
}
