//! The `(path, line, column)` triple identifying where a diagnostic applies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text reported alongside a diagnostic.
///
/// Line and column values are 1-indexed. Either may be
/// [`UNKNOWN`](Self::UNKNOWN) when the producer could not determine it.
/// The path is arbitrary text and is not required to name an existing file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    /// The path of the source file, as reported by the producer.
    pub path: String,
    /// The line number (1-indexed), or [`UNKNOWN`](Self::UNKNOWN).
    pub line: i32,
    /// The column number (1-indexed), or [`UNKNOWN`](Self::UNKNOWN).
    pub column: i32,
}

impl SourceLocation {
    /// Sentinel for a line or column that could not be determined.
    pub const UNKNOWN: i32 = -1;

    /// Creates a new location.
    pub fn new(path: impl Into<String>, line: i32, column: i32) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }

    /// Creates a location that names a file but no position within it.
    pub fn file_only(path: impl Into<String>) -> Self {
        Self::new(path, Self::UNKNOWN, Self::UNKNOWN)
    }

    /// Returns `true` if both line and column are known.
    pub fn has_position(&self) -> bool {
        self.line != Self::UNKNOWN && self.column != Self::UNKNOWN
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let loc = SourceLocation::new("src/main.kt", 10, 5);
        assert_eq!(format!("{loc}"), "src/main.kt:10:5");
    }

    #[test]
    fn file_only_has_no_position() {
        let loc = SourceLocation::file_only("build.gradle.kts");
        assert_eq!(loc.line, SourceLocation::UNKNOWN);
        assert_eq!(loc.column, SourceLocation::UNKNOWN);
        assert!(!loc.has_position());
        assert_eq!(format!("{loc}"), "build.gradle.kts:-1:-1");
    }

    #[test]
    fn partial_position_is_not_known() {
        let loc = SourceLocation::new("a.kt", 3, SourceLocation::UNKNOWN);
        assert!(!loc.has_position());
        assert!(SourceLocation::new("a.kt", 3, 1).has_position());
    }

    #[test]
    fn equality_with_different_values() {
        let a = SourceLocation::new("a.kt", 1, 1);
        let b = SourceLocation::new("b.kt", 1, 1);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn serde_roundtrip() {
        let loc = SourceLocation::new("dir/a b.kt", 7, 12);
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, r#"{"path":"dir/a b.kt","line":7,"column":12}"#);
        let back: SourceLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, back);
    }
}
