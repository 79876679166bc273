//! Source locations attached to compiler diagnostics.
//!
//! A [`SourceLocation`] is the `(path, line, column)` triple a diagnostic may
//! point at. Locations are optional on diagnostics; when present all three
//! fields are always populated.

#![warn(missing_docs)]

pub mod location;

pub use location::SourceLocation;
