//! Compiler message severities, XML escaping, and report rendering.
//!
//! This crate provides the [`MessageRenderer`] contract and its XML
//! implementation, [`XmlMessageRenderer`], which turns a [`Severity`], a
//! message, and an optional [`SourceLocation`](xmlreport_source::SourceLocation)
//! into one well-formed XML element. Renderers are selected by name through
//! [`renderer_by_name`], and [`ReportWriter`] streams a complete report of
//! [`Diagnostic`]s.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod escape;
pub mod registry;
pub mod renderer;
pub mod severity;
pub mod writer;

pub use diagnostic::Diagnostic;
pub use error::ReportError;
pub use escape::{escape_xml, replace_all};
pub use registry::{renderer_by_name, renderer_names};
pub use renderer::{render_document, MessageRenderer, XmlMessageRenderer};
pub use severity::{ParseSeverityError, Severity};
pub use writer::ReportWriter;
