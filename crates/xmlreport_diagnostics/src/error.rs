//! Error types for writing rendered reports.

/// Errors that can occur while writing a report to an output stream.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The underlying writer failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// A message was written before [`begin`](crate::ReportWriter::begin).
    #[error("report has not been started")]
    NotStarted,

    /// [`begin`](crate::ReportWriter::begin) was called twice.
    #[error("report has already been started")]
    AlreadyStarted,
}
