//! Streaming a rendered report to an [`io::Write`] sink.

use crate::diagnostic::Diagnostic;
use crate::error::ReportError;
use crate::renderer::MessageRenderer;
use std::io;

/// Writes one report to an output stream using a [`MessageRenderer`].
///
/// Brackets every message between a single preamble and a single conclusion,
/// so the bytes written form one complete document.
pub struct ReportWriter<'r, W: io::Write> {
    renderer: &'r dyn MessageRenderer,
    out: W,
    started: bool,
    written: usize,
}

impl<'r, W: io::Write> ReportWriter<'r, W> {
    /// Creates a writer; nothing is written until [`begin`](Self::begin).
    pub fn new(renderer: &'r dyn MessageRenderer, out: W) -> Self {
        Self {
            renderer,
            out,
            started: false,
            written: 0,
        }
    }

    /// Writes the report preamble.
    pub fn begin(&mut self) -> Result<(), ReportError> {
        if self.started {
            return Err(ReportError::AlreadyStarted);
        }
        log::debug!("starting {} report", self.renderer.name());
        self.out
            .write_all(self.renderer.render_preamble().as_bytes())?;
        self.started = true;
        Ok(())
    }

    /// Renders and writes a single diagnostic.
    pub fn write(&mut self, diag: &Diagnostic) -> Result<(), ReportError> {
        let text = self.renderer.render_diagnostic(diag);
        self.write_fragment(&text)
    }

    /// Renders and writes usage text.
    pub fn write_usage(&mut self, usage: &str) -> Result<(), ReportError> {
        let text = self.renderer.render_usage(usage);
        self.write_fragment(&text)
    }

    /// Returns the number of messages written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes the conclusion, flushes, and returns the underlying writer.
    pub fn finish(mut self) -> Result<W, ReportError> {
        if !self.started {
            return Err(ReportError::NotStarted);
        }
        self.out
            .write_all(self.renderer.render_conclusion().as_bytes())?;
        self.out.flush()?;
        log::debug!("finished report with {} message(s)", self.written);
        Ok(self.out)
    }

    fn write_fragment(&mut self, text: &str) -> Result<(), ReportError> {
        if !self.started {
            return Err(ReportError::NotStarted);
        }
        self.out.write_all(text.as_bytes())?;
        self.written += 1;
        Ok(())
    }
}
