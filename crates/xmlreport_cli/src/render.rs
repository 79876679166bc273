//! `xmlreport render` — turn a list of diagnostics into a report.
//!
//! 1. Load `xmlreport.toml` and merge it with the CLI flags
//! 2. Read diagnostics from the input file or stdin
//! 3. Drop diagnostics below the minimum severity
//! 4. Write preamble, one fragment per diagnostic, and conclusion

use std::path::PathBuf;

use xmlreport_diagnostics::ReportWriter;

use crate::input::read_diagnostics;
use crate::settings::{load_settings, open_output, select_renderer};
use crate::{GlobalArgs, RenderArgs};

/// Runs the `xmlreport render` command.
///
/// Returns exit code 1 if any error-level diagnostic was rendered, 0 otherwise.
pub fn run(args: &RenderArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_settings(global)?;
    let renderer = select_renderer(args.format.as_deref(), &config)?;
    let min_severity = args.min_severity.or(config.report.min_severity);
    let output = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .or(config.report.output);

    let mut diagnostics = read_diagnostics(args.input.as_deref())?;
    if let Some(min) = min_severity {
        let before = diagnostics.len();
        diagnostics.retain(|d| d.severity >= min);
        let skipped = before - diagnostics.len();
        if skipped > 0 {
            log::info!("skipped {skipped} diagnostic(s) below {min}");
        }
    }

    let mut writer = ReportWriter::new(renderer, open_output(output.as_deref())?);
    writer.begin()?;
    for diag in &diagnostics {
        writer.write(diag)?;
    }
    writer.finish()?;

    let error_count = diagnostics
        .iter()
        .filter(|d| d.severity.is_error())
        .count();
    log::info!(
        "rendered {} diagnostic(s), {} error(s)",
        diagnostics.len(),
        error_count
    );

    if error_count > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}
