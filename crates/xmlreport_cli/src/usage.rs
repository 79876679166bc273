//! `xmlreport usage` — wrap usage text in a report.

use xmlreport_diagnostics::ReportWriter;

use crate::settings::{load_settings, open_output, select_renderer};
use crate::{GlobalArgs, UsageArgs};

/// Runs the `xmlreport usage` command.
///
/// The report goes to the configured `output` file, or stdout when none is set.
pub fn run(args: &UsageArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_settings(global)?;
    let renderer = select_renderer(args.format.as_deref(), &config)?;

    let mut writer = ReportWriter::new(renderer, open_output(config.report.output.as_deref())?);
    writer.begin()?;
    writer.write_usage(&args.text)?;
    writer.finish()?;
    Ok(0)
}
