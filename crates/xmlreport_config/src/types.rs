//! Configuration types deserialized from `xmlreport.toml`.

use serde::Deserialize;
use std::path::PathBuf;
use xmlreport_diagnostics::Severity;

/// The top-level configuration parsed from `xmlreport.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Report rendering settings.
    #[serde(default)]
    pub report: ReportSection,
}

/// The `[report]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    /// Name of the renderer to use (e.g., `"XML"`).
    #[serde(default = "default_format")]
    pub format: String,
    /// Diagnostics less severe than this are dropped before rendering.
    #[serde(default)]
    pub min_severity: Option<Severity>,
    /// Where to write the report; standard output when absent.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            format: default_format(),
            min_severity: None,
            output: None,
        }
    }
}

fn default_format() -> String {
    "XML".to_string()
}
