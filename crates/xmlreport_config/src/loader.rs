//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ReportConfig;
use std::path::Path;

/// The file name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "xmlreport.toml";

/// Loads and validates `xmlreport.toml` from a directory.
///
/// A missing file is not an error: the default configuration is returned.
pub fn load_config(dir: &Path) -> Result<ReportConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
        return Ok(ReportConfig::default());
    }
    log::debug!("loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates an `xmlreport.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ReportConfig, ConfigError> {
    let config: ReportConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks that the configured format names a registered renderer.
fn validate_config(config: &ReportConfig) -> Result<(), ConfigError> {
    let format = &config.report.format;
    if xmlreport_diagnostics::renderer_by_name(format).is_none() {
        return Err(ConfigError::UnknownFormat(format.clone()));
    }
    Ok(())
}
