//! Shared helpers for resolving configuration, renderer, and output.
//!
//! CLI flags take precedence over `xmlreport.toml`, which takes precedence
//! over built-in defaults.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use xmlreport_config::{load_config, load_config_from_str, ReportConfig};
use xmlreport_diagnostics::{renderer_by_name, renderer_names, MessageRenderer};

use crate::GlobalArgs;

/// Loads the configuration selected by the global `--config` flag.
///
/// A file path is read directly; a directory is searched for
/// `xmlreport.toml`. Without the flag the current directory is searched.
/// A relative `output` path is resolved against the directory the
/// configuration was loaded from.
pub fn load_settings(global: &GlobalArgs) -> Result<ReportConfig, Box<dyn std::error::Error>> {
    let (config_dir, mut config) = match global.config {
        Some(ref config_path) => {
            let p = PathBuf::from(config_path);
            if p.is_file() {
                log::debug!("reading configuration file {}", p.display());
                let config = load_config_from_str(&fs::read_to_string(&p)?)?;
                let dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
                (dir, config)
            } else {
                let config = load_config(&p)?;
                (p, config)
            }
        }
        None => {
            let cwd = std::env::current_dir()?;
            let config = load_config(&cwd)?;
            (cwd, config)
        }
    };

    if let Some(output) = config.report.output.as_mut() {
        if output.is_relative() {
            *output = config_dir.join(&*output);
        }
    }
    Ok(config)
}

/// Picks the renderer named on the command line, falling back to the config.
pub fn select_renderer(
    cli_format: Option<&str>,
    config: &ReportConfig,
) -> Result<&'static dyn MessageRenderer, Box<dyn std::error::Error>> {
    let name = cli_format.unwrap_or(&config.report.format);
    match renderer_by_name(name) {
        Some(renderer) => {
            log::debug!("using {} renderer", renderer.name());
            Ok(renderer)
        }
        None => {
            let available: Vec<_> = renderer_names().collect();
            Err(format!(
                "unknown report format '{name}' (available: {})",
                available.join(", ")
            )
            .into())
        }
    }
}

/// Opens the report destination: the given file, or stdout when `None`.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            log::debug!("writing report to {}", p.display());
            Ok(Box::new(BufWriter::new(fs::File::create(p)?)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn global_with_config(config: Option<String>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            config,
        }
    }

    #[test]
    fn load_settings_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "[report]\nmin_severity = \"ERROR\"\n").unwrap();
        let config = load_settings(&global_with_config(Some(path.display().to_string()))).unwrap();
        assert_eq!(
            config.report.min_severity,
            Some(xmlreport_diagnostics::Severity::Error)
        );
    }

    #[test]
    fn relative_output_resolves_against_config_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("xmlreport.toml"),
            "[report]\noutput = \"build/report.xml\"\n",
        )
        .unwrap();
        let config =
            load_settings(&global_with_config(Some(tmp.path().display().to_string()))).unwrap();
        assert_eq!(
            config.report.output,
            Some(tmp.path().join("build/report.xml"))
        );
    }

    #[test]
    fn relative_output_resolves_against_config_file_parent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ci.toml");
        fs::write(&path, "[report]\noutput = \"report.xml\"\n").unwrap();
        let config = load_settings(&global_with_config(Some(path.display().to_string()))).unwrap();
        assert_eq!(config.report.output, Some(tmp.path().join("report.xml")));
    }

    #[test]
    fn absolute_output_is_kept() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("elsewhere/report.xml");
        fs::write(
            tmp.path().join("xmlreport.toml"),
            format!("[report]\noutput = {:?}\n", out.display().to_string()),
        )
        .unwrap();
        let config =
            load_settings(&global_with_config(Some(tmp.path().display().to_string()))).unwrap();
        assert_eq!(config.report.output, Some(out));
    }

    #[test]
    fn load_settings_from_directory_without_file() {
        let tmp = TempDir::new().unwrap();
        let config =
            load_settings(&global_with_config(Some(tmp.path().display().to_string()))).unwrap();
        assert_eq!(config.report.format, "XML");
    }

    #[test]
    fn load_settings_reports_bad_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[report]\nformat = \"html\"\n").unwrap();
        let err = load_settings(&global_with_config(Some(path.display().to_string()))).unwrap_err();
        assert_eq!(err.to_string(), "unknown report format 'html'");
    }

    #[test]
    fn cli_format_overrides_config() {
        let config = ReportConfig::default();
        let renderer = select_renderer(Some("xml"), &config).unwrap();
        assert_eq!(renderer.name(), "XML");
    }

    #[test]
    fn unknown_cli_format_lists_available() {
        let config = ReportConfig::default();
        let Err(err) = select_renderer(Some("plain"), &config) else {
            panic!("expected an unknown format error");
        };
        assert_eq!(
            err.to_string(),
            "unknown report format 'plain' (available: XML)"
        );
    }

    #[test]
    fn open_output_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/report.xml");
        {
            let mut out = open_output(Some(&path)).unwrap();
            out.write_all(b"<MESSAGES></MESSAGES>").unwrap();
            out.flush().unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "<MESSAGES></MESSAGES>");
    }
}
