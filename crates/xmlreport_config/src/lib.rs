//! Parsing and validation of `xmlreport.toml` configuration files.
//!
//! This crate reads the optional configuration file and produces a
//! strongly-typed [`ReportConfig`] naming the renderer, severity filter, and
//! output destination to use.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
