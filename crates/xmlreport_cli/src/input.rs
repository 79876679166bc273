//! Reading diagnostics from JSON input.
//!
//! Accepts either a JSON array of diagnostics or JSON Lines (one diagnostic
//! object per line, blank lines ignored).

use std::fs;
use std::io::{self, Read};

use xmlreport_diagnostics::Diagnostic;

/// Reads diagnostics from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_diagnostics(path: Option<&str>) -> Result<Vec<Diagnostic>, Box<dyn std::error::Error>> {
    let text = match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(p) => fs::read_to_string(p).map_err(|e| format!("failed to read {p}: {e}"))?,
    };
    Ok(parse_diagnostics(&text)?)
}

/// Parses diagnostics from a JSON array or JSON Lines text.
pub fn parse_diagnostics(text: &str) -> Result<Vec<Diagnostic>, serde_json::Error> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text);
    }
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(serde_json::from_str)
        .collect()
}
