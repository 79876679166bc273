//! `xmlreport formats` — list the registered report formats.

use xmlreport_diagnostics::renderer_names;

/// Prints one report format name per line.
pub fn run() -> Result<i32, Box<dyn std::error::Error>> {
    for name in renderer_names() {
        println!("{name}");
    }
    Ok(0)
}
