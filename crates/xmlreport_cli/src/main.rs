//! xmlreport — renders compiler diagnostics as an XML report.
//!
//! Provides `xmlreport render` for turning a JSON list of diagnostics into a
//! report, `xmlreport usage` for wrapping usage text the same way, and
//! `xmlreport formats` for listing the available report formats.

#![warn(missing_docs)]

mod formats;
mod input;
mod render;
mod settings;
mod usage;

use std::process;

use clap::{Parser, Subcommand};
use xmlreport_diagnostics::Severity;

/// xmlreport — machine-readable compiler diagnostics.
#[derive(Parser, Debug)]
#[command(name = "xmlreport", version, about = "Compiler diagnostic report renderer")]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) log output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `xmlreport.toml` file or the directory containing it.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a JSON list of diagnostics as a report.
    Render(RenderArgs),
    /// Render usage text as a report.
    Usage(UsageArgs),
    /// List the available report formats.
    Formats,
}

/// Arguments for the `xmlreport render` subcommand.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// JSON file with the diagnostics to render; `-` or omitted reads stdin.
    pub input: Option<String>,

    /// Report format to render with (overrides the config file).
    #[arg(short = 'f', long = "report-output-format")]
    pub format: Option<String>,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Drop diagnostics less severe than this (e.g. `WARNING`).
    #[arg(long)]
    pub min_severity: Option<Severity>,
}

/// Arguments for the `xmlreport usage` subcommand.
#[derive(Parser, Debug)]
pub struct UsageArgs {
    /// The usage text to render.
    pub text: String,

    /// Report format to render with (overrides the config file).
    #[arg(short = 'f', long = "report-output-format")]
    pub format: Option<String>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error log output.
    pub quiet: bool,
    /// Whether to print debug log output.
    pub verbose: bool,
    /// Optional path to a custom config file or directory.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };
    init_logger(&global);

    let result = match cli.command {
        Command::Render(ref args) => render::run(args, &global),
        Command::Usage(ref args) => usage::run(args, &global),
        Command::Formats => formats::run(),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Initializes `env_logger`; `RUST_LOG` takes precedence over the CLI flags.
fn init_logger(global: &GlobalArgs) {
    let env = env_logger::Env::default().default_filter_or(default_log_filter(global));
    if let Err(e) = env_logger::try_init_from_env(env) {
        eprintln!("warning: couldn't init logger: {e}");
    }
}

fn default_log_filter(global: &GlobalArgs) -> &'static str {
    if global.quiet {
        "error"
    } else if global.verbose {
        "debug"
    } else {
        "warn"
    }
}
