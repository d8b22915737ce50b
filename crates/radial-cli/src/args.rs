//! Command-line argument definitions for the Radial CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the tree description and output paths,
//! the output format, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Radial diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML tree description. The built-in flow diagram is drawn
    /// when omitted.
    #[arg(help = "Path to the tree description (TOML)")]
    pub input: Option<String>,

    /// Path to the output file
    #[arg(short, long, default_value = "flow_diagram.pdf")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (pdf, svg, trace). Inferred from the output extension
    /// when omitted.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
