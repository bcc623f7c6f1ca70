//! Command-line argument definitions for the vlandoc CLI.
//!
//! Arguments select the input and output, the configuration file, logging
//! verbosity, and override individual configuration settings.

use clap::Parser;

use vlandoc::config::HeaderLayout;

/// Command-line arguments for the vlandoc tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the switch configuration export
    #[arg(help = "Path to the configuration export; reads standard input when omitted or `-`")]
    pub input: Option<String>,

    /// Path to the output file; writes standard output when omitted or `-`
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Keep one row per port instead of merging identical neighbors
    #[arg(long)]
    pub no_collapse: bool,

    /// Omit the column width line before the table
    #[arg(long)]
    pub no_width_hint: bool,

    /// Header layout (hostname, stacked)
    #[arg(long)]
    pub layout: Option<HeaderLayout>,
}
