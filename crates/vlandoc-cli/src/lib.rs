//! CLI logic for the vlandoc tool.
//!
//! This module reads a switch configuration export, runs it through the
//! vlandoc pipeline and writes the DokuWiki table.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs::{self, File},
    io::{self, BufWriter, Read},
};

use log::{info, warn};

use vlandoc::{ReportBuilder, VlandocError};

/// Path that selects a standard stream instead of a file.
const STDIO_PATH: &str = "-";

/// Run the vlandoc CLI application
///
/// Reads the configuration export from the input file or standard input
/// and writes the wiki table to the output file or standard output.
///
/// # Errors
///
/// Returns `VlandocError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
pub fn run(args: &Args) -> Result<(), VlandocError> {
    info!(
        input_path:? = args.input,
        output_path:? = args.output;
        "Processing switch configuration"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    config::apply_overrides(&mut app_config, args);

    let source = read_input(args.input.as_deref())?;

    let builder = ReportBuilder::new(app_config);
    let switch = builder.parse(&source)?;

    match args.output.as_deref() {
        Some(path) if path != STDIO_PATH => {
            let file = BufWriter::new(File::create(path)?);
            builder.write_wiki(&switch, file)?;
            info!(output_file = path; "Wiki table exported successfully");
        }
        _ => {
            builder.write_wiki(&switch, io::stdout().lock())?;
            info!("Wiki table written to standard output");
        }
    }

    Ok(())
}

/// Read the whole configuration export.
///
/// Exports occasionally carry bytes that are not valid UTF-8 in banners or
/// descriptions; those are replaced rather than rejected.
fn read_input(path: Option<&str>) -> io::Result<String> {
    let bytes = match path {
        Some(path) if path != STDIO_PATH => fs::read(path)?,
        _ => {
            let mut bytes = Vec::new();
            io::stdin().lock().read_to_end(&mut bytes)?;
            bytes
        }
    };

    match String::from_utf8(bytes) {
        Ok(source) => Ok(source),
        Err(err) => {
            warn!("Input is not valid UTF-8, replacing invalid bytes");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}
