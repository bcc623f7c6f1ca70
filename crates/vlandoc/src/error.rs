//! Error types for vlandoc operations.

use std::io;

use thiserror::Error;

use vlandoc_parser::error::ParseError;

/// The main error type for vlandoc operations.
///
/// The `Parse` variant keeps the configuration source next to the parser
/// diagnostics so that their spans can be rendered against it.
#[derive(Debug, Error)]
pub enum VlandocError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl VlandocError {
    /// Create a new `Parse` error with the associated source.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
