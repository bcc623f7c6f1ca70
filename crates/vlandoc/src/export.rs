//! Export of built tables.
//!
//! # Pipeline Position
//!
//! ```text
//! Configuration text
//!     ↓ parse
//! SwitchConfig
//!     ↓ Table::build
//! Table
//!     ↓ export (this module)
//! Wiki markup
//! ```
//!
//! # Available Backends
//!
//! - [`wiki`] - DokuWiki table markup via [`wiki::WikiBuilder`] and [`wiki::Wiki`]

/// DokuWiki export backend.
pub mod wiki;

use std::io;

use crate::table::Table;

/// Abstraction for table export backends.
pub trait Exporter {
    /// Writes `table` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while writing the output.
    fn export_table(&mut self, table: &Table) -> io::Result<()>;
}
