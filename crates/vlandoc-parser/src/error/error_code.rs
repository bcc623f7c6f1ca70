//! Stable codes for parser diagnostics.
//!
//! - `E1xx` - Member-spec expansion
//! - `E2xx` - Block headers

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Mismatched range prefixes.
    ///
    /// The two ends of a range carry different module letters, e.g. `A1-B4`.
    E100,

    /// Invalid range bound.
    ///
    /// One end of a range is not a module letter followed by a port number.
    E101,

    /// Range too large.
    ///
    /// The range expands to more ports than any switch could have.
    E102,

    /// VLAN number out of range.
    ///
    /// The number after `vlan` does not fit in 32 bits.
    E200,
}

impl ErrorCode {
    /// Returns the code as written in reports, e.g. `"E100"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
        }
    }

    /// Returns a short description used as the label of the offending span.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "mismatched range prefixes",
            ErrorCode::E101 => "invalid range bound",
            ErrorCode::E102 => "range too large",
            ErrorCode::E200 => "VLAN number out of range",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
