//! Diagnostics reported while parsing a switch configuration.
//!
//! The parser never fails on lines it does not understand. Diagnostics are
//! only produced for directives that match but carry values that cannot be
//! decoded, such as a member range with mismatched module prefixes or a VLAN
//! number that does not fit in 32 bits.
//!
//! # Example
//!
//! ```
//! # use vlandoc_parser::error::{Diagnostic, ErrorCode};
//! # use vlandoc_parser::Span;
//!
//! let diag = Diagnostic::error("range `A1-B4` mixes module prefixes `A` and `B`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(14..19), "malformed range")
//!     .with_help("both ends of a range must use the same module letter");
//! assert_eq!(diag.code(), Some(ErrorCode::E100));
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
