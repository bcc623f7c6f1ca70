//! # vlandoc Parser
//!
//! Parser for HP Procurve style switch configuration exports. It turns the
//! line-oriented `show running-config` text into a
//! [`SwitchConfig`](vlandoc_core::switch::SwitchConfig) holding the
//! hostname, interfaces, VLANs and trunks it declares.
//!
//! ## Usage
//!
//! ```
//! # use vlandoc_parser::{parse, ParseConfig, error::ParseError};
//! # use vlandoc_core::vlan::VlanId;
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "vlan 10\n   name \"Servers\"\n   untagged 1-4\n   exit\n";
//!
//!     let switch = parse(source, ParseConfig::default())?;
//!     let vlan = switch.vlan(VlanId::new(10)).unwrap();
//!     assert_eq!(vlan.name(), Some("Servers"));
//!     assert_eq!(vlan.untagged().len(), 4);
//!     Ok(())
//! }
//! ```

mod config;
mod context;
pub mod error;
mod grammar;
mod span;

pub use config::ParseConfig;
pub use span::{Span, Spanned};

use log::{debug, info};

use vlandoc_core::switch::SwitchConfig;

use context::ContextMachine;
use error::ParseError;

/// Parse a switch configuration export.
///
/// Lines that match no directive are skipped. Member lists are expanded as
/// they are read, and every interface, VLAN and trunk is created the first
/// time it is mentioned.
///
/// # Arguments
///
/// * `source` - The configuration text
/// * `config` - Which directives to honor and how to treat malformed member tokens
///
/// # Errors
///
/// Returns a [`ParseError`] holding every diagnostic when a VLAN number does
/// not fit in 32 bits, or when a member token cannot be expanded under
/// [`RangePolicy::Strict`](vlandoc_core::range::RangePolicy::Strict).
pub fn parse(source: &str, config: ParseConfig) -> Result<SwitchConfig, ParseError> {
    info!(bytes = source.len(); "Parsing switch configuration");
    let switch = ContextMachine::new(config).run(source)?;
    debug!(
        interfaces = switch.all_interfaces().len(),
        vlans = switch.all_vlans().len(),
        trunks = switch.trunks().len();
        "Switch configuration parsed"
    );
    Ok(switch)
}
