//! vlandoc Core Types
//!
//! This crate provides the model that a parsed switch configuration is
//! stored in. It includes:
//!
//! - **Identifiers**: Interface names with natural port ordering ([`identifier::InterfaceId`])
//! - **Ranges**: Member-spec expansion and interface sets ([`range`] module)
//! - **Interfaces, VLANs and trunks**: The entities a switch declares
//! - **Switch**: The aggregate configuration with get-or-create access ([`switch::SwitchConfig`])

pub mod identifier;
pub mod interface;
pub mod range;
pub mod switch;
pub mod trunk;
pub mod vlan;
