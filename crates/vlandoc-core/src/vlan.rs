//! VLANs and their port memberships.

use std::fmt;

use crate::range::InterfaceSet;

/// A VLAN number as declared with `vlan <n>`.
///
/// Leading zeros are not significant: `vlan 010` and `vlan 10` are the same VLAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VlanId(u32);

impl VlanId {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for VlanId {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

/// How a VLAN is carried on a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tagging {
    Tagged,
    Untagged,
}

impl Tagging {
    /// The single-letter marker used in reports: `T` or `U`.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Tagged => "T",
            Self::Untagged => "U",
        }
    }
}

impl fmt::Display for Tagging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tagged => "tagged",
            Self::Untagged => "untagged",
        })
    }
}

/// A VLAN with its description and member sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vlan {
    id: VlanId,
    name: Option<String>,
    tagged: InterfaceSet,
    untagged: InterfaceSet,
}

impl Vlan {
    pub fn new(id: VlanId) -> Self {
        Self {
            id,
            name: None,
            tagged: InterfaceSet::new(),
            untagged: InterfaceSet::new(),
        }
    }

    pub fn id(&self) -> VlanId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn tagged(&self) -> &InterfaceSet {
        &self.tagged
    }

    pub fn untagged(&self) -> &InterfaceSet {
        &self.untagged
    }

    /// Returns the member set for the given tagging mode.
    pub fn members_mut(&mut self, tagging: Tagging) -> &mut InterfaceSet {
        match tagging {
            Tagging::Tagged => &mut self.tagged,
            Tagging::Untagged => &mut self.untagged,
        }
    }

    /// Looks up how `name` is a member of this VLAN.
    ///
    /// A name listed both tagged and untagged reports [`Tagging::Tagged`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vlandoc_core::{
    ///     identifier::InterfaceId,
    ///     vlan::{Tagging, Vlan, VlanId},
    /// };
    ///
    /// let mut vlan = Vlan::new(VlanId::new(10));
    /// vlan.members_mut(Tagging::Untagged).insert(InterfaceId::new("A1"));
    /// assert_eq!(vlan.membership("A1"), Some(Tagging::Untagged));
    /// assert_eq!(vlan.membership("A2"), None);
    /// ```
    pub fn membership(&self, name: &str) -> Option<Tagging> {
        if self.tagged.contains_name(name) {
            Some(Tagging::Tagged)
        } else if self.untagged.contains_name(name) {
            Some(Tagging::Untagged)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::identifier::InterfaceId;

    #[test]
    fn test_tagged_wins_over_untagged() {
        let mut vlan = Vlan::new(VlanId::new(20));
        vlan.members_mut(Tagging::Untagged)
            .insert(InterfaceId::new("A1"));
        vlan.members_mut(Tagging::Tagged).insert(InterfaceId::new("A1"));
        assert_eq!(vlan.membership("A1"), Some(Tagging::Tagged));
    }

    #[test]
    fn test_markers() {
        assert_eq!(Tagging::Tagged.marker(), "T");
        assert_eq!(Tagging::Untagged.marker(), "U");
    }

    #[test]
    fn test_vlan_id_display_drops_leading_zeros() {
        let id: VlanId = "010".parse::<u32>().map(VlanId::new).unwrap();
        assert_eq!(id.to_string(), "10");
    }

    #[test]
    fn test_name_is_replaced() {
        let mut vlan = Vlan::new(VlanId::new(5));
        vlan.set_name("old");
        vlan.set_name("new");
        assert_eq!(vlan.name(), Some("new"));
    }
}
