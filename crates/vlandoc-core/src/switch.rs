//! The switch configuration aggregate.
//!
//! [`SwitchConfig`] owns every interface, VLAN and trunk a configuration
//! declares. Entities are created lazily the first time anything refers to
//! them, so repeated references never fail.

use std::collections::{BTreeMap, btree_map::Entry};

use log::trace;

use crate::{
    identifier::InterfaceId,
    interface::Interface,
    trunk::{Trunk, TrunkHandle},
    vlan::{Tagging, Vlan, VlanId},
};

/// Everything parsed from one switch configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchConfig {
    hostname: String,
    interfaces: BTreeMap<InterfaceId, Interface>,
    vlans: BTreeMap<VlanId, Vlan>,
    trunks: Vec<Trunk>,
}

impl SwitchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the hostname, or an empty string when none was declared.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn set_hostname(&mut self, hostname: impl Into<String>) {
        self.hostname = hostname.into();
    }

    /// Returns the interface named `id`, creating it when absent.
    pub fn interface_or_insert(&mut self, id: InterfaceId) -> &mut Interface {
        match self.interfaces.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                trace!(interface = entry.key().as_str(); "Creating interface");
                let interface = Interface::new(entry.key().clone());
                entry.insert(interface)
            }
        }
    }

    /// Returns the VLAN numbered `id`, creating it when absent.
    pub fn vlan_or_insert(&mut self, id: VlanId) -> &mut Vlan {
        self.vlans.entry(id).or_insert_with(|| {
            trace!(vlan = id.number(); "Creating VLAN");
            Vlan::new(id)
        })
    }

    /// Adds interfaces to a VLAN's tagged or untagged set.
    ///
    /// The VLAN and every listed interface are created when absent.
    pub fn add_vlan_members<I>(&mut self, vlan: VlanId, tagging: Tagging, members: I)
    where
        I: IntoIterator<Item = InterfaceId>,
    {
        for id in members {
            self.interface_or_insert(id.clone());
            self.vlan_or_insert(vlan).members_mut(tagging).insert(id);
        }
    }

    /// Registers a trunk and points each of its members at it.
    ///
    /// Member interfaces are created when absent. A member that already
    /// belonged to another trunk is moved to this one.
    pub fn add_trunk(&mut self, trunk: Trunk) -> TrunkHandle {
        let handle = TrunkHandle::new(self.trunks.len());
        for member in trunk.members() {
            self.interface_or_insert(member.clone()).set_trunk(handle);
        }
        trace!(trunk = trunk.name().as_str(), members = trunk.members().len(); "Registered trunk");
        self.trunks.push(trunk);
        handle
    }

    pub fn interface(&self, id: &InterfaceId) -> Option<&Interface> {
        self.interfaces.get(id)
    }

    pub fn vlan(&self, id: VlanId) -> Option<&Vlan> {
        self.vlans.get(&id)
    }

    pub fn trunk(&self, handle: TrunkHandle) -> Option<&Trunk> {
        self.trunks.get(handle.index())
    }

    /// Returns the trunk `interface` belongs to, if any.
    pub fn trunk_of(&self, interface: &Interface) -> Option<&Trunk> {
        interface.trunk().and_then(|handle| self.trunk(handle))
    }

    pub fn trunks(&self) -> &[Trunk] {
        &self.trunks
    }

    /// Returns every interface referenced anywhere, in natural port order.
    pub fn all_interfaces(&self) -> Vec<&Interface> {
        self.interfaces.values().collect()
    }

    /// Returns every VLAN, ordered by VLAN number.
    pub fn all_vlans(&self) -> Vec<&Vlan> {
        self.vlans.values().collect()
    }
}
