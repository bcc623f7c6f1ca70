//! Link aggregation groups.

use crate::{identifier::InterfaceId, range::InterfaceSet};

/// Index of a [`Trunk`] inside its [`SwitchConfig`](crate::switch::SwitchConfig).
///
/// Handles are only handed out by the switch that owns the trunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrunkHandle(usize);

impl TrunkHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A trunk such as `Trk1`, grouping several ports into one logical link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trunk {
    name: InterfaceId,
    kind: Option<String>,
    members: InterfaceSet,
}

impl Trunk {
    /// Creates an empty trunk.
    ///
    /// # Arguments
    ///
    /// * `name` - The trunk name, e.g. `Trk1`
    /// * `kind` - The aggregation protocol keyword, e.g. `LACP`, when one was given
    pub fn new(name: InterfaceId, kind: Option<String>) -> Self {
        Self {
            name,
            kind,
            members: InterfaceSet::new(),
        }
    }

    pub fn name(&self) -> &InterfaceId {
        &self.name
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn members(&self) -> &InterfaceSet {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut InterfaceSet {
        &mut self.members
    }
}
