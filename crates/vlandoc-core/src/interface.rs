//! Physical and logical switch interfaces.

use crate::{identifier::InterfaceId, trunk::TrunkHandle};

/// A switch port, with its optional description and trunk membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    id: InterfaceId,
    name: Option<String>,
    trunk: Option<TrunkHandle>,
}

impl Interface {
    pub fn new(id: InterfaceId) -> Self {
        Self {
            id,
            name: None,
            trunk: None,
        }
    }

    pub fn id(&self) -> &InterfaceId {
        &self.id
    }

    /// Returns the description set with a `name` directive, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the description. A later `name` directive replaces an earlier one.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Returns the trunk this interface is aggregated into, if any.
    pub fn trunk(&self) -> Option<TrunkHandle> {
        self.trunk
    }

    pub(crate) fn set_trunk(&mut self, trunk: TrunkHandle) {
        self.trunk = Some(trunk);
    }
}
