//! Interface-by-VLAN tables.
//!
//! A [`Table`] has one row per physical interface and one column per VLAN.
//! Rows come out in natural port order; adjacent rows that agree on every
//! cell but the port can be collapsed into a single `A1-A8` row.

use log::debug;

use vlandoc_core::{
    switch::SwitchConfig,
    trunk::Trunk,
    vlan::{Tagging, VlanId},
};

use crate::config::{LabelConfig, TableConfig};

/// Number of columns before the VLAN columns: port, trunk and name.
pub const LEADING_COLUMNS: usize = 3;

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    port: String,
    trunk: String,
    name: String,
    vlans: Vec<Option<Tagging>>,
}

impl Row {
    pub fn new(
        port: impl Into<String>,
        trunk: impl Into<String>,
        name: impl Into<String>,
        vlans: Vec<Option<Tagging>>,
    ) -> Self {
        Self {
            port: port.into(),
            trunk: trunk.into(),
            name: name.into(),
            vlans,
        }
    }

    /// The port, or a `first-last` port range for a collapsed row.
    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn trunk(&self) -> &str {
        &self.trunk
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Membership per VLAN column, in column order.
    pub fn vlans(&self) -> &[Option<Tagging>] {
        &self.vlans
    }

    /// Every cell of the row as text, VLAN cells as `T`, `U` or empty.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        [self.port.as_str(), self.trunk.as_str(), self.name.as_str()]
            .into_iter()
            .chain(
                self.vlans
                    .iter()
                    .map(|tagging| tagging.map_or("", Tagging::marker)),
            )
    }

    /// Returns `true` when both rows agree on every cell except the port.
    pub fn same_attributes(&self, other: &Self) -> bool {
        self.trunk == other.trunk && self.name == other.name && self.vlans == other.vlans
    }
}

/// A rendered-ready table for one switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    hostname: String,
    header: Vec<String>,
    vlan_ids: Vec<VlanId>,
    rows: Vec<Row>,
}

impl Table {
    /// Builds the table for `switch`.
    ///
    /// Interfaces named with the configured trunk prefix get no row. An
    /// interface that belongs to a trunk reports the trunk's VLAN
    /// memberships instead of its own.
    ///
    /// # Arguments
    ///
    /// * `switch` - The parsed configuration
    /// * `config` - Row collapsing and trunk prefix settings
    /// * `labels` - Texts for the leading column headers
    pub fn build(switch: &SwitchConfig, config: &TableConfig, labels: &LabelConfig) -> Self {
        let vlans = switch.all_vlans();
        let prefix = config.trunk_prefix();

        let rows: Vec<Row> = switch
            .all_interfaces()
            .into_iter()
            .filter(|interface| prefix.is_empty() || !interface.id().as_str().starts_with(prefix))
            .map(|interface| {
                let trunk = switch.trunk_of(interface);
                let group = trunk.map_or(interface.id(), Trunk::name);
                Row::new(
                    interface.id().as_str(),
                    trunk.map(|trunk| trunk.name().as_str()).unwrap_or_default(),
                    interface.name().unwrap_or_default(),
                    vlans
                        .iter()
                        .map(|vlan| vlan.membership(group.as_str()))
                        .collect(),
                )
            })
            .collect();

        let row_count = rows.len();
        let rows = if config.collapse() {
            collapse_rows(rows)
        } else {
            rows
        };
        debug!(rows = row_count, collapsed = rows.len(), vlans = vlans.len(); "Table built");

        let vlan_ids: Vec<VlanId> = vlans.iter().map(|vlan| vlan.id()).collect();
        let header = [labels.port(), labels.trunk(), labels.name()]
            .into_iter()
            .map(str::to_string)
            .chain(vlan_ids.iter().map(VlanId::to_string))
            .collect();

        Self {
            hostname: switch.hostname().to_string(),
            header,
            vlan_ids,
            rows,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Column headers: the three leading labels followed by the VLAN numbers.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn vlan_ids(&self) -> &[VlanId] {
        &self.vlan_ids
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Width of each column in characters: the longest of its header and
    /// every row's cell. Cells are never truncated.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .header
            .iter()
            .map(|cell| cell.chars().count())
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

/// Merges runs of adjacent rows with identical non-port cells.
///
/// A run of one keeps its port, a longer run gets `first-last` as its port.
///
/// # Examples
///
/// ```
/// use vlandoc::table::{Row, collapse_rows};
/// use vlandoc::vlan::Tagging;
///
/// let rows = vec![
///     Row::new("A1", "", "", vec![Some(Tagging::Untagged), None]),
///     Row::new("A2", "", "", vec![Some(Tagging::Untagged), None]),
///     Row::new("A3", "", "", vec![Some(Tagging::Tagged), None]),
/// ];
/// let collapsed = collapse_rows(rows);
/// assert_eq!(collapsed.len(), 2);
/// assert_eq!(collapsed[0].port(), "A1-A2");
/// assert_eq!(collapsed[1].port(), "A3");
/// ```
pub fn collapse_rows(rows: Vec<Row>) -> Vec<Row> {
    rows.chunk_by(Row::same_attributes)
        .filter_map(|run| {
            let (first, last) = (run.first()?, run.last()?);
            let mut row = first.clone();
            if run.len() > 1 {
                row.port = format!("{}-{}", first.port, last.port);
            }
            Some(row)
        })
        .collect()
}
