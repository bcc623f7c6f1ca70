//! Configuration types for vlandoc reports.
//!
//! All types implement [`serde::Deserialize`]; every field is optional and
//! falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`ParserConfig`] - Which directives are honored and how strictly.
//! - [`TableConfig`] - How interfaces become table rows.
//! - [`WikiConfig`] - How the table is written as DokuWiki markup.
//! - [`LabelConfig`] - Header texts.
//!
//! # Example
//!
//! ```
//! # use vlandoc::config::{AppConfig, HeaderLayout};
//! let config = AppConfig::default();
//! assert!(config.table().collapse());
//! assert_eq!(config.wiki().layout(), HeaderLayout::Hostname);
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;

use vlandoc_core::range::RangePolicy;
use vlandoc_parser::ParseConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    parser: ParserConfig,

    #[serde(default)]
    table: TableConfig,

    #[serde(default)]
    wiki: WikiConfig,

    #[serde(default)]
    labels: LabelConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        parser: ParserConfig,
        table: TableConfig,
        wiki: WikiConfig,
        labels: LabelConfig,
    ) -> Self {
        Self {
            parser,
            table,
            wiki,
            labels,
        }
    }

    pub fn parser(&self) -> &ParserConfig {
        &self.parser
    }

    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    pub fn wiki(&self) -> &WikiConfig {
        &self.wiki
    }

    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }

    pub fn table_mut(&mut self) -> &mut TableConfig {
        &mut self.table
    }

    pub fn wiki_mut(&mut self) -> &mut WikiConfig {
        &mut self.wiki
    }
}

/// The `[parser]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Whether `hostname` lines are honored.
    hostname: bool,

    /// How malformed member tokens are treated.
    ranges: RangePolicy,
}

impl ParserConfig {
    pub fn new(hostname: bool, ranges: RangePolicy) -> Self {
        Self { hostname, ranges }
    }

    pub fn hostname(&self) -> bool {
        self.hostname
    }

    pub fn ranges(&self) -> RangePolicy {
        self.ranges
    }

    /// Converts this section into the parser's own options.
    pub fn to_parse_config(&self) -> ParseConfig {
        ParseConfig::new(self.hostname, self.ranges)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new(true, RangePolicy::Strict)
    }
}

/// The `[table]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Merge adjacent rows that differ only in their port.
    collapse: bool,

    /// Interfaces whose name starts with this prefix are trunk pseudo-ports
    /// and get no row of their own. An empty prefix keeps every interface.
    trunk_prefix: String,
}

impl TableConfig {
    pub fn new(collapse: bool, trunk_prefix: impl Into<String>) -> Self {
        Self {
            collapse,
            trunk_prefix: trunk_prefix.into(),
        }
    }

    pub fn collapse(&self) -> bool {
        self.collapse
    }

    pub fn trunk_prefix(&self) -> &str {
        &self.trunk_prefix
    }

    pub fn set_collapse(&mut self, collapse: bool) {
        self.collapse = collapse;
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(true, "Trk")
    }
}

/// How the header rows of the wiki table are arranged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    /// The hostname spans the first three columns on the first header row,
    /// the second header row names every column.
    #[default]
    Hostname,

    /// The column labels span both header rows, and the second row lists the
    /// right-aligned VLAN numbers.
    Stacked,
}

impl fmt::Display for HeaderLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderLayout::Hostname => write!(f, "hostname"),
            HeaderLayout::Stacked => write!(f, "stacked"),
        }
    }
}

impl FromStr for HeaderLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hostname" => Ok(HeaderLayout::Hostname),
            "stacked" => Ok(HeaderLayout::Stacked),
            other => Err(format!(
                "unknown header layout `{other}`, expected `hostname` or `stacked`"
            )),
        }
    }
}

/// The `[wiki]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Emit a `|< ... >|` column width line before the table.
    width_hint: bool,

    /// Overall table width used in the width line.
    table_width: String,

    /// Width of every VLAN column used in the width line.
    vlan_column_width: String,

    layout: HeaderLayout,
}

impl WikiConfig {
    pub fn width_hint(&self) -> bool {
        self.width_hint
    }

    pub fn table_width(&self) -> &str {
        &self.table_width
    }

    pub fn vlan_column_width(&self) -> &str {
        &self.vlan_column_width
    }

    pub fn layout(&self) -> HeaderLayout {
        self.layout
    }

    pub fn set_width_hint(&mut self, width_hint: bool) {
        self.width_hint = width_hint;
    }

    pub fn set_layout(&mut self, layout: HeaderLayout) {
        self.layout = layout;
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            width_hint: true,
            table_width: "100%".to_string(),
            vlan_column_width: "3em".to_string(),
            layout: HeaderLayout::default(),
        }
    }
}

/// The `[labels]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    port: String,
    trunk: String,
    name: String,
    vlans: String,
}

impl LabelConfig {
    pub fn new(
        port: impl Into<String>,
        trunk: impl Into<String>,
        name: impl Into<String>,
        vlans: impl Into<String>,
    ) -> Self {
        Self {
            port: port.into(),
            trunk: trunk.into(),
            name: name.into(),
            vlans: vlans.into(),
        }
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn trunk(&self) -> &str {
        &self.trunk
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Heading spanning all VLAN columns.
    pub fn vlans(&self) -> &str {
        &self.vlans
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::new(
            "Port",
            "Trunk",
            "Description",
            "VLAN configuration (T=tagged, U=untagged)",
        )
    }
}
