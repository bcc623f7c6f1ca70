//! vlandoc - Document switch VLAN layouts as wiki tables.
//!
//! Parses HP Procurve style configuration exports and renders a DokuWiki
//! table with one row per port and one column per VLAN, marking each port
//! as tagged (`T`) or untagged (`U`) on each VLAN.

pub mod config;
pub mod table;

mod error;
mod export;

pub use vlandoc_core::{identifier, interface, range, switch, trunk, vlan};

pub use error::VlandocError;
pub use export::{
    Exporter,
    wiki::{Wiki, WikiBuilder},
};

use std::io::{self, Write};

use log::{debug, info, trace};

use config::AppConfig;
use switch::SwitchConfig;
use table::Table;

/// Builder for parsing switch configurations and rendering reports.
///
/// # Examples
///
/// ```
/// use vlandoc::{ReportBuilder, config::AppConfig};
///
/// let source = "hostname \"edge\"\nvlan 10\n   untagged 1-4\n   exit\n";
///
/// let builder = ReportBuilder::new(AppConfig::default());
/// let switch = builder.parse(source).expect("Failed to parse");
/// let wiki = builder.render_wiki(&switch).expect("Failed to render");
///
/// assert!(wiki.contains("^ edge ^^^"));
/// assert!(wiki.contains("| 1-4 "));
/// ```
#[derive(Default)]
pub struct ReportBuilder {
    config: AppConfig,
}

impl ReportBuilder {
    /// Create a new report builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a configuration export into a [`SwitchConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`VlandocError::Parse`], carrying `source` for diagnostic
    /// rendering, when the parser reports errors.
    pub fn parse(&self, source: &str) -> Result<SwitchConfig, VlandocError> {
        info!("Parsing switch configuration");

        let switch = vlandoc_parser::parse(source, self.config.parser().to_parse_config())
            .map_err(|err| VlandocError::new_parse_error(err, source))?;

        debug!(hostname = switch.hostname(); "Switch configuration parsed successfully");
        trace!(switch:?; "Parsed switch configuration");

        Ok(switch)
    }

    /// Build the interface-by-VLAN table for `switch`.
    pub fn build_table(&self, switch: &SwitchConfig) -> Table {
        Table::build(switch, self.config.table(), self.config.labels())
    }

    /// Write the wiki table for `switch` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`VlandocError::Io`] when writing fails.
    pub fn write_wiki<W: Write>(&self, switch: &SwitchConfig, writer: W) -> Result<(), VlandocError> {
        let table = self.build_table(switch);
        info!(rows = table.rows().len(), vlans = table.vlan_ids().len(); "Rendering wiki table");

        let mut wiki = WikiBuilder::new(writer)
            .with_style(self.config.wiki())
            .with_labels(self.config.labels())
            .build();
        wiki.export_table(&table)?;

        Ok(())
    }

    /// Render the wiki table for `switch` to a string.
    ///
    /// # Errors
    ///
    /// Returns [`VlandocError::Io`] if the rendered markup is not valid UTF-8,
    /// which cannot happen for markup built from `&str` input.
    pub fn render_wiki(&self, switch: &SwitchConfig) -> Result<String, VlandocError> {
        let mut buffer = Vec::new();
        self.write_wiki(switch, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|err| VlandocError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}
