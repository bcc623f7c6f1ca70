//! DokuWiki table markup.
//!
//! Header rows use `^` as the cell separator and data rows use `|`. Cells are
//! padded to their column width so the markup stays readable as plain text.
//! With the stacked layout the leading labels span both header rows through
//! DokuWiki's `:::` row-span marker, and VLAN numbers are right-aligned by
//! padding them on the left.

use std::io::Write;

use log::debug;

use crate::{
    config::{HeaderLayout, LabelConfig, WikiConfig},
    export::Exporter,
    table::{LEADING_COLUMNS, Table},
};

const HEADER_SEPARATOR: char = '^';
const ROW_SEPARATOR: char = '|';
const ROW_SPAN: &str = ":::";

/// Builder for [`Wiki`] exporters.
pub struct WikiBuilder<W> {
    writer: W,
    style: WikiConfig,
    vlan_heading: String,
}

impl<W: Write> WikiBuilder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            style: WikiConfig::default(),
            vlan_heading: LabelConfig::default().vlans().to_string(),
        }
    }

    pub fn with_style(mut self, style: &WikiConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Takes the heading spanning the VLAN columns from `labels`.
    pub fn with_labels(mut self, labels: &LabelConfig) -> Self {
        self.vlan_heading = labels.vlans().to_string();
        self
    }

    pub fn build(self) -> Wiki<W> {
        Wiki {
            writer: self.writer,
            style: self.style,
            vlan_heading: self.vlan_heading,
        }
    }
}

/// Writes tables as DokuWiki markup.
pub struct Wiki<W> {
    writer: W,
    style: WikiConfig,
    vlan_heading: String,
}

impl<W: Write> Wiki<W> {
    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// `|< 100% - - - 3em 3em >|`: automatic width for the leading columns,
    /// fixed width for every VLAN column.
    fn write_width_hint(&mut self, vlan_count: usize) -> std::io::Result<()> {
        write!(self.writer, "|< {}", self.style.table_width())?;
        for _ in 0..LEADING_COLUMNS {
            write!(self.writer, " -")?;
        }
        for _ in 0..vlan_count {
            write!(self.writer, " {}", self.style.vlan_column_width())?;
        }
        writeln!(self.writer, " >|")
    }

    /// Writes the VLAN heading cell spanning `vlan_count` columns, then
    /// ends the line. Nothing but the line end is written without VLANs.
    fn finish_vlan_heading(&mut self, vlan_count: usize) -> std::io::Result<()> {
        if vlan_count > 0 {
            write!(
                self.writer,
                " {} {}",
                self.vlan_heading,
                HEADER_SEPARATOR.to_string().repeat(vlan_count)
            )?;
        }
        writeln!(self.writer)
    }

    fn write_row<'c>(
        &mut self,
        cells: impl IntoIterator<Item = &'c str>,
        widths: &[usize],
        separator: char,
    ) -> std::io::Result<()> {
        write!(self.writer, "{separator}")?;
        for (cell, &width) in cells.into_iter().zip(widths) {
            write!(self.writer, " {cell:<width$} {separator}")?;
        }
        writeln!(self.writer)
    }

    fn write_hostname_header(&mut self, table: &Table, widths: &[usize]) -> std::io::Result<()> {
        write!(
            self.writer,
            "{HEADER_SEPARATOR} {} {HEADER_SEPARATOR}{HEADER_SEPARATOR}{HEADER_SEPARATOR}",
            table.hostname()
        )?;
        self.finish_vlan_heading(table.vlan_ids().len())?;
        self.write_row(
            table.header().iter().map(String::as_str),
            widths,
            HEADER_SEPARATOR,
        )
    }

    fn write_stacked_header(&mut self, table: &Table, widths: &[usize]) -> std::io::Result<()> {
        let (leading_widths, vlan_widths) = widths.split_at(LEADING_COLUMNS.min(widths.len()));

        write!(self.writer, "{HEADER_SEPARATOR}")?;
        for (label, &width) in table.header().iter().zip(leading_widths) {
            write!(self.writer, " {label:<width$} {HEADER_SEPARATOR}")?;
        }
        self.finish_vlan_heading(table.vlan_ids().len())?;

        write!(self.writer, "{HEADER_SEPARATOR}")?;
        for &width in leading_widths {
            write!(self.writer, " {ROW_SPAN:<width$} {HEADER_SEPARATOR}")?;
        }
        for (vlan, &width) in table.vlan_ids().iter().zip(vlan_widths) {
            write!(self.writer, " {vlan:>width$} {HEADER_SEPARATOR}")?;
        }
        writeln!(self.writer)
    }
}

impl<W: Write> Exporter for Wiki<W> {
    fn export_table(&mut self, table: &Table) -> std::io::Result<()> {
        let layout = self.style.layout();
        debug!(layout:? = layout, rows = table.rows().len(); "Writing wiki table");

        let mut widths = table.column_widths();
        if layout == HeaderLayout::Stacked {
            // One extra column of padding gives every VLAN number the two
            // leading spaces DokuWiki needs to right-align it.
            for width in widths.iter_mut().skip(LEADING_COLUMNS) {
                *width += 1;
            }
        }

        if self.style.width_hint() {
            self.write_width_hint(table.vlan_ids().len())?;
        }
        match layout {
            HeaderLayout::Hostname => self.write_hostname_header(table, &widths)?,
            HeaderLayout::Stacked => self.write_stacked_header(table, &widths)?,
        }
        for row in table.rows() {
            self.write_row(row.cells(), &widths, ROW_SEPARATOR)?;
        }

        self.writer.flush()
    }
}
