//! Render targets for the report loader.
//!
//! - [`TerminalTable`] draws the rows and totals with prettytable
//! - [`HtmlTable`] produces `<tr>` markup for a report table body
//! - [`CsvTable`] writes the rows and a trailing totals record as CSV
//!
//! Every target keeps its state in memory and is flushed by the caller once
//! the load has finished.

use crate::libs::loader::RenderTarget;
use crate::libs::report::{BadgeStyle, TableRow, TotalsView};
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};
use std::io::Write;

const HEADER: [&str; 7] = ["DATE", "START", "END", "DURATION", "DELAY", "EXTRA", "STATUS"];

#[derive(Debug, Clone)]
pub struct TerminalTable {
    rows: Vec<TableRow>,
    totals: TotalsView,
}

impl Default for TerminalTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalTable {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            totals: TotalsView::zeroed(),
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn totals(&self) -> &TotalsView {
        &self.totals
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::new(HEADER.iter().map(|title| Cell::new(title)).collect()));
        for r in &self.rows {
            table.add_row(row![r.date, r.start_time, r.end_time, r.duration, r.delay, r.extra, r.badge.label]);
        }
        table
    }

    pub fn totals_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["TOTAL DURATION", "TOTAL DELAY", "TOTAL EXTRA"]);
        table.add_row(row![self.totals.duration, self.totals.delay, self.totals.extra]);
        table
    }

    pub fn printstd(&self) {
        self.table().printstd();
        self.totals_table().printstd();
    }
}

impl RenderTarget for TerminalTable {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: &TableRow) {
        self.rows.push(row.clone());
    }

    fn set_totals(&mut self, totals: &TotalsView) {
        self.totals = totals.clone();
    }
}

/// Table body markup plus the three total displays.
#[derive(Debug, Clone)]
pub struct HtmlTable {
    body: Vec<String>,
    totals: TotalsView,
}

impl Default for HtmlTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlTable {
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            totals: TotalsView::zeroed(),
        }
    }

    /// The `<tr>` elements rendered so far.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<tbody id=\"report-body\">\n");
        for tr in &self.body {
            html.push_str(tr);
            html.push('\n');
        }
        html.push_str("</tbody>\n");
        for (id, value) in [
            ("total-duration", &self.totals.duration),
            ("total-delay", &self.totals.delay),
            ("total-extra", &self.totals.extra),
        ] {
            html.push_str(&format!("<span id=\"{}\">{}</span>\n", id, escape_html(value)));
        }
        html
    }
}

fn badge_class(style: BadgeStyle) -> &'static str {
    match style {
        BadgeStyle::Warning => "bg-warning text-dark",
        BadgeStyle::Success => "bg-success",
    }
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl RenderTarget for HtmlTable {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn append_row(&mut self, row: &TableRow) {
        let cells = row
            .cells()
            .iter()
            .map(|cell| format!("<td>{}</td>", escape_html(cell)))
            .collect::<String>();
        self.body.push(format!(
            "<tr>{}<td><span class=\"badge {}\">{}</span></td></tr>",
            cells,
            badge_class(row.badge.style),
            row.badge.label
        ));
    }

    fn set_totals(&mut self, totals: &TotalsView) {
        self.totals = totals.clone();
    }
}

/// CSV output with one record per row and a final `TOTAL` record.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    inner: TerminalTable,
}

impl CsvTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(HEADER)?;
        for r in self.inner.rows() {
            let mut record = r.cells().to_vec();
            record.push(r.badge.label);
            wtr.write_record(&record)?;
        }
        let totals = self.inner.totals();
        wtr.write_record(["TOTAL", "", "", totals.duration.as_str(), totals.delay.as_str(), totals.extra.as_str(), ""])?;
        wtr.flush()?;
        Ok(())
    }
}

impl RenderTarget for CsvTable {
    fn clear(&mut self) {
        self.inner.clear();
    }

    fn append_row(&mut self, row: &TableRow) {
        self.inner.append_row(row);
    }

    fn set_totals(&mut self, totals: &TotalsView) {
        self.inner.set_totals(totals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::report::Badge;

    fn sample_row(adjusted: bool) -> TableRow {
        TableRow {
            date: "2024-01-02".to_string(),
            start_time: "08:00".to_string(),
            end_time: "-".to_string(),
            duration: "09:00".to_string(),
            delay: "00:00".to_string(),
            extra: "01:00".to_string(),
            badge: Badge::for_adjusted(adjusted),
        }
    }

    #[test]
    fn test_html_badge_classes() {
        let mut html = HtmlTable::new();
        html.append_row(&sample_row(true));
        html.append_row(&sample_row(false));
        assert!(html.body()[0].contains("<span class=\"badge bg-warning text-dark\">Ajustado</span>"));
        assert!(html.body()[1].contains("<span class=\"badge bg-success\">OK</span>"));
    }

    #[test]
    fn test_html_escapes_cells() {
        let mut row = sample_row(false);
        row.date = "<b>2024</b>".to_string();
        let mut html = HtmlTable::new();
        html.append_row(&row);
        assert!(html.body()[0].starts_with("<tr><td>&lt;b&gt;2024&lt;/b&gt;</td>"));
    }

    #[test]
    fn test_csv_ends_with_totals() {
        let mut table = CsvTable::new();
        table.append_row(&sample_row(false));
        table.set_totals(&TotalsView {
            duration: "09:00".to_string(),
            delay: "00:00".to_string(),
            extra: "01:00".to_string(),
        });
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "DATE,START,END,DURATION,DELAY,EXTRA,STATUS");
        assert_eq!(lines[1], "2024-01-02,08:00,-,09:00,00:00,01:00,OK");
        assert_eq!(lines[2], "TOTAL,,,09:00,00:00,01:00,");
    }
}
