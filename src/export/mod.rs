mod tables;
mod text;
mod typst;

pub use text::{format_amount, format_grouped_int, render_text};
pub use typst::TypstExporter;

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::view::{AggregateBucket, AggregateReport};

/// One scalar table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Amount(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Whole quantities print as integers, fractional ones as amounts.
    pub fn quantity(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            Cell::Integer(value as i64)
        } else {
            Cell::Amount(value)
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Cell::Text(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Integer(n) => f.write_str(&format_grouped_int(*n)),
            Cell::Amount(v) => f.write_str(&format_amount(*v)),
        }
    }
}

/// Row shape of a record type when shown as a table.
pub trait Tabular {
    fn headers() -> Vec<&'static str>;

    /// One cell per header, in header order.
    fn cells(&self) -> Vec<Cell>;
}

/// Header + rows handed to an export collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Vec<Cell>>,
}

impl ExportTable {
    /// Table of already-filtered records.
    pub fn from_records<R: Tabular>(title: impl Into<String>, records: &[&R]) -> Self {
        Self {
            title: title.into(),
            headers: R::headers().into_iter().map(String::from).collect(),
            rows: records.iter().map(|r| r.cells()).collect(),
            footer: None,
        }
    }

    /// Table of report buckets with a totals footer.
    ///
    /// `label` turns a group key into the text shown in the first column.
    pub fn from_report<F>(
        title: impl Into<String>,
        key_header: &str,
        report: &AggregateReport,
        buckets: &[&AggregateBucket],
        label: F,
    ) -> Self
    where
        F: Fn(&str) -> String,
    {
        let mut headers = vec![key_header.to_string()];
        headers.extend(report.columns.iter().map(|c| c.to_string()));
        if let Some(total) = report.total_column {
            headers.push(total.to_string());
        }

        let rows = buckets
            .iter()
            .map(|bucket| {
                let mut row = vec![Cell::Text(label(&bucket.key))];
                row.extend(bucket.sums.iter().map(|v| Cell::Amount(*v)));
                if let Some(total) = bucket.total {
                    row.push(Cell::Amount(total));
                }
                row
            })
            .collect();

        let mut footer = vec![Cell::text("TOTAL")];
        footer.extend(report.totals().into_iter().map(Cell::Amount));
        if let Some(total) = report.totals_row_total() {
            footer.push(Cell::Amount(total));
        }

        Self {
            title: title.into(),
            headers,
            rows,
            footer: Some(footer),
        }
    }

    /// e.g. `aging-report-2024-05-01.pdf`
    pub fn suggested_file_name(&self, date: NaiveDate, extension: &str) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for ch in self.title.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');
        let slug = if slug.is_empty() { "export" } else { slug };
        format!("{}-{}.{}", slug, date.format("%Y-%m-%d"), extension)
    }

    /// Column indexes holding numbers, judged from the first row.
    pub fn numeric_columns(&self) -> Vec<bool> {
        let first = self.rows.first().or(self.footer.as_ref());
        (0..self.headers.len())
            .map(|i| {
                first
                    .and_then(|row| row.get(i))
                    .is_some_and(Cell::is_numeric)
            })
            .collect()
    }
}

/// Turns a table into a file.
pub trait Exporter {
    fn extension(&self) -> &'static str;

    fn export(&self, table: &ExportTable, path: &Path) -> Result<()>;
}

/// Pretty-printed JSON of the table, cells kept as typed scalars.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn export(&self, table: &ExportTable, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(table)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), rows = table.rows.len(), "exported json");
        Ok(())
    }
}
