use serde::Serialize;
use std::path::Path;
use std::process::Command;

use super::{ExportTable, Exporter};
use crate::error::{Result, ViewError};

/// Embedded Typst template for any header + rows table.
/// Uses a placeholder that gets replaced with the actual JSON file path
const TABLE_TEMPLATE: &str = r##"// Table export template
// Data is loaded from JSON file

#let data = json("DATA_JSON_PATH")

#set page(
  paper: "a4",
  flipped: data.headers.len() > 5,
  margin: (top: 0.8in, bottom: 0.8in, left: 0.7in, right: 0.7in),
)

#set text(font: "Helvetica", size: 9pt)

#grid(
  columns: (1fr, 1fr),
  align: (left, right),
  [
    #text(size: 16pt, weight: "bold")[#data.company]
    #v(0.3em)
    #text(size: 12pt)[#data.title]
  ],
  [
    #text(size: 9pt, fill: gray)[Generated #data.generated_date]
  ]
)

#v(0.8em)
#line(length: 100%, stroke: 0.5pt + gray)
#v(0.8em)

#table(
  columns: data.headers.len(),
  align: (x, y) => if data.numeric.at(x) { right } else { left },
  stroke: (x, y) => if y == 0 { (bottom: 1pt + black) } else if y > 0 { (bottom: 0.5pt + gray) },
  inset: 6pt,
  fill: (x, y) => if y == 0 { luma(240) } else { none },

  // Header
  ..data.headers.map(h => [*#upper(h)*]),

  // Rows
  ..data.rows.flatten(),

  // Totals
  ..if data.footer != none { data.footer.map(c => [*#c*]) } else { () },
)

#v(1em)
#text(size: 8pt, fill: gray)[#data.rows.len() row(s)]
"##;

/// What the template reads: cells already formatted for print.
#[derive(Debug, Serialize)]
struct PrintableTable<'a> {
    company: &'a str,
    title: &'a str,
    generated_date: String,
    headers: &'a [String],
    numeric: Vec<bool>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

/// PDF collaborator backed by the Typst CLI.
#[derive(Debug, Clone)]
pub struct TypstExporter {
    pub company: String,
}

impl TypstExporter {
    pub fn new(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
        }
    }
}

impl Exporter for TypstExporter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn export(&self, table: &ExportTable, output_path: &Path) -> Result<()> {
        // Check if typst is available
        if Command::new("typst").arg("--version").output().is_err() {
            return Err(ViewError::TypstNotFound);
        }

        let temp_dir = std::env::temp_dir().join("ledgerview-export");
        std::fs::create_dir_all(&temp_dir)?;

        let printable = PrintableTable {
            company: &self.company,
            title: &table.title,
            generated_date: chrono::Local::now().format("%B %d, %Y").to_string(),
            headers: &table.headers,
            numeric: table.numeric_columns(),
            rows: table
                .rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
            footer: table
                .footer
                .as_ref()
                .map(|row| row.iter().map(|c| c.to_string()).collect()),
        };

        let json_path = temp_dir.join("table.json");
        std::fs::write(&json_path, serde_json::to_string(&printable)?)?;

        // Template reads table.json relative to the --root directory
        let template_path = temp_dir.join("table.typ");
        std::fs::write(
            &template_path,
            TABLE_TEMPLATE.replace("DATA_JSON_PATH", "table.json"),
        )?;

        let output = Command::new("typst")
            .arg("compile")
            .arg("--root")
            .arg(&temp_dir)
            .arg(&template_path)
            .arg(output_path)
            .output()?;

        let _ = std::fs::remove_file(&template_path);
        let _ = std::fs::remove_file(&json_path);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ViewError::Export(stderr.to_string()));
        }

        tracing::info!(
            path = %output_path.display(),
            rows = table.rows.len(),
            "exported pdf"
        );
        Ok(())
    }
}
