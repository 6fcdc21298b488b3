use tabled::builder::Builder;
use tabled::settings::{object::Columns, Alignment, Style};

use super::ExportTable;

/// Render a table for the terminal, numeric columns right-aligned.
pub fn render_text(table: &ExportTable) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.headers.iter().map(|h| h.to_uppercase()));
    for row in &table.rows {
        builder.push_record(row.iter().map(|cell| cell.to_string()));
    }
    if let Some(footer) = &table.footer {
        builder.push_record(footer.iter().map(|cell| cell.to_string()));
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    for (idx, numeric) in table.numeric_columns().into_iter().enumerate() {
        if numeric {
            rendered.modify(Columns::single(idx), Alignment::right());
        }
    }
    rendered.to_string()
}

pub fn format_grouped_int(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Two decimal places with thousands separators.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let digits = whole.trim_start_matches('-');
    let is_zero = digits.chars().chain(frac.chars()).all(|c| c == '0');
    let negative = whole.starts_with('-') && !is_zero;
    let grouped = group_digits(digits);

    if negative {
        format!("-{}.{}", grouped, frac)
    } else {
        format!("{}.{}", grouped, frac)
    }
}
