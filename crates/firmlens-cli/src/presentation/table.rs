use firmlens_runtime::reports::ReportTable;

use super::format::{format_value, heading};

/// Plain-text rendering of an aggregate table: left-aligned, two-space
/// column gutters, a dashed rule under the header.
pub fn render_table(table: &ReportTable) -> String {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.len()).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            row.key
                .iter()
                .chain(row.values.iter())
                .map(format_value)
                .collect()
        })
        .collect();

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    out.push_str(&heading(&table.title));
    out.push('\n');

    for (i, column) in table.columns.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{:<width$}", column, width = widths[i]));
    }
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
    out.push('\n');

    if rows.is_empty() {
        out.push_str("(no rows)\n");
        return out;
    }

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            let width = widths.get(i).copied().unwrap_or(cell.len());
            out.push_str(&format!("{:<width$}", cell, width = width));
        }
        out.push('\n');
    }

    out
}
