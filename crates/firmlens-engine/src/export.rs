//! Delimited export of filtered tables and aggregate results.

use std::io;

use firmlens_types::Record;

use crate::aggregate::{GroupRow, Value};
use crate::columns;
use crate::error::Result;

fn number_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn text_cell(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Write the raw filtered table as CSV, using the export's own header
/// naming scheme plus the derived "Attorney level" column. Null cells
/// are written as empty strings.
pub fn write_records<W: io::Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(columns::EXPORT_ORDER)?;

    for r in records {
        out.write_record(&[
            r.activity_date.map(|d| d.format("%m/%d/%Y").to_string()).unwrap_or_default(),
            r.activity_year.map(|v| v.to_string()).unwrap_or_default(),
            r.activity_month.map(|v| v.to_string()).unwrap_or_default(),
            r.activity_quarter.map(|v| v.to_string()).unwrap_or_default(),
            text_cell(r.attorney_name.as_deref()),
            r.attorney_level.map(|l| l.to_string()).unwrap_or_default(),
            text_cell(r.practice_area.as_deref()),
            text_cell(r.matter_location.as_deref()),
            text_cell(r.matter_status.as_deref()),
            text_cell(r.matter_billing_method.as_deref()),
            text_cell(r.company_name.as_deref()),
            text_cell(r.matter_number.as_deref()),
            number_cell(r.billed_hours),
            number_cell(r.unbilled_hours),
            number_cell(r.non_billable_hours),
            number_cell(r.billed_and_unbilled_hours),
            number_cell(r.billed_value),
            number_cell(r.unbilled_value),
            number_cell(r.non_billable_value),
            number_cell(r.billed_and_unbilled_value),
            number_cell(r.tracked_hours),
            number_cell(r.utilization_rate),
            number_cell(r.user_rate),
        ])?;
    }

    out.flush()?;
    Ok(())
}

/// Write aggregate rows as CSV with caller-supplied column headers
/// (key columns first, then metric columns).
pub fn write_group_rows<W: io::Write>(
    writer: W,
    headers: &[&str],
    rows: &[GroupRow],
) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(headers)?;

    for row in rows {
        let cells: Vec<String> = row
            .key
            .iter()
            .chain(row.values.iter())
            .map(|value| match value {
                Value::Null => String::new(),
                Value::Number(n) => n.to_string(),
                Value::Text(s) => s.clone(),
            })
            .collect();
        out.write_record(&cells)?;
    }

    out.flush()?;
    Ok(())
}
