//! Dataset loader: reads a timekeeping CSV export into `Record`s.
//!
//! Cell coercion is deliberately best-effort. A malformed numeric or
//! date cell becomes `None` and bumps a warning counter; it never aborts
//! the load. Only a missing/unreadable file, a header without any
//! date-derivable columns, or zero parseable rows is fatal.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use firmlens_types::{LevelTable, Record};
use serde::Serialize;

use crate::columns;
use crate::error::{Error, Result};

/// Date layouts accepted for "Activity date". The export nominally uses
/// MM/DD/YYYY; the rest show up in hand-edited files.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%m/%d/%y", "%Y/%m/%d"];

/// Non-fatal coercion failures observed during a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseWarnings {
    /// Cells in declared-numeric columns that were non-empty but not numeric.
    pub numeric_cells: usize,
    /// Non-empty activity-date cells that matched no known layout.
    pub date_cells: usize,
    /// Rows the CSV reader could not decode at all.
    pub skipped_rows: usize,
}

impl ParseWarnings {
    pub fn total(&self) -> usize {
        self.numeric_cells + self.date_cells + self.skipped_rows
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Result of one load: the full record set plus warning counters.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub records: Vec<Record>,
    pub warnings: ParseWarnings,
}

/// Load a timekeeping export from `path`, attaching attorney levels from
/// the injected `levels` table.
pub fn load_dataset(path: &Path, levels: &LevelTable) -> Result<LoadReport> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|err| Error::DataLoad(format!("cannot open {}: {}", path.display(), err)))?;

    let headers = reader
        .headers()
        .map_err(|err| Error::DataLoad(format!("cannot read header of {}: {}", path.display(), err)))?
        .clone();

    let index: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), i))
        .collect();

    // Year/month/quarter can come from their own columns or be derived
    // from the activity date; without either the time facets downstream
    // are meaningless, so fail here rather than mid-report.
    let has_date = index.contains_key(columns::ACTIVITY_DATE);
    let has_period_columns =
        index.contains_key(columns::ACTIVITY_YEAR) && index.contains_key(columns::ACTIVITY_MONTH);
    if !has_date && !has_period_columns {
        return Err(Error::DataLoad(format!(
            "{}: no '{}' column and no '{}'/'{}' columns to derive activity periods from",
            path.display(),
            columns::ACTIVITY_DATE,
            columns::ACTIVITY_YEAR,
            columns::ACTIVITY_MONTH
        )));
    }

    let mut warnings = ParseWarnings::default();
    let mut records = Vec::new();

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(_) => {
                warnings.skipped_rows += 1;
                continue;
            }
        };
        records.push(parse_row(&row, &index, levels, &mut warnings));
    }

    if records.is_empty() {
        return Err(Error::DataLoad(format!(
            "{}: no parseable data rows",
            path.display()
        )));
    }

    Ok(LoadReport { records, warnings })
}

fn parse_row(
    row: &StringRecord,
    index: &HashMap<String, usize>,
    levels: &LevelTable,
    warnings: &mut ParseWarnings,
) -> Record {
    let cell = |name: &str| -> Option<&str> {
        index.get(name).and_then(|&i| row.get(i)).filter(|s| !s.trim().is_empty())
    };

    let attorney_name = cell(columns::USER_FULL_NAME).map(|s| s.trim().to_string());
    let attorney_level = attorney_name.as_deref().and_then(|name| levels.lookup(name));

    let mut record = Record {
        activity_date: parse_date(cell(columns::ACTIVITY_DATE), warnings),
        activity_year: parse_number(cell(columns::ACTIVITY_YEAR), warnings).map(|v| v as i32),
        activity_month: parse_number(cell(columns::ACTIVITY_MONTH), warnings).map(|v| v as u32),
        activity_quarter: parse_number(cell(columns::ACTIVITY_QUARTER), warnings).map(|v| v as u32),
        attorney_name,
        attorney_level,
        practice_area: cell(columns::PRACTICE_AREA).map(str::to_string),
        matter_location: cell(columns::MATTER_LOCATION).map(str::to_string),
        matter_status: cell(columns::MATTER_STATUS).map(str::to_string),
        matter_billing_method: cell(columns::MATTER_BILLING_METHOD).map(str::to_string),
        company_name: cell(columns::COMPANY_NAME).map(str::to_string),
        matter_number: cell(columns::MATTER_NUMBER).map(str::to_string),
        billed_hours: parse_number(cell(columns::BILLED_HOURS), warnings),
        unbilled_hours: parse_number(cell(columns::UNBILLED_HOURS), warnings),
        non_billable_hours: parse_number(cell(columns::NON_BILLABLE_HOURS), warnings),
        billed_and_unbilled_hours: parse_number(
            cell(columns::BILLED_AND_UNBILLED_HOURS),
            warnings,
        ),
        billed_value: parse_number(cell(columns::BILLED_HOURS_VALUE), warnings),
        unbilled_value: parse_number(cell(columns::UNBILLED_HOURS_VALUE), warnings),
        non_billable_value: parse_number(cell(columns::NON_BILLABLE_HOURS_VALUE), warnings),
        billed_and_unbilled_value: parse_number(
            cell(columns::BILLED_AND_UNBILLED_HOURS_VALUE),
            warnings,
        ),
        tracked_hours: parse_number(cell(columns::TRACKED_HOURS), warnings),
        utilization_rate: parse_number(cell(columns::UTILIZATION_RATE), warnings),
        user_rate: parse_number(cell(columns::USER_RATE), warnings),
    };

    record.derive_calendar_fields();
    record
}

/// Permissive numeric coercion: empty → None (not a warning), junk →
/// None plus a warning. Tolerates thousands separators, a leading `$`,
/// and a trailing `%`.
fn parse_number(cell: Option<&str>, warnings: &mut ParseWarnings) -> Option<f64> {
    let raw = cell?.trim();
    if raw.is_empty() {
        return None;
    }

    let cleaned = raw
        .trim_start_matches('$')
        .trim_end_matches('%')
        .replace(',', "");

    match cleaned.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.numeric_cells += 1;
            None
        }
    }
}

/// Tolerant date coercion: tries each known layout in order.
fn parse_date(cell: Option<&str>, warnings: &mut ParseWarnings) -> Option<NaiveDate> {
    let raw = cell?.trim();
    if raw.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }

    warnings.date_cells += 1;
    None
}
