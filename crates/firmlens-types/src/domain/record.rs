use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::level::AttorneyLevel;

/// One timekeeping/billing entry from the firm's export.
///
/// A record is immutable once loaded. Cells that failed numeric or date
/// coercion are `None`; downstream aggregation decides whether a null
/// propagates as zero (sums) or as an undefined marker (means, ratios).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_quarter: Option<u32>,

    /// Trimmed "User full name (first, last)" cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attorney_name: Option<String>,
    /// Derived from `attorney_name` via the injected level table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attorney_level: Option<AttorneyLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matter_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matter_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matter_billing_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Not unique per record: one matter groups many entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matter_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unbilled_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_billable_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_and_unbilled_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unbilled_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_billable_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_and_unbilled_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_hours: Option<f64>,
    /// Percentage of tracked time that was billable, 0–100 nominal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rate: Option<f64>,
}

/// Calendar quarter for a 1-based month: quarter = ceil(month / 3).
pub fn quarter_of_month(month: u32) -> u32 {
    (month + 2) / 3
}

impl Record {
    /// Fill in year/month/quarter from `activity_date` where the export
    /// did not carry them as columns. Existing values win.
    pub fn derive_calendar_fields(&mut self) {
        if let Some(date) = self.activity_date {
            if self.activity_year.is_none() {
                self.activity_year = Some(date.year());
            }
            if self.activity_month.is_none() {
                self.activity_month = Some(date.month());
            }
        }
        if self.activity_quarter.is_none()
            && let Some(month) = self.activity_month
        {
            self.activity_quarter = Some(quarter_of_month(month));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_follows_month() {
        assert_eq!(quarter_of_month(1), 1);
        assert_eq!(quarter_of_month(3), 1);
        assert_eq!(quarter_of_month(4), 2);
        assert_eq!(quarter_of_month(6), 2);
        assert_eq!(quarter_of_month(7), 3);
        assert_eq!(quarter_of_month(12), 4);
    }

    #[test]
    fn calendar_fields_derive_from_date() {
        let mut record = Record {
            activity_date: NaiveDate::from_ymd_opt(2024, 8, 15),
            ..Default::default()
        };
        record.derive_calendar_fields();

        assert_eq!(record.activity_year, Some(2024));
        assert_eq!(record.activity_month, Some(8));
        assert_eq!(record.activity_quarter, Some(3));
    }

    #[test]
    fn explicit_columns_win_over_derivation() {
        let mut record = Record {
            activity_date: NaiveDate::from_ymd_opt(2024, 8, 15),
            activity_year: Some(2023),
            activity_month: Some(2),
            ..Default::default()
        };
        record.derive_calendar_fields();

        assert_eq!(record.activity_year, Some(2023));
        assert_eq!(record.activity_month, Some(2));
        // Quarter still derives from the month that is actually present.
        assert_eq!(record.activity_quarter, Some(1));
    }

    #[test]
    fn no_date_leaves_calendar_fields_unset() {
        let mut record = Record::default();
        record.derive_calendar_fields();

        assert_eq!(record.activity_year, None);
        assert_eq!(record.activity_month, None);
        assert_eq!(record.activity_quarter, None);
    }
}
