//! Dataset summary for `data info`.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use firmlens_engine::ParseWarnings;
use serde::Serialize;

use crate::cache::Dataset;

#[derive(Debug, Clone, Serialize)]
pub struct DataSummary {
    pub rows: usize,
    pub warnings: ParseWarnings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_activity_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_date: Option<NaiveDate>,
    pub attorneys: usize,
    pub practice_areas: usize,
    pub locations: usize,
    pub statuses: usize,
    pub billing_methods: usize,
    pub clients: usize,
    pub matters: usize,
}

pub fn summarize(dataset: &Dataset) -> DataSummary {
    fn distinct<'a, I: Iterator<Item = Option<&'a str>>>(values: I) -> usize {
        values.flatten().collect::<BTreeSet<_>>().len()
    }

    let records = dataset.records.as_slice();
    let dates: Vec<NaiveDate> = records.iter().filter_map(|r| r.activity_date).collect();

    DataSummary {
        rows: records.len(),
        warnings: dataset.warnings,
        first_activity_date: dates.iter().min().copied(),
        last_activity_date: dates.iter().max().copied(),
        attorneys: distinct(records.iter().map(|r| r.attorney_name.as_deref())),
        practice_areas: distinct(records.iter().map(|r| r.practice_area.as_deref())),
        locations: distinct(records.iter().map(|r| r.matter_location.as_deref())),
        statuses: distinct(records.iter().map(|r| r.matter_status.as_deref())),
        billing_methods: distinct(records.iter().map(|r| r.matter_billing_method.as_deref())),
        clients: distinct(records.iter().map(|r| r.company_name.as_deref())),
        matters: distinct(records.iter().map(|r| r.matter_number.as_deref())),
    }
}
