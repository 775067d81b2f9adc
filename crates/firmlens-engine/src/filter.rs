//! Filter engine: applies a validated `FilterSelection` to a record set.
//!
//! Facets AND-compose; an empty facet excludes nothing. Matching is
//! exact and case-sensitive, and a null field never matches a non-empty
//! facet. Output preserves input order and never mutates records.

use std::collections::BTreeSet;

use firmlens_types::{FilterSelection, Record, TimeFilter};

/// Apply `selection` to `records`, returning the surviving rows in
/// their original relative order.
///
/// The selection is assumed validated (see `FilterSelection::validated`);
/// application itself cannot fail, it can only produce an empty result.
pub fn apply(records: &[Record], selection: &FilterSelection) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches(record, selection))
        .cloned()
        .collect()
}

fn matches(record: &Record, selection: &FilterSelection) -> bool {
    if !time_matches(record, selection.time.as_ref()) {
        return false;
    }

    facet_matches(record.attorney_name.as_deref(), &selection.attorneys)
        && level_matches(record, &selection.attorney_levels)
        && facet_matches(record.practice_area.as_deref(), &selection.practice_areas)
        && facet_matches(record.matter_location.as_deref(), &selection.locations)
        && facet_matches(record.matter_status.as_deref(), &selection.statuses)
        && facet_matches(
            record.matter_billing_method.as_deref(),
            &selection.billing_methods,
        )
        && facet_matches(record.company_name.as_deref(), &selection.clients)
}

/// Empty set = no restriction. A null field value is excluded by any
/// non-empty set, explicitly.
fn facet_matches(value: Option<&str>, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    match value {
        Some(value) => selected.contains(value),
        None => false,
    }
}

fn level_matches(
    record: &Record,
    selected: &BTreeSet<firmlens_types::AttorneyLevel>,
) -> bool {
    if selected.is_empty() {
        return true;
    }
    match record.attorney_level {
        Some(level) => selected.contains(&level),
        None => false,
    }
}

fn time_matches(record: &Record, time: Option<&TimeFilter>) -> bool {
    match time {
        None => true,
        Some(TimeFilter::Periods {
            years,
            months,
            quarters,
        }) => {
            period_matches(record.activity_year, years)
                && period_matches(record.activity_month, months)
                && period_matches(record.activity_quarter, quarters)
        }
        Some(TimeFilter::Range { start, end }) => match record.activity_date {
            Some(date) => date >= *start && date <= *end,
            None => false,
        },
    }
}

fn period_matches<T: Ord>(value: Option<T>, selected: &BTreeSet<T>) -> bool {
    if selected.is_empty() {
        return true;
    }
    match value {
        Some(value) => selected.contains(&value),
        None => false,
    }
}
