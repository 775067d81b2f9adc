use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::AttorneyLevel;
use crate::error::{Error, Result};

/// Time restriction for a report request.
///
/// The two modes are mutually exclusive and chosen explicitly by the
/// caller; the engine never infers one from the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFilter {
    /// Explicit year/month/quarter enumeration. Empty sets restrict
    /// nothing, so `Periods` with all sets empty is an identity filter.
    Periods {
        #[serde(default)]
        years: BTreeSet<i32>,
        #[serde(default)]
        months: BTreeSet<u32>,
        #[serde(default)]
        quarters: BTreeSet<u32>,
    },
    /// Inclusive activity-date bound.
    Range { start: NaiveDate, end: NaiveDate },
}

/// A set of facet selections for one report request.
///
/// Constructed from user input, validated once via [`FilterSelection::validated`],
/// and threaded explicitly through filter/aggregate calls. An empty set
/// for a facet means "no restriction", never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeFilter>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub attorneys: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub attorney_levels: BTreeSet<AttorneyLevel>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub practice_areas: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub locations: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub statuses: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub billing_methods: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub clients: BTreeSet<String>,
}

impl FilterSelection {
    /// Validate facet domains and return the selection unchanged.
    ///
    /// Out-of-domain values (month 13, quarter 5, inverted date range)
    /// are rejected here, before any data is touched; a selection that
    /// passes validation can never make the filter engine fail.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        match &self.time {
            Some(TimeFilter::Periods {
                months, quarters, ..
            }) => {
                if let Some(month) = months.iter().find(|m| !(1..=12).contains(*m)) {
                    return Err(Error::InvalidFilter(format!(
                        "month must be between 1 and 12, got {}",
                        month
                    )));
                }
                if let Some(quarter) = quarters.iter().find(|q| !(1..=4).contains(*q)) {
                    return Err(Error::InvalidFilter(format!(
                        "quarter must be between 1 and 4, got {}",
                        quarter
                    )));
                }
            }
            Some(TimeFilter::Range { start, end }) => {
                if start > end {
                    return Err(Error::InvalidFilter(format!(
                        "date range start {} is after end {}",
                        start, end
                    )));
                }
            }
            None => {}
        }
        Ok(())
    }

    /// True when no facet restricts anything (the identity selection).
    pub fn is_empty(&self) -> bool {
        let time_empty = match &self.time {
            None => true,
            Some(TimeFilter::Periods {
                years,
                months,
                quarters,
            }) => years.is_empty() && months.is_empty() && quarters.is_empty(),
            Some(TimeFilter::Range { .. }) => false,
        };

        time_empty
            && self.attorneys.is_empty()
            && self.attorney_levels.is_empty()
            && self.practice_areas.is_empty()
            && self.locations.is_empty()
            && self.statuses.is_empty()
            && self.billing_methods.is_empty()
            && self.clients.is_empty()
    }
}
