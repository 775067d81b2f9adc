//! Firm-wide key performance metrics.

use serde::Serialize;

use firmlens_engine::{Dimension, Field, Metric, aggregate, apply};
use firmlens_types::{FilterSelection, Record, TimeFilter};

use super::ReportTable;

#[derive(Debug, Clone, Serialize)]
pub struct Kpis {
    pub total_billable_hours: f64,
    pub billed_hours: f64,
    pub billed_value: f64,
    /// Mean of per-record utilization; null when no record carries one.
    pub avg_utilization: Option<f64>,
    /// sum(billed value) / sum(billed hours); null on a zero denominator.
    pub avg_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HoursDistribution {
    pub billed: f64,
    pub unbilled: f64,
    pub non_billable: f64,
}

/// Period-over-period comparison against the preceding period.
///
/// Only produced when the selection pins exactly one month, quarter,
/// or year, and the prior period has data.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodComparison {
    pub label: String,
    pub billable_hours_change_pct: Option<f64>,
    pub billed_hours_change_pct: Option<f64>,
    pub billed_value_change_pct: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport {
    pub kpis: Kpis,
    pub hours: HoursDistribution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_period: Option<PeriodComparison>,
    pub daily_billed_hours: ReportTable,
}

/// Build the overview from the full (unfiltered) dataset so the prior
/// period can be computed from real data.
pub fn overview(all_records: &[Record], selection: &FilterSelection) -> OverviewReport {
    let filtered = apply(all_records, selection);
    let kpis = compute_kpis(&filtered);
    let hours = hours_distribution(&filtered);

    let prior_period = prior_selection(selection).and_then(|(label, prior)| {
        let prior_rows = apply(all_records, &prior);
        if prior_rows.is_empty() {
            return None;
        }
        let prior_kpis = compute_kpis(&prior_rows);
        Some(PeriodComparison {
            label,
            billable_hours_change_pct: change_pct(
                kpis.total_billable_hours,
                prior_kpis.total_billable_hours,
            ),
            billed_hours_change_pct: change_pct(kpis.billed_hours, prior_kpis.billed_hours),
            billed_value_change_pct: change_pct(kpis.billed_value, prior_kpis.billed_value),
        })
    });

    let daily = aggregate(
        &filtered,
        &[Dimension::Date],
        &[Metric::Sum(Field::BilledHours)],
    );

    OverviewReport {
        kpis,
        hours,
        prior_period,
        daily_billed_hours: ReportTable::new(
            "Daily billed hours",
            &["Activity date", "Billed hours"],
            daily,
        ),
    }
}

fn compute_kpis(records: &[Record]) -> Kpis {
    let totals = aggregate(
        records,
        &[],
        &[
            Metric::Sum(Field::BilledAndUnbilledHours),
            Metric::Sum(Field::BilledHours),
            Metric::Sum(Field::BilledValue),
            Metric::Mean(Field::UtilizationRate),
            Metric::Ratio(Field::BilledValue, Field::BilledHours),
        ],
    );

    // An empty filtered set yields no group row at all.
    match totals.first() {
        Some(row) => Kpis {
            total_billable_hours: row.values[0].as_f64().unwrap_or(0.0),
            billed_hours: row.values[1].as_f64().unwrap_or(0.0),
            billed_value: row.values[2].as_f64().unwrap_or(0.0),
            avg_utilization: row.values[3].as_f64(),
            avg_rate: row.values[4].as_f64(),
        },
        None => Kpis {
            total_billable_hours: 0.0,
            billed_hours: 0.0,
            billed_value: 0.0,
            avg_utilization: None,
            avg_rate: None,
        },
    }
}

fn hours_distribution(records: &[Record]) -> HoursDistribution {
    let totals = aggregate(
        records,
        &[],
        &[
            Metric::Sum(Field::BilledHours),
            Metric::Sum(Field::UnbilledHours),
            Metric::Sum(Field::NonBillableHours),
        ],
    );

    match totals.first() {
        Some(row) => HoursDistribution {
            billed: row.values[0].as_f64().unwrap_or(0.0),
            unbilled: row.values[1].as_f64().unwrap_or(0.0),
            non_billable: row.values[2].as_f64().unwrap_or(0.0),
        },
        None => HoursDistribution {
            billed: 0.0,
            unbilled: 0.0,
            non_billable: 0.0,
        },
    }
}

/// Derive the preceding period when the selection pins exactly one:
/// a single month, a single quarter, or a single year.
fn prior_selection(selection: &FilterSelection) -> Option<(String, FilterSelection)> {
    let Some(TimeFilter::Periods {
        years,
        months,
        quarters,
    }) = &selection.time
    else {
        return None;
    };

    if years.len() != 1 {
        return None;
    }
    let year = *years.first()?;

    let (label, prior_years, prior_months, prior_quarters) =
        if months.len() == 1 && quarters.is_empty() {
            let month = *months.first()?;
            let (py, pm) = if month == 1 { (year - 1, 12) } else { (year, month - 1) };
            (format!("vs {}-{:02}", py, pm), vec![py], vec![pm], vec![])
        } else if quarters.len() == 1 && months.is_empty() {
            let quarter = *quarters.first()?;
            let (py, pq) = if quarter == 1 { (year - 1, 4) } else { (year, quarter - 1) };
            (format!("vs {} Q{}", py, pq), vec![py], vec![], vec![pq])
        } else if months.is_empty() && quarters.is_empty() {
            (format!("vs {}", year - 1), vec![year - 1], vec![], vec![])
        } else {
            return None;
        };

    let mut prior = selection.clone();
    prior.time = Some(TimeFilter::Periods {
        years: prior_years.into_iter().collect(),
        months: prior_months.into_iter().collect(),
        quarters: prior_quarters.into_iter().collect(),
    });

    Some((label, prior))
}

fn change_pct(current: f64, prior: f64) -> Option<f64> {
    if prior > 0.0 {
        Some((current - prior) / prior * 100.0)
    } else {
        None
    }
}
