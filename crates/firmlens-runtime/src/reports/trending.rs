//! Historical monthly trends.

use serde::Serialize;

use firmlens_engine::{Dimension, Field, GroupRow, Metric, Value, aggregate};
use firmlens_types::Record;

use super::ReportTable;

#[derive(Debug, Clone, Serialize)]
pub struct TrendingReport {
    /// (year, month) × billed hours / revenue / mean utilization.
    pub monthly: ReportTable,
    /// (year, month, attorney level) × billed hours / mean utilization.
    pub monthly_by_level: ReportTable,
}

pub fn trending(records: &[Record]) -> TrendingReport {
    let mut monthly = aggregate(
        records,
        &[Dimension::Year, Dimension::Month],
        &[
            Metric::Sum(Field::BilledHours),
            Metric::Sum(Field::BilledValue),
            Metric::Mean(Field::UtilizationRate),
        ],
    );
    sort_chronologically(&mut monthly);

    let mut by_level = aggregate(
        records,
        &[Dimension::Year, Dimension::Month, Dimension::AttorneyLevel],
        &[
            Metric::Sum(Field::BilledHours),
            Metric::Mean(Field::UtilizationRate),
        ],
    );
    sort_chronologically(&mut by_level);

    TrendingReport {
        monthly: ReportTable::new(
            "Monthly trends",
            &[
                "Activity Year",
                "Activity month",
                "Billed hours",
                "Revenue",
                "Utilization rate",
            ],
            monthly,
        ),
        monthly_by_level: ReportTable::new(
            "Monthly trends by attorney level",
            &[
                "Activity Year",
                "Activity month",
                "Attorney level",
                "Billed hours",
                "Utilization rate",
            ],
            by_level,
        ),
    }
}

/// Stable ascending sort on the (year, month) key prefix; rows with a
/// null year or month sort last.
fn sort_chronologically(rows: &mut [GroupRow]) {
    fn period(row: &GroupRow) -> Option<(i64, i64)> {
        let year = row.key.first().and_then(Value::as_f64)? as i64;
        let month = row.key.get(1).and_then(Value::as_f64)? as i64;
        Some((year, month))
    }

    rows.sort_by(|a, b| match (period(a), period(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
