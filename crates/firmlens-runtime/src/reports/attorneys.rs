//! Per-attorney and per-level performance.

use serde::Serialize;

use firmlens_engine::{Dimension, Field, Metric, aggregate};
use firmlens_types::Record;

use super::ReportTable;

#[derive(Debug, Clone, Serialize)]
pub struct AttorneysReport {
    pub performance: ReportTable,
    pub by_level: ReportTable,
}

pub fn attorneys(records: &[Record]) -> AttorneysReport {
    let performance = aggregate(
        records,
        &[Dimension::Attorney],
        &[
            Metric::Sum(Field::BilledHours),
            Metric::Sum(Field::BilledValue),
            Metric::Mean(Field::UtilizationRate),
            Metric::First(Field::UserRate),
        ],
    );

    let by_level = aggregate(
        records,
        &[Dimension::AttorneyLevel],
        &[
            Metric::Sum(Field::BilledHours),
            Metric::Sum(Field::BilledValue),
            Metric::Mean(Field::UtilizationRate),
        ],
    );

    AttorneysReport {
        performance: ReportTable::new(
            "Attorney performance",
            &[
                "Attorney",
                "Billed hours",
                "Revenue",
                "Utilization rate",
                "Hourly rate",
            ],
            performance,
        ),
        by_level: ReportTable::new(
            "Performance by attorney level",
            &[
                "Attorney level",
                "Billed hours",
                "Revenue",
                "Utilization rate",
            ],
            by_level,
        ),
    }
}
