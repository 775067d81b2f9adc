//! Practice-area performance.

use serde::Serialize;

use firmlens_engine::{Dimension, Field, Metric, aggregate};
use firmlens_types::Record;

use super::ReportTable;

#[derive(Debug, Clone, Serialize)]
pub struct PracticeAreasReport {
    pub performance: ReportTable,
}

pub fn practice_areas(records: &[Record]) -> PracticeAreasReport {
    let rows = aggregate(
        records,
        &[Dimension::PracticeArea],
        &[
            Metric::Sum(Field::BilledHours),
            Metric::Sum(Field::BilledValue),
            Metric::Ratio(Field::BilledValue, Field::BilledHours),
            Metric::CountDistinct(Field::MatterNumber),
            Metric::CountDistinct(Field::AttorneyName),
        ],
    );

    PracticeAreasReport {
        performance: ReportTable::new(
            "Practice area performance",
            &[
                "Practice area",
                "Billed hours",
                "Revenue",
                "Average rate",
                "Matters",
                "Attorneys",
            ],
            rows,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firmlens_engine::Value;

    #[test]
    fn practice_rows_carry_ratio_and_distinct_counts() {
        let records = vec![
            Record {
                practice_area: Some("IP".to_string()),
                attorney_name: Some("Jane Doe".to_string()),
                matter_number: Some("M-1".to_string()),
                billed_hours: Some(10.0),
                billed_value: Some(100.0),
                ..Default::default()
            },
            Record {
                practice_area: Some("IP".to_string()),
                attorney_name: Some("John Roe".to_string()),
                matter_number: Some("M-1".to_string()),
                billed_hours: Some(0.0),
                billed_value: Some(0.0),
                ..Default::default()
            },
        ];

        let report = practice_areas(&records);
        let row = &report.performance.rows[0];
        assert_eq!(row.values[0], Value::Number(10.0));
        assert_eq!(row.values[2], Value::Number(10.0));
        assert_eq!(row.values[3], Value::Number(1.0));
        assert_eq!(row.values[4], Value::Number(2.0));
    }
}
