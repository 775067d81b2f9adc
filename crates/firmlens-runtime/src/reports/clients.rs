//! Client relationship metrics.

use serde::Serialize;

use firmlens_engine::{Dimension, Field, Metric, aggregate, sort_by_metric_desc};
use firmlens_types::Record;

use super::ReportTable;

#[derive(Debug, Clone, Serialize)]
pub struct ClientsReport {
    /// All clients, sorted by revenue descending.
    pub metrics: ReportTable,
    /// The top slice of `metrics`, for the headline view.
    pub top_clients: ReportTable,
}

pub fn clients(records: &[Record], top: usize) -> ClientsReport {
    let mut rows = aggregate(
        records,
        &[Dimension::Client],
        &[
            Metric::Sum(Field::BilledHours),
            Metric::Sum(Field::BilledValue),
            Metric::CountDistinct(Field::MatterNumber),
        ],
    );

    // Revenue is the second metric column.
    sort_by_metric_desc(&mut rows, 1);

    let columns = ["Client", "Total hours", "Total revenue", "Number of matters"];
    let mut top_rows = rows.clone();
    top_rows.truncate(top);

    ClientsReport {
        metrics: ReportTable::new("Client metrics", &columns, rows),
        top_clients: ReportTable::new("Top clients by revenue", &columns, top_rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firmlens_engine::Value;

    fn record(client: &str, matter: &str, hours: f64, value: f64) -> Record {
        Record {
            company_name: Some(client.to_string()),
            matter_number: Some(matter.to_string()),
            billed_hours: Some(hours),
            billed_value: Some(value),
            ..Default::default()
        }
    }

    #[test]
    fn clients_sort_by_revenue_and_top_slice_truncates() {
        let records = vec![
            record("Acme", "M-1", 10.0, 1000.0),
            record("Globex", "M-2", 5.0, 5000.0),
            record("Initech", "M-3", 2.0, 300.0),
            record("Globex", "M-4", 1.0, 100.0),
        ];

        let report = clients(&records, 2);

        let names: Vec<_> = report
            .metrics
            .rows
            .iter()
            .filter_map(|r| r.key[0].as_str().map(str::to_string))
            .collect();
        assert_eq!(names, vec!["Globex", "Acme", "Initech"]);

        assert_eq!(report.top_clients.rows.len(), 2);
        // Globex has two distinct matters.
        assert_eq!(report.metrics.rows[0].values[2], Value::Number(2.0));
    }
}
