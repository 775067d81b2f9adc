//! Aggregation layer: group-by over filtered records plus a small metric
//! vocabulary (sum, mean, count, count-distinct, first, ratio-of-sums).
//!
//! Groups are keyed by first-encounter order in the input, never by hash
//! iteration order, so output is deterministic for a given input. Null
//! group-key components form their own group rather than being dropped.

use std::collections::{BTreeSet, HashMap};

use firmlens_types::Record;
use serde::Serialize;

/// A grouping dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    PracticeArea,
    Attorney,
    AttorneyLevel,
    Client,
    Location,
    Status,
    BillingMethod,
    Year,
    Month,
    Quarter,
    Date,
}

/// A record field that metrics can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    BilledHours,
    UnbilledHours,
    NonBillableHours,
    BilledAndUnbilledHours,
    BilledValue,
    UnbilledValue,
    NonBillableValue,
    BilledAndUnbilledValue,
    TrackedHours,
    UtilizationRate,
    UserRate,
    MatterNumber,
    AttorneyName,
}

/// One requested aggregate.
///
/// `Ratio(n, d)` is sum(n) / sum(d) with a null result on a zero or
/// null denominator; it is how average rates are computed (sum of value
/// over sum of hours, not a mean of per-row rates).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Sum(Field),
    Mean(Field),
    Count,
    CountDistinct(Field),
    First(Field),
    Ratio(Field, Field),
}

/// An output cell. `Null` is the undefined-result marker (mean of
/// nothing, ratio with an empty denominator, missing group key).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// One output row: the group key components followed by metric values,
/// in the order the caller requested them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRow {
    pub key: Vec<Value>,
    pub values: Vec<Value>,
}

fn numeric_field(record: &Record, field: Field) -> Option<f64> {
    match field {
        Field::BilledHours => record.billed_hours,
        Field::UnbilledHours => record.unbilled_hours,
        Field::NonBillableHours => record.non_billable_hours,
        Field::BilledAndUnbilledHours => record.billed_and_unbilled_hours,
        Field::BilledValue => record.billed_value,
        Field::UnbilledValue => record.unbilled_value,
        Field::NonBillableValue => record.non_billable_value,
        Field::BilledAndUnbilledValue => record.billed_and_unbilled_value,
        Field::TrackedHours => record.tracked_hours,
        Field::UtilizationRate => record.utilization_rate,
        Field::UserRate => record.user_rate,
        Field::MatterNumber | Field::AttorneyName => None,
    }
}

fn field_value(record: &Record, field: Field) -> Value {
    match field {
        Field::MatterNumber => record
            .matter_number
            .clone()
            .map_or(Value::Null, Value::Text),
        Field::AttorneyName => record
            .attorney_name
            .clone()
            .map_or(Value::Null, Value::Text),
        _ => numeric_field(record, field).map_or(Value::Null, Value::Number),
    }
}

/// Distinct-count identity of a field value, None when null.
fn distinct_key(record: &Record, field: Field) -> Option<String> {
    match field_value(record, field) {
        Value::Null => None,
        Value::Text(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
    }
}

fn key_component(record: &Record, dim: Dimension) -> Value {
    match dim {
        Dimension::PracticeArea => record
            .practice_area
            .clone()
            .map_or(Value::Null, Value::Text),
        Dimension::Attorney => record
            .attorney_name
            .clone()
            .map_or(Value::Null, Value::Text),
        Dimension::AttorneyLevel => record
            .attorney_level
            .map_or(Value::Null, |l| Value::Text(l.to_string())),
        Dimension::Client => record
            .company_name
            .clone()
            .map_or(Value::Null, Value::Text),
        Dimension::Location => record
            .matter_location
            .clone()
            .map_or(Value::Null, Value::Text),
        Dimension::Status => record
            .matter_status
            .clone()
            .map_or(Value::Null, Value::Text),
        Dimension::BillingMethod => record
            .matter_billing_method
            .clone()
            .map_or(Value::Null, Value::Text),
        Dimension::Year => record
            .activity_year
            .map_or(Value::Null, |y| Value::Number(y as f64)),
        Dimension::Month => record
            .activity_month
            .map_or(Value::Null, |m| Value::Number(m as f64)),
        Dimension::Quarter => record
            .activity_quarter
            .map_or(Value::Null, |q| Value::Number(q as f64)),
        Dimension::Date => record
            .activity_date
            .map_or(Value::Null, |d| Value::Text(d.to_string())),
    }
}

/// Hashable rendering of a key component. Distinct from the output
/// `Value` only because f64 is not `Hash`.
fn key_identity(component: &Value) -> Option<String> {
    match component {
        Value::Null => None,
        Value::Text(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
    }
}

enum Acc {
    Sum { total: f64 },
    Mean { total: f64, count: usize },
    Count { rows: usize },
    Distinct { seen: BTreeSet<String> },
    First { value: Option<Value> },
    Ratio { numerator: f64, denominator: f64 },
}

impl Acc {
    fn new(metric: Metric) -> Self {
        match metric {
            Metric::Sum(_) => Acc::Sum { total: 0.0 },
            Metric::Mean(_) => Acc::Mean {
                total: 0.0,
                count: 0,
            },
            Metric::Count => Acc::Count { rows: 0 },
            Metric::CountDistinct(_) => Acc::Distinct {
                seen: BTreeSet::new(),
            },
            Metric::First(_) => Acc::First { value: None },
            Metric::Ratio(_, _) => Acc::Ratio {
                numerator: 0.0,
                denominator: 0.0,
            },
        }
    }

    fn add(&mut self, record: &Record, metric: Metric) {
        match (self, metric) {
            (Acc::Sum { total }, Metric::Sum(field)) => {
                if let Some(v) = numeric_field(record, field) {
                    *total += v;
                }
            }
            (Acc::Mean { total, count }, Metric::Mean(field)) => {
                if let Some(v) = numeric_field(record, field) {
                    *total += v;
                    *count += 1;
                }
            }
            (Acc::Count { rows }, Metric::Count) => {
                *rows += 1;
            }
            (Acc::Distinct { seen }, Metric::CountDistinct(field)) => {
                if let Some(key) = distinct_key(record, field) {
                    seen.insert(key);
                }
            }
            (Acc::First { value }, Metric::First(field)) => {
                if value.is_none() {
                    let v = field_value(record, field);
                    if !v.is_null() {
                        *value = Some(v);
                    }
                }
            }
            (Acc::Ratio { numerator, denominator }, Metric::Ratio(num, den)) => {
                if let Some(v) = numeric_field(record, num) {
                    *numerator += v;
                }
                if let Some(v) = numeric_field(record, den) {
                    *denominator += v;
                }
            }
            _ => unreachable!("accumulator/metric mismatch"),
        }
    }

    fn finish(self) -> Value {
        match self {
            Acc::Sum { total } => Value::Number(total),
            Acc::Mean { total, count } => {
                if count == 0 {
                    Value::Null
                } else {
                    Value::Number(total / count as f64)
                }
            }
            Acc::Count { rows } => Value::Number(rows as f64),
            Acc::Distinct { seen } => Value::Number(seen.len() as f64),
            Acc::First { value } => value.unwrap_or(Value::Null),
            Acc::Ratio {
                numerator,
                denominator,
            } => {
                if denominator == 0.0 {
                    Value::Null
                } else {
                    Value::Number(numerator / denominator)
                }
            }
        }
    }
}

/// Group `records` by `dims` and compute `metrics` per group.
///
/// Pure function; row order follows first encounter of each group key.
pub fn aggregate(records: &[Record], dims: &[Dimension], metrics: &[Metric]) -> Vec<GroupRow> {
    struct Group {
        key: Vec<Value>,
        accs: Vec<Acc>,
    }

    let mut order: Vec<Group> = Vec::new();
    let mut index: HashMap<Vec<Option<String>>, usize> = HashMap::new();

    for record in records {
        let key: Vec<Value> = dims.iter().map(|&d| key_component(record, d)).collect();
        let identity: Vec<Option<String>> = key.iter().map(key_identity).collect();

        let slot = *index.entry(identity).or_insert_with(|| {
            order.push(Group {
                key,
                accs: metrics.iter().map(|&m| Acc::new(m)).collect(),
            });
            order.len() - 1
        });

        let group = &mut order[slot];
        for (acc, &metric) in group.accs.iter_mut().zip(metrics.iter()) {
            acc.add(record, metric);
        }
    }

    order
        .into_iter()
        .map(|group| GroupRow {
            key: group.key,
            values: group.accs.into_iter().map(Acc::finish).collect(),
        })
        .collect()
}

/// Stable descending sort by the metric at `metric_index`; null values
/// sort last. Used for "top N" views.
pub fn sort_by_metric_desc(rows: &mut [GroupRow], metric_index: usize) {
    rows.sort_by(|a, b| {
        let a = a.values.get(metric_index).and_then(Value::as_f64);
        let b = b.values.get(metric_index).and_then(Value::as_f64);
        match (a, b) {
            (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(practice: Option<&str>, hours: Option<f64>, value: Option<f64>) -> Record {
        Record {
            practice_area: practice.map(str::to_string),
            billed_hours: hours,
            billed_value: value,
            ..Default::default()
        }
    }

    #[test]
    fn ratio_of_sums_per_practice_area() {
        // The canonical scenario: B's average rate is 50, A's is 10, and
        // A's zero-hour row contributes nothing to either sum.
        let records = vec![
            record(Some("A"), Some(10.0), Some(100.0)),
            record(Some("A"), Some(0.0), Some(0.0)),
            record(Some("B"), Some(5.0), Some(250.0)),
        ];

        let rows = aggregate(
            &records,
            &[Dimension::PracticeArea],
            &[
                Metric::Sum(Field::BilledHours),
                Metric::Sum(Field::BilledValue),
                Metric::Ratio(Field::BilledValue, Field::BilledHours),
            ],
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, vec![Value::Text("A".to_string())]);
        assert_eq!(rows[0].values[0], Value::Number(10.0));
        assert_eq!(rows[0].values[1], Value::Number(100.0));
        assert_eq!(rows[0].values[2], Value::Number(10.0));
        assert_eq!(rows[1].key, vec![Value::Text("B".to_string())]);
        assert_eq!(rows[1].values[2], Value::Number(50.0));
    }

    #[test]
    fn zero_denominator_yields_null_not_infinity() {
        let records = vec![record(Some("A"), Some(0.0), Some(100.0))];
        let rows = aggregate(
            &records,
            &[Dimension::PracticeArea],
            &[Metric::Ratio(Field::BilledValue, Field::BilledHours)],
        );
        assert_eq!(rows[0].values[0], Value::Null);
    }

    #[test]
    fn mean_over_all_null_cells_is_null_not_zero() {
        let records = vec![
            record(Some("A"), None, None),
            record(Some("A"), None, None),
        ];
        let rows = aggregate(
            &records,
            &[Dimension::PracticeArea],
            &[Metric::Mean(Field::BilledHours), Metric::Sum(Field::BilledHours)],
        );
        assert_eq!(rows[0].values[0], Value::Null);
        // Sum of no contributions is zero; mean of nothing is not.
        assert_eq!(rows[0].values[1], Value::Number(0.0));
    }

    #[test]
    fn null_key_components_form_their_own_group() {
        let records = vec![
            record(Some("A"), Some(1.0), None),
            record(None, Some(2.0), None),
            record(None, Some(3.0), None),
        ];
        let rows = aggregate(
            &records,
            &[Dimension::PracticeArea],
            &[Metric::Sum(Field::BilledHours)],
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].key, vec![Value::Null]);
        assert_eq!(rows[1].values[0], Value::Number(5.0));
    }

    #[test]
    fn count_totals_match_input_length() {
        let records = vec![
            record(Some("A"), None, None),
            record(Some("B"), None, None),
            record(None, None, None),
            record(Some("A"), None, None),
        ];
        let rows = aggregate(&records, &[Dimension::PracticeArea], &[Metric::Count]);
        let total: f64 = rows
            .iter()
            .map(|r| r.values[0].as_f64().unwrap())
            .sum();
        assert_eq!(total, records.len() as f64);
    }

    #[test]
    fn rows_with_empty_cells_count_but_do_not_contribute_to_sums() {
        let records = vec![
            record(Some("A"), Some(4.0), None),
            record(Some("A"), None, None),
        ];
        let rows = aggregate(
            &records,
            &[Dimension::PracticeArea],
            &[Metric::Count, Metric::Sum(Field::BilledHours), Metric::Mean(Field::BilledHours)],
        );
        assert_eq!(rows[0].values[0], Value::Number(2.0));
        assert_eq!(rows[0].values[1], Value::Number(4.0));
        // Null cell is excluded from the mean denominator.
        assert_eq!(rows[0].values[2], Value::Number(4.0));
    }

    #[test]
    fn group_order_is_first_encounter_order() {
        let records = vec![
            record(Some("Z"), Some(1.0), None),
            record(Some("A"), Some(1.0), None),
            record(Some("Z"), Some(1.0), None),
            record(Some("M"), Some(1.0), None),
        ];
        let rows = aggregate(&records, &[Dimension::PracticeArea], &[Metric::Count]);
        let keys: Vec<_> = rows.iter().filter_map(|r| r.key[0].as_str()).collect();
        assert_eq!(keys, vec!["Z", "A", "M"]);
    }

    #[test]
    fn count_distinct_ignores_nulls() {
        let mut a = record(Some("A"), None, None);
        a.matter_number = Some("M-1".to_string());
        let mut b = record(Some("A"), None, None);
        b.matter_number = Some("M-1".to_string());
        let mut c = record(Some("A"), None, None);
        c.matter_number = Some("M-2".to_string());
        let d = record(Some("A"), None, None);

        let rows = aggregate(
            &[a, b, c, d],
            &[Dimension::PracticeArea],
            &[Metric::CountDistinct(Field::MatterNumber)],
        );
        assert_eq!(rows[0].values[0], Value::Number(2.0));
    }

    #[test]
    fn first_skips_null_cells() {
        let records = vec![
            record(Some("A"), None, None),
            Record {
                practice_area: Some("A".to_string()),
                user_rate: Some(425.0),
                ..Default::default()
            },
        ];
        let rows = aggregate(
            &records,
            &[Dimension::PracticeArea],
            &[Metric::First(Field::UserRate)],
        );
        assert_eq!(rows[0].values[0], Value::Number(425.0));
    }

    #[test]
    fn sort_by_metric_desc_puts_nulls_last() {
        let records = vec![
            record(Some("A"), Some(0.0), Some(10.0)),
            record(Some("B"), Some(2.0), Some(10.0)),
            record(Some("C"), Some(1.0), Some(50.0)),
        ];
        let mut rows = aggregate(
            &records,
            &[Dimension::PracticeArea],
            &[Metric::Ratio(Field::BilledValue, Field::BilledHours)],
        );
        sort_by_metric_desc(&mut rows, 0);
        let keys: Vec<_> = rows.iter().filter_map(|r| r.key[0].as_str()).collect();
        assert_eq!(keys, vec!["C", "B", "A"]);
    }
}
