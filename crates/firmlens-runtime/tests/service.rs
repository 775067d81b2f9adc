//! ReportService integration: config → cache → filter → reports.

use std::collections::BTreeSet;
use std::path::PathBuf;

use firmlens_runtime::{Config, ReportService};
use firmlens_types::{AttorneyLevel, FilterSelection, TimeFilter};

const CSV: &str = "\
Activity date,\"User full name (first, last)\",Practice area,Company name,Matter number,Billed hours,Billed hours value,Utilization rate
03/10/2023,Jane Doe,IP,Acme,M-100,5.0,2000,70
01/15/2024,Jane Doe,IP,Acme,M-101,7.5,3000,80
02/20/2024,John Roe,Litigation,Globex,M-200,4.0,1600,60
";

fn service(dir: &tempfile::TempDir) -> ReportService {
    let dataset = dir.path().join("data.csv");
    std::fs::write(&dataset, CSV).unwrap();

    let config = Config {
        dataset: Some(dataset),
        levels: [
            ("Jane Doe".to_string(), AttorneyLevel::SeniorCounsel),
            ("John Roe".to_string(), AttorneyLevel::Paralegal),
        ]
        .into_iter()
        .collect(),
    };
    ReportService::from_config(&config).unwrap()
}

#[test]
fn overview_carries_kpis_and_prior_year_comparison() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(&dir);

    let selection = FilterSelection {
        time: Some(TimeFilter::Periods {
            years: [2024].into_iter().collect(),
            months: BTreeSet::new(),
            quarters: BTreeSet::new(),
        }),
        ..Default::default()
    };

    let (report, warnings) = service.overview(&selection).unwrap();
    assert!(warnings.is_clean());
    assert_eq!(report.kpis.billed_hours, 11.5);
    assert_eq!(report.kpis.billed_value, 4600.0);
    assert!(report.prior_period.is_some());
}

#[test]
fn attorney_levels_come_from_the_injected_table() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(&dir);

    let (report, _) = service.attorneys(&FilterSelection::default()).unwrap();
    let levels: Vec<_> = report
        .by_level
        .rows
        .iter()
        .filter_map(|r| r.key[0].as_str().map(str::to_string))
        .collect();
    assert!(levels.contains(&"Senior Counsel".to_string()));
    assert!(levels.contains(&"Paralegal".to_string()));
}

#[test]
fn invalid_selection_fails_before_touching_data() {
    let config = Config {
        dataset: Some(PathBuf::from("/nonexistent/data.csv")),
        levels: Default::default(),
    };
    let service = ReportService::from_config(&config).unwrap();

    let selection = FilterSelection {
        time: Some(TimeFilter::Periods {
            years: BTreeSet::new(),
            months: BTreeSet::new(),
            quarters: [5].into_iter().collect(),
        }),
        ..Default::default()
    };

    // Quarter 5 is rejected before the (missing) file would error.
    let err = service.overview(&selection).unwrap_err();
    assert!(err.to_string().contains("quarter"));
}

#[test]
fn missing_dataset_path_is_a_config_error() {
    let err = ReportService::from_config(&Config::default()).unwrap_err();
    assert!(err.to_string().contains("dataset"));
}

#[test]
fn export_writes_the_filtered_table() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(&dir);

    let selection = FilterSelection {
        clients: ["Globex".to_string()].into_iter().collect(),
        ..Default::default()
    };

    let mut buf = Vec::new();
    let (rows, _) = service.export(&selection, &mut buf).unwrap();
    assert_eq!(rows, 1);

    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("John Roe"));
    assert!(!text.contains("Jane Doe"));
    // The derived level column is present in the export.
    assert!(text.contains("Paralegal"));
}
