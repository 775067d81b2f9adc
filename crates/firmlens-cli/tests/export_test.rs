//! Export command: filtered CSV to file or stdout.

use anyhow::Result;
use firmlens_testing::TestWorld;

#[test]
fn export_writes_filtered_rows_to_a_file() -> Result<()> {
    let world = TestWorld::with_sample_data();
    let out_path = world.path().join("filtered.csv");
    let out = out_path.to_string_lossy().to_string();

    let result = world.run(&["export", "--year", "2024", "--output", &out])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Exported 3 rows"));

    let written = std::fs::read_to_string(&out_path)?;
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 4, "header plus three data rows");
    assert!(lines[0].contains("Activity date"));
    assert!(lines[0].contains("Attorney level"));
    assert!(!written.contains("03/10/2023"));

    Ok(())
}

#[test]
fn export_to_stdout_includes_derived_levels() -> Result<()> {
    let world = TestWorld::with_sample_data();

    let result = world.run(&["export", "--attorney", "Jane Doe"])?;
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("Attorney level"));
    assert!(stdout.contains("Senior Counsel"));
    assert!(!stdout.contains("John Roe"));

    Ok(())
}

#[test]
fn export_round_trips_through_the_loader() -> Result<()> {
    let world = TestWorld::with_sample_data();
    let out_path = world.path().join("reexport.csv");
    let out = out_path.to_string_lossy().to_string();

    let result = world.run(&["export", "--output", &out])?;
    assert!(result.success());

    // Point the dataset override at the exported file and re-report.
    let result = world.run(&[
        "--dataset",
        &out,
        "overview",
        "--format",
        "json",
    ])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.json()?["kpis"]["billed_hours"], 21.5);

    Ok(())
}
