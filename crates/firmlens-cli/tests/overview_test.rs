//! Overview command: KPIs, prior-period comparison, output formats.

use anyhow::Result;
use firmlens_testing::TestWorld;

#[test]
fn overview_reports_firm_kpis() -> Result<()> {
    let world = TestWorld::with_sample_data();

    let result = world.run(&["overview", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assert_eq!(json["kpis"]["billed_hours"], 21.5);
    assert_eq!(json["kpis"]["billed_value"], 8300.0);
    // No single period pinned, so no prior-period comparison.
    assert!(json.get("prior_period").is_none());

    Ok(())
}

#[test]
fn overview_year_filter_narrows_kpis_and_adds_comparison() -> Result<()> {
    let world = TestWorld::with_sample_data();

    let result = world.run(&["overview", "--year", "2024", "--format", "json"])?;
    assert!(result.success());

    let json = result.json()?;
    assert_eq!(json["kpis"]["billed_hours"], 13.5);
    assert_eq!(json["prior_period"]["label"], "vs 2023");

    Ok(())
}

#[test]
fn overview_plain_output_formats_numbers() -> Result<()> {
    let world = TestWorld::with_sample_data();

    let result = world.run(&["overview"])?;
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("Key performance metrics"));
    assert!(stdout.contains("21.5"));
    assert!(stdout.contains("Hours distribution"));
    assert!(stdout.contains("Daily billed hours"));

    Ok(())
}

#[test]
fn overview_is_deterministic_across_runs() -> Result<()> {
    let world = TestWorld::with_sample_data();

    let first = world.run(&["overview", "--format", "json"])?;
    let second = world.run(&["overview", "--format", "json"])?;
    assert_eq!(first.stdout(), second.stdout());

    Ok(())
}
