use anyhow::Result;

use firmlens_runtime::ReportService;
use firmlens_types::FilterSelection;

use crate::args::OutputFormat;
use crate::presentation::{
    format_hours, format_money, format_pct, format_rate, heading, render_table,
    warn_parse_failures,
};

pub fn handle(
    service: &ReportService,
    selection: &FilterSelection,
    format: OutputFormat,
) -> Result<()> {
    let (report, warnings) = service.overview(selection)?;
    warn_parse_failures(format, &warnings);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", heading("Key performance metrics"));
    println!(
        "  Total billable hours  {}",
        format_hours(report.kpis.total_billable_hours)
    );
    println!("  Billed hours          {}", format_hours(report.kpis.billed_hours));
    println!("  Billed value          {}", format_money(report.kpis.billed_value));
    println!(
        "  Utilization rate      {}",
        report
            .kpis
            .avg_utilization
            .map(format_pct)
            .unwrap_or_else(|| "-".to_string())
    );
    println!(
        "  Average rate          {}",
        report
            .kpis
            .avg_rate
            .map(format_rate)
            .unwrap_or_else(|| "-".to_string())
    );

    if let Some(prior) = &report.prior_period {
        println!();
        println!("{} ({})", heading("Change vs prior period"), prior.label);
        for (name, delta) in [
            ("Billable hours", prior.billable_hours_change_pct),
            ("Billed hours", prior.billed_hours_change_pct),
            ("Billed value", prior.billed_value_change_pct),
        ] {
            println!(
                "  {:<20}  {}",
                name,
                delta
                    .map(|d| format!("{:+.1}%", d))
                    .unwrap_or_else(|| "-".to_string())
            );
        }
    }

    println!();
    println!("{}", heading("Hours distribution"));
    println!("  Billed        {}", format_hours(report.hours.billed));
    println!("  Unbilled      {}", format_hours(report.hours.unbilled));
    println!("  Non-billable  {}", format_hours(report.hours.non_billable));

    println!();
    print!("{}", render_table(&report.daily_billed_hours));

    Ok(())
}
