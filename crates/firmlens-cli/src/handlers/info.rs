use anyhow::Result;

use firmlens_runtime::ReportService;

use crate::args::OutputFormat;
use crate::presentation::heading;

pub fn handle(service: &ReportService, format: OutputFormat) -> Result<()> {
    let summary = service.summary()?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", heading("Dataset"));
    println!("  Rows             {}", summary.rows);
    match (summary.first_activity_date, summary.last_activity_date) {
        (Some(first), Some(last)) => println!("  Activity dates   {} to {}", first, last),
        _ => println!("  Activity dates   -"),
    }
    if !summary.warnings.is_clean() {
        println!(
            "  Parse warnings   {} ({} numeric, {} date, {} rows skipped)",
            summary.warnings.total(),
            summary.warnings.numeric_cells,
            summary.warnings.date_cells,
            summary.warnings.skipped_rows
        );
    }

    println!();
    println!("{}", heading("Facets"));
    println!("  Attorneys        {}", summary.attorneys);
    println!("  Practice areas   {}", summary.practice_areas);
    println!("  Locations        {}", summary.locations);
    println!("  Statuses         {}", summary.statuses);
    println!("  Billing methods  {}", summary.billing_methods);
    println!("  Clients          {}", summary.clients);
    println!("  Matters          {}", summary.matters);

    Ok(())
}
