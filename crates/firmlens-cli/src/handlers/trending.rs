use anyhow::Result;

use firmlens_runtime::ReportService;
use firmlens_types::FilterSelection;

use crate::args::OutputFormat;
use crate::presentation::{render_table, warn_parse_failures};

pub fn handle(
    service: &ReportService,
    selection: &FilterSelection,
    format: OutputFormat,
) -> Result<()> {
    let (report, warnings) = service.trending(selection)?;
    warn_parse_failures(format, &warnings);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_table(&report.monthly));
    println!();
    print!("{}", render_table(&report.monthly_by_level));
    Ok(())
}
