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
    let (report, warnings) = service.practice_areas(selection)?;
    warn_parse_failures(format, &warnings);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_table(&report.performance));
    Ok(())
}
