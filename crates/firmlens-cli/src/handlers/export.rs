use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use firmlens_runtime::ReportService;
use firmlens_types::FilterSelection;

use crate::args::OutputFormat;
use crate::presentation::warn_parse_failures;

pub fn handle(
    service: &ReportService,
    selection: &FilterSelection,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let (rows, warnings) = service.export(selection, file)?;
            warn_parse_failures(format, &warnings);
            println!("Exported {} rows to {}", rows, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            let (_, warnings) = service.export(selection, &mut lock)?;
            lock.flush()?;
            warn_parse_failures(format, &warnings);
        }
    }

    Ok(())
}
