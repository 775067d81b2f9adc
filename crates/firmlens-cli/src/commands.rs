use anyhow::Result;

use firmlens_runtime::{Config, ReportService};

use super::args::{Cli, Commands, DataCommand};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load_from(&cli.config)?;
    if let Some(dataset) = cli.dataset {
        config.dataset = Some(dataset);
    }
    let service = ReportService::from_config(&config)?;

    match cli.command {
        Commands::Overview { filters } => {
            handlers::overview::handle(&service, &filters.to_selection()?, cli.format)
        }
        Commands::Attorneys { filters } => {
            handlers::attorneys::handle(&service, &filters.to_selection()?, cli.format)
        }
        Commands::Clients { top, filters } => {
            handlers::clients::handle(&service, &filters.to_selection()?, top, cli.format)
        }
        Commands::PracticeAreas { filters } => {
            handlers::practice::handle(&service, &filters.to_selection()?, cli.format)
        }
        Commands::Trending { filters } => {
            handlers::trending::handle(&service, &filters.to_selection()?, cli.format)
        }
        Commands::Export { output, filters } => {
            handlers::export::handle(&service, &filters.to_selection()?, output, cli.format)
        }
        Commands::Data { command } => match command {
            DataCommand::Info => handlers::info::handle(&service, cli.format),
        },
    }
}
