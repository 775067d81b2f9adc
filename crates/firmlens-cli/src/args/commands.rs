use super::common::FilterArgs;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Firm-wide key performance metrics")]
    Overview {
        #[command(flatten)]
        filters: FilterArgs,
    },

    #[command(about = "Per-attorney and per-level performance")]
    Attorneys {
        #[command(flatten)]
        filters: FilterArgs,
    },

    #[command(about = "Client hours, revenue, and matter counts")]
    Clients {
        #[arg(long, default_value = "10", help = "Size of the top-clients slice")]
        top: usize,

        #[command(flatten)]
        filters: FilterArgs,
    },

    #[command(name = "practice-areas", about = "Practice-area performance")]
    PracticeAreas {
        #[command(flatten)]
        filters: FilterArgs,
    },

    #[command(about = "Monthly trends, overall and by attorney level")]
    Trending {
        #[command(flatten)]
        filters: FilterArgs,
    },

    #[command(about = "Export the filtered table as CSV")]
    Export {
        #[arg(long, short, help = "Output path (stdout when omitted)")]
        output: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    #[command(about = "Inspect the loaded dataset")]
    Data {
        #[command(subcommand)]
        command: DataCommand,
    },
}

#[derive(Subcommand)]
pub enum DataCommand {
    #[command(about = "Row count, date span, warnings, and facet cardinalities")]
    Info,
}
