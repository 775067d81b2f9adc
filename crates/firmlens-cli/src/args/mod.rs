mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "firmlens")]
#[command(about = "Filter and aggregate law-firm timekeeping exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "firmlens.toml", global = true)]
    pub config: PathBuf,

    #[arg(long, global = true, help = "Dataset CSV path (overrides the config file)")]
    pub dataset: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}
