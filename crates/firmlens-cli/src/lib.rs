mod args;
mod commands;
mod handlers;
mod presentation;

pub use args::{Cli, Commands, DataCommand, OutputFormat};
pub use commands::run;
