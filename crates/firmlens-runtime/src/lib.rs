pub mod cache;
pub mod config;
pub mod error;
pub mod reports;
pub mod service;

pub use cache::{Dataset, DatasetCache};
pub use config::Config;
pub use error::{Error, Result};
pub use service::ReportService;
