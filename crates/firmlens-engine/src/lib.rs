pub mod aggregate;
pub mod columns;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;

pub use aggregate::{Dimension, Field, GroupRow, Metric, Value, aggregate, sort_by_metric_desc};
pub use error::{Error, Result};
pub use export::{write_group_rows, write_records};
pub use filter::apply;
pub use loader::{LoadReport, ParseWarnings, load_dataset};
