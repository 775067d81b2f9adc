//! Consolidated report definitions.
//!
//! Every report is a thin declaration over `firmlens_engine::aggregate`
//! returning serializable tables; presentation stays in the CLI.

pub mod attorneys;
pub mod clients;
pub mod overview;
pub mod practice;
pub mod summary;
pub mod trending;

pub use attorneys::{AttorneysReport, attorneys};
pub use clients::{ClientsReport, clients};
pub use overview::{OverviewReport, overview};
pub use practice::{PracticeAreasReport, practice_areas};
pub use summary::{DataSummary, summarize};
pub use trending::{TrendingReport, trending};

use firmlens_engine::GroupRow;
use serde::Serialize;

/// One aggregated table, ready for rendering: key columns first, then
/// metric columns, in the same order as each row's cells.
#[derive(Debug, Clone, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<GroupRow>,
}

impl ReportTable {
    pub fn new(title: &str, columns: &[&str], rows: Vec<GroupRow>) -> Self {
        Self {
            title: title.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}
