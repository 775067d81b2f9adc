use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::Args;

use firmlens_types::{AttorneyLevel, FilterSelection, TimeFilter};

/// Facet filters shared by every report subcommand. All flags are
/// repeatable; an absent flag leaves its facet unrestricted.
///
/// Time can be narrowed either by period flags (--year/--month/--quarter)
/// or by an explicit date range (--from/--to), never both.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long = "year", value_name = "YYYY", conflicts_with_all = ["from", "to"])]
    pub years: Vec<i32>,

    #[arg(long = "month", value_name = "1-12", conflicts_with_all = ["from", "to"])]
    pub months: Vec<u32>,

    #[arg(long = "quarter", value_name = "1-4", conflicts_with_all = ["from", "to"])]
    pub quarters: Vec<u32>,

    #[arg(long, value_name = "YYYY-MM-DD", requires = "to")]
    pub from: Option<NaiveDate>,

    #[arg(long, value_name = "YYYY-MM-DD", requires = "from")]
    pub to: Option<NaiveDate>,

    #[arg(long = "attorney", value_name = "FULL NAME")]
    pub attorneys: Vec<String>,

    #[arg(long = "level", value_name = "LEVEL")]
    pub levels: Vec<String>,

    #[arg(long = "practice", value_name = "AREA")]
    pub practices: Vec<String>,

    #[arg(long = "location", value_name = "LOCATION")]
    pub locations: Vec<String>,

    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<String>,

    #[arg(long = "billing-method", value_name = "METHOD")]
    pub billing_methods: Vec<String>,

    #[arg(long = "client", value_name = "COMPANY")]
    pub clients: Vec<String>,
}

impl FilterArgs {
    pub fn to_selection(&self) -> Result<FilterSelection> {
        let time = match (self.from, self.to) {
            (Some(start), Some(end)) => Some(TimeFilter::Range { start, end }),
            (None, None) => {
                if self.years.is_empty() && self.months.is_empty() && self.quarters.is_empty() {
                    None
                } else {
                    Some(TimeFilter::Periods {
                        years: self.years.iter().copied().collect(),
                        months: self.months.iter().copied().collect(),
                        quarters: self.quarters.iter().copied().collect(),
                    })
                }
            }
            // clap's `requires` keeps this unreachable from the parser;
            // guard anyway for programmatic construction.
            _ => bail!("--from and --to must be given together"),
        };

        let mut attorney_levels = std::collections::BTreeSet::new();
        for raw in &self.levels {
            match raw.parse::<AttorneyLevel>() {
                Ok(level) => {
                    attorney_levels.insert(level);
                }
                Err(err) => bail!("{}", err),
            }
        }

        let selection = FilterSelection {
            time,
            attorneys: self.attorneys.iter().cloned().collect(),
            attorney_levels,
            practice_areas: self.practices.iter().cloned().collect(),
            locations: self.locations.iter().cloned().collect(),
            statuses: self.statuses.iter().cloned().collect(),
            billing_methods: self.billing_methods.iter().cloned().collect(),
            clients: self.clients.iter().cloned().collect(),
        };

        Ok(selection.validated()?)
    }
}
