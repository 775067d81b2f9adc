//! Request-facing facade: one validated `FilterSelection` in, one report
//! out. Holds no per-request state; the only shared resource is the
//! process-wide dataset cache.

use std::io;
use std::path::PathBuf;

use once_cell::sync::Lazy;

use firmlens_engine::{ParseWarnings, apply, write_records};
use firmlens_types::{FilterSelection, LevelTable, Record};

use crate::cache::{Dataset, DatasetCache};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::reports::{
    AttorneysReport, ClientsReport, DataSummary, OverviewReport, PracticeAreasReport,
    TrendingReport,
};

static SHARED_CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

#[derive(Debug)]
pub struct ReportService {
    dataset_path: PathBuf,
    levels: LevelTable,
    cache: &'static DatasetCache,
}

impl ReportService {
    /// Build from config; the dataset path must be set (via config file
    /// or CLI override) for any report to be produced.
    pub fn from_config(config: &Config) -> Result<Self> {
        let dataset_path = config.dataset.clone().ok_or_else(|| {
            Error::Config("no dataset configured; set `dataset` or pass --dataset".to_string())
        })?;

        Ok(Self {
            dataset_path,
            levels: config.level_table(),
            cache: &SHARED_CACHE,
        })
    }

    pub fn dataset(&self) -> Result<Dataset> {
        self.cache.load(&self.dataset_path, &self.levels)
    }

    /// Load (or reuse) the dataset and apply `selection`. The selection
    /// is validated here so an out-of-domain facet fails before the
    /// file is touched.
    pub fn filtered(&self, selection: &FilterSelection) -> Result<(Vec<Record>, ParseWarnings)> {
        selection.validate()?;
        let dataset = self.dataset()?;
        Ok((apply(&dataset.records, selection), dataset.warnings))
    }

    pub fn overview(&self, selection: &FilterSelection) -> Result<(OverviewReport, ParseWarnings)> {
        selection.validate()?;
        let dataset = self.dataset()?;
        Ok((
            crate::reports::overview(&dataset.records, selection),
            dataset.warnings,
        ))
    }

    pub fn attorneys(
        &self,
        selection: &FilterSelection,
    ) -> Result<(AttorneysReport, ParseWarnings)> {
        let (records, warnings) = self.filtered(selection)?;
        Ok((crate::reports::attorneys(&records), warnings))
    }

    pub fn clients(
        &self,
        selection: &FilterSelection,
        top: usize,
    ) -> Result<(ClientsReport, ParseWarnings)> {
        let (records, warnings) = self.filtered(selection)?;
        Ok((crate::reports::clients(&records, top), warnings))
    }

    pub fn practice_areas(
        &self,
        selection: &FilterSelection,
    ) -> Result<(PracticeAreasReport, ParseWarnings)> {
        let (records, warnings) = self.filtered(selection)?;
        Ok((crate::reports::practice_areas(&records), warnings))
    }

    pub fn trending(&self, selection: &FilterSelection) -> Result<(TrendingReport, ParseWarnings)> {
        let (records, warnings) = self.filtered(selection)?;
        Ok((crate::reports::trending(&records), warnings))
    }

    pub fn summary(&self) -> Result<DataSummary> {
        let dataset = self.dataset()?;
        Ok(crate::reports::summarize(&dataset))
    }

    /// Write the raw filtered table as CSV to `writer`.
    pub fn export<W: io::Write>(
        &self,
        selection: &FilterSelection,
        writer: W,
    ) -> Result<(usize, ParseWarnings)> {
        let (records, warnings) = self.filtered(selection)?;
        write_records(writer, &records)?;
        Ok((records.len(), warnings))
    }
}
