//! Process-wide dataset cache keyed by source path and modification time.
//!
//! The loaded table is immutable and swapped atomically on reload; the
//! lock is held only to compare the key and clone the `Arc`, so
//! concurrent report requests share one parse. Filtered and aggregated
//! outputs stay request-local.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use firmlens_engine::{ParseWarnings, load_dataset};
use firmlens_types::{LevelTable, Record};

use crate::error::Result;

/// A loaded, immutable record table plus its load warnings.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Arc<Vec<Record>>,
    pub warnings: ParseWarnings,
}

#[derive(Debug)]
struct CacheEntry {
    path: PathBuf,
    modified: Option<SystemTime>,
    dataset: Dataset,
}

/// Single-entry cache: one dataset per process. A different path or a
/// changed mtime invalidates the entry; nothing else does.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: RwLock<Option<CacheEntry>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, reloading when the source
    /// file changed (or was never loaded).
    pub fn load(&self, path: &Path, levels: &LevelTable) -> Result<Dataset> {
        let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok();

        if let Some(dataset) = self.lookup(path, modified) {
            return Ok(dataset);
        }

        let report = load_dataset(path, levels)?;
        let dataset = Dataset {
            records: Arc::new(report.records),
            warnings: report.warnings,
        };

        let mut slot = self.entry.write().expect("dataset cache poisoned");
        *slot = Some(CacheEntry {
            path: path.to_path_buf(),
            modified,
            dataset: dataset.clone(),
        });

        Ok(dataset)
    }

    fn lookup(&self, path: &Path, modified: Option<SystemTime>) -> Option<Dataset> {
        // A missing mtime (unreadable source) never serves a stale table.
        modified?;

        let slot = self.entry.read().expect("dataset cache poisoned");
        match slot.as_ref() {
            Some(entry) if entry.path == path && entry.modified == modified => {
                Some(entry.dataset.clone())
            }
            _ => None,
        }
    }

    pub fn invalidate(&self) {
        let mut slot = self.entry.write().expect("dataset cache poisoned");
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const CSV_A: &str = "Activity date,Billed hours\n01/15/2024,1.0\n";
    const CSV_B: &str = "Activity date,Billed hours\n01/15/2024,1.0\n02/15/2024,2.0\n";

    #[test]
    fn unchanged_source_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "data.csv", CSV_A);
        let cache = DatasetCache::new();
        let levels = LevelTable::default();

        let first = cache.load(&path, &levels).unwrap();
        let second = cache.load(&path, &levels).unwrap();
        assert!(Arc::ptr_eq(&first.records, &second.records));
    }

    #[test]
    fn mtime_change_invalidates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "data.csv", CSV_A);
        let cache = DatasetCache::new();
        let levels = LevelTable::default();

        let first = cache.load(&path, &levels).unwrap();
        assert_eq!(first.records.len(), 1);

        write_csv(dir.path(), "data.csv", CSV_B);
        // Force an observable mtime difference regardless of fs granularity.
        filetime::set_file_mtime(&path, filetime::FileTime::from_unix_time(2_000_000_000, 0))
            .unwrap();

        let second = cache.load(&path, &levels).unwrap();
        assert_eq!(second.records.len(), 2);
    }

    #[test]
    fn different_path_is_not_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path_a = write_csv(dir.path(), "a.csv", CSV_A);
        let path_b = write_csv(dir.path(), "b.csv", CSV_B);
        let cache = DatasetCache::new();
        let levels = LevelTable::default();

        assert_eq!(cache.load(&path_a, &levels).unwrap().records.len(), 1);
        assert_eq!(cache.load(&path_b, &levels).unwrap().records.len(), 2);
    }

    #[test]
    fn missing_file_errors_and_does_not_poison_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::new();
        let levels = LevelTable::default();

        assert!(cache.load(&dir.path().join("missing.csv"), &levels).is_err());

        let path = write_csv(dir.path(), "data.csv", CSV_A);
        assert_eq!(cache.load(&path, &levels).unwrap().records.len(), 1);
    }
}
