use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use firmlens_types::{AttorneyLevel, LevelTable};

use crate::error::Result;

/// Workspace configuration.
///
/// The attorney-level classification lives here as data, not code: the
/// `[levels]` table maps exact full names to level names, e.g.
///
/// ```toml
/// dataset = "exports/full_year.csv"
///
/// [levels]
/// "Jane Doe" = "Senior Counsel"
/// "John Roe" = "Paralegal"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    #[serde(default)]
    pub levels: HashMap<String, AttorneyLevel>,
}

impl Config {
    /// Load from a TOML file; a missing file yields the default config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn level_table(&self) -> LevelTable {
        self.levels
            .iter()
            .map(|(name, level)| (name.clone(), *level))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_config_file_yields_default() {
        let config = Config::load_from(Path::new("/nonexistent/firmlens.toml")).unwrap();
        assert!(config.dataset.is_none());
        assert!(config.levels.is_empty());
    }

    #[test]
    fn levels_parse_by_display_name() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "dataset = \"data.csv\"\n\n[levels]\n\"Jane Doe\" = \"Senior Counsel\"\n\"John Roe\" = \"Paralegal\"\n"
        )
        .unwrap();
        file.flush().unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.dataset.as_deref(), Some(Path::new("data.csv")));

        let table = config.level_table();
        assert_eq!(table.lookup("Jane Doe"), Some(AttorneyLevel::SeniorCounsel));
        assert_eq!(table.lookup("John Roe"), Some(AttorneyLevel::Paralegal));
    }

    #[test]
    fn config_round_trips_through_save() {
        let config = Config {
            dataset: Some(PathBuf::from("data.csv")),
            levels: [("Jane Doe".to_string(), AttorneyLevel::Other)]
                .into_iter()
                .collect(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firmlens.toml");
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.dataset, config.dataset);
        assert_eq!(reloaded.levels.len(), 1);
    }
}
