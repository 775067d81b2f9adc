use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Seniority classification of a timekeeper.
///
/// The classification is firm data, not code: the full-name → level
/// mapping is injected via [`LevelTable`] at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttorneyLevel {
    #[serde(rename = "Senior Counsel")]
    SeniorCounsel,
    #[serde(rename = "Mid-Level Counsel")]
    MidLevelCounsel,
    #[serde(rename = "Document Specialist")]
    DocumentSpecialist,
    #[serde(rename = "Paralegal")]
    Paralegal,
    #[serde(rename = "Other")]
    Other,
}

impl AttorneyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttorneyLevel::SeniorCounsel => "Senior Counsel",
            AttorneyLevel::MidLevelCounsel => "Mid-Level Counsel",
            AttorneyLevel::DocumentSpecialist => "Document Specialist",
            AttorneyLevel::Paralegal => "Paralegal",
            AttorneyLevel::Other => "Other",
        }
    }
}

impl fmt::Display for AttorneyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttorneyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Senior Counsel" => Ok(AttorneyLevel::SeniorCounsel),
            "Mid-Level Counsel" => Ok(AttorneyLevel::MidLevelCounsel),
            "Document Specialist" => Ok(AttorneyLevel::DocumentSpecialist),
            "Paralegal" => Ok(AttorneyLevel::Paralegal),
            "Other" => Ok(AttorneyLevel::Other),
            _ => Err(format!("Unknown attorney level: {}", s)),
        }
    }
}

/// Injected full-name → level mapping.
///
/// Lookup is exact and case-sensitive; callers are expected to trim the
/// name before querying. Names absent from the table resolve to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelTable {
    entries: HashMap<String, AttorneyLevel>,
}

impl LevelTable {
    pub fn new(entries: HashMap<String, AttorneyLevel>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, full_name: &str) -> Option<AttorneyLevel> {
        self.entries.get(full_name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FromIterator<(String, AttorneyLevel)> for LevelTable {
    fn from_iter<T: IntoIterator<Item = (String, AttorneyLevel)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let table: LevelTable = [("Jane Doe".to_string(), AttorneyLevel::SeniorCounsel)]
            .into_iter()
            .collect();

        assert_eq!(table.lookup("Jane Doe"), Some(AttorneyLevel::SeniorCounsel));
        assert_eq!(table.lookup("jane doe"), None);
        assert_eq!(table.lookup("Jane Doe "), None);
        assert_eq!(table.lookup("John Roe"), None);
    }

    #[test]
    fn level_round_trips_through_display() {
        for level in [
            AttorneyLevel::SeniorCounsel,
            AttorneyLevel::MidLevelCounsel,
            AttorneyLevel::DocumentSpecialist,
            AttorneyLevel::Paralegal,
            AttorneyLevel::Other,
        ] {
            assert_eq!(level.as_str().parse::<AttorneyLevel>().unwrap(), level);
        }
    }
}
