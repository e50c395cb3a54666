//! The set reference registry.
//!
//! Maps a set identifier to its display name and short abbreviation, loaded
//! once from `sets.json` and read-only thereafter. Collector codes cannot be
//! derived without it, so an unknown set id is surfaced to the caller as a
//! hard lookup miss rather than silently skipped.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One entry of the reference dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEntry {
    pub id: String,
    pub name: String,
    pub abbr: String,
}

/// Display name and short abbreviation for a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetInfo {
    pub name: String,
    pub abbr: String,
}

/// Immutable set-id → set-info registry.
#[derive(Debug, Clone, Default)]
pub struct SetRegistry {
    sets: HashMap<String, SetInfo>,
}

impl SetRegistry {
    /// Load the registry from a `sets.json` reader (a JSON array of entries).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let entries: Vec<SetEntry> = serde_json::from_reader(reader)?;
        if entries.is_empty() {
            return Err(DataError::invalid_data("Set reference dataset is empty"));
        }
        let sets = entries
            .into_iter()
            .map(|e| {
                (
                    e.id,
                    SetInfo {
                        name: e.name,
                        abbr: e.abbr,
                    },
                )
            })
            .collect();
        Ok(Self { sets })
    }

    /// Load the registry from a file path.
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Look up a set by its identifier.
    pub fn lookup(&self, set_id: &str) -> Option<&SetInfo> {
        self.sets.get(set_id)
    }

    /// Number of registered sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// All entries as (id, info) pairs, sorted by id for stable listing.
    pub fn entries(&self) -> Vec<(&str, &SetInfo)> {
        let mut entries: Vec<_> = self.sets.iter().map(|(id, info)| (id.as_str(), info)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
