use crate::core::types::Category;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Per-category start offsets added to the day seed.
/// Changing them changes which words a given day selects, so cached sets
/// built with other offsets will no longer match a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOffsets {
    pub verbs: u64,
    pub pronouns: u64,
    pub adjectives: u64,
    pub connectives: u64,
    pub substantives: u64,
}

impl CategoryOffsets {
    pub fn for_category(&self, category: Category) -> u64 {
        match category {
            Category::Pronoun => self.pronouns,
            Category::Verb => self.verbs,
            Category::Adjective => self.adjectives,
            Category::Connective => self.connectives,
            Category::Substantive => self.substantives,
        }
    }
}

impl Default for CategoryOffsets {
    fn default() -> Self {
        Self {
            verbs: 1,
            pronouns: 2,
            adjectives: 3,
            connectives: 4,
            substantives: 5,
        }
    }
}

/// Runtime configuration for daily selection and caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of words chosen per category each day.
    pub words_per_category: usize,
    pub offsets: CategoryOffsets,
    /// Key the day's set is cached under.
    pub cache_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_per_category: 5,
            offsets: CategoryOffsets::default(),
            cache_key: "savedWords".to_string(),
        }
    }
}

impl Config {
    /// Reads a JSON config; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        tracing::info!(path = %path.display(), cache_key = %config.cache_key, "loaded config");
        Ok(config)
    }
}
