// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// One bilingual dictionary row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub english: String,
    pub portuguese: String,
}

impl DictionaryEntry {
    pub fn new(english: &str, portuguese: &str) -> Self {
        Self {
            english: english.to_string(),
            portuguese: portuguese.to_string(),
        }
    }
}

/// The five grammatical categories a day's words are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Pronoun,
    Verb,
    Adjective,
    Connective,
    Substantive,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Pronoun,
        Category::Verb,
        Category::Adjective,
        Category::Connective,
        Category::Substantive,
    ];

    /// Plural label used for headings and dictionary file keys.
    pub fn label(self) -> &'static str {
        match self {
            Category::Pronoun => "pronouns",
            Category::Verb => "verbs",
            Category::Adjective => "adjectives",
            Category::Connective => "connectives",
            Category::Substantive => "substantives",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The words selected for one calendar day.
/// Field names match the persisted `savedWords` record, hence `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWordSet {
    pub pronouns: Vec<DictionaryEntry>,
    pub verbs: Vec<DictionaryEntry>,
    pub adjectives: Vec<DictionaryEntry>,
    pub connectives: Vec<DictionaryEntry>,
    pub substantives: Vec<DictionaryEntry>,
    /// Day stamp (`YYYY-MM-DD`, UTC) the set was built for.
    pub created_at: String,
}

impl DailyWordSet {
    pub fn words(&self, category: Category) -> &[DictionaryEntry] {
        match category {
            Category::Pronoun => &self.pronouns,
            Category::Verb => &self.verbs,
            Category::Adjective => &self.adjectives,
            Category::Connective => &self.connectives,
            Category::Substantive => &self.substantives,
        }
    }
}
