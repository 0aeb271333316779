// File: src/core/selector.rs
use crate::config::Config;
use crate::core::calendar::{compute_seed, day_stamp};
use crate::core::types::{Category, DailyWordSet, DictionaryEntry};
use crate::dictionary::Dictionaries;
use crate::error::{Result, VocabError};
use chrono::NaiveDate;

/// Takes `count` consecutive entries starting at `(seed + offset) mod len`,
/// wrapping around the end. Repeats entries when `count > len`.
pub fn select_words<T: Clone>(dictionary: &[T], count: usize, seed: u64, offset: u64) -> Result<Vec<T>> {
    if dictionary.is_empty() {
        return Err(VocabError::InvalidInput("dictionary is empty".to_string()));
    }
    if count == 0 {
        return Err(VocabError::InvalidInput("word count must be positive".to_string()));
    }

    let len = dictionary.len() as u64;
    // Reduce both terms first so the sum cannot overflow.
    let start = (seed % len + offset % len) % len;
    Ok((0..count as u64)
        .map(|i| dictionary[((start + i) % len) as usize].clone())
        .collect())
}

/// Builds the day's word set with the default configuration.
pub fn build_daily_word_set(dictionaries: &Dictionaries, date: NaiveDate) -> Result<DailyWordSet> {
    build_word_set_with(dictionaries, date, &Config::default())
}

pub fn build_word_set_with(dictionaries: &Dictionaries, date: NaiveDate, config: &Config) -> Result<DailyWordSet> {
    let seed = compute_seed(date)?;
    let pick = |category: Category| -> Result<Vec<DictionaryEntry>> {
        select_words(
            dictionaries.entries(category),
            config.words_per_category,
            seed,
            config.offsets.for_category(category),
        )
        .map_err(|e| match e {
            VocabError::InvalidInput(msg) => VocabError::InvalidInput(format!("{}: {}", category, msg)),
            other => other,
        })
    };

    Ok(DailyWordSet {
        pronouns: pick(Category::Pronoun)?,
        verbs: pick(Category::Verb)?,
        adjectives: pick(Category::Adjective)?,
        connectives: pick(Category::Connective)?,
        substantives: pick(Category::Substantive)?,
        created_at: day_stamp(date),
    })
}
