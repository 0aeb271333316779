// File: src/core/composer.rs
use crate::core::types::{Category, DailyWordSet, DictionaryEntry};
use crate::error::{Result, VocabError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Slot order of every generated sentence.
pub const TEMPLATE: [Category; 8] = [
    Category::Pronoun,
    Category::Verb,
    Category::Adjective,
    Category::Substantive,
    Category::Connective,
    Category::Pronoun,
    Category::Verb,
    Category::Substantive,
];

/// True when `word` survives the tokenization used by `validate_sentence`,
/// which strips periods and splits on single spaces only.
fn is_single_token(word: &str) -> bool {
    !word.contains(' ') && !word.contains('.')
}

/// Draws one word per template slot until the sentence validates against
/// `word_set`.
///
/// Only single-token entries are drawn, which makes the first draw valid in
/// practice. A category without any such entry is rejected up front rather
/// than retried forever.
pub fn compose_sentence<R: Rng + ?Sized>(word_set: &DailyWordSet, rng: &mut R) -> Result<String> {
    let mut pools: Vec<Vec<&DictionaryEntry>> = Vec::with_capacity(TEMPLATE.len());
    for category in TEMPLATE {
        let pool: Vec<&DictionaryEntry> = word_set
            .words(category)
            .iter()
            .filter(|entry| is_single_token(&entry.english))
            .collect();
        if pool.is_empty() {
            return Err(VocabError::InvalidInput(format!(
                "no single-word {} to build a sentence from",
                category
            )));
        }
        pools.push(pool);
    }

    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let words: Vec<&str> = pools
            .iter()
            .filter_map(|pool| pool.choose(&mut *rng))
            .map(|entry| entry.english.as_str())
            .collect();
        let sentence = format!("{}.", words.join(" "));

        if validate_sentence(&sentence, word_set) {
            if attempts > 1 {
                tracing::debug!(attempts, "sentence accepted after retries");
            }
            return Ok(sentence);
        }
    }
}

/// Checks that each of the 8 tokens belongs to its slot's category,
/// ignoring case. Periods are stripped before splitting on spaces.
pub fn validate_sentence(sentence: &str, word_set: &DailyWordSet) -> bool {
    let cleaned = sentence.replace('.', "");
    let tokens: Vec<&str> = cleaned.split(' ').collect();
    if tokens.len() != TEMPLATE.len() {
        return false;
    }

    tokens.iter().zip(TEMPLATE.iter()).all(|(token, &category)| {
        let token = token.to_lowercase();
        word_set
            .words(category)
            .iter()
            .any(|entry| entry.english.to_lowercase() == token)
    })
}
