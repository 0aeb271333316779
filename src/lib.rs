// src/lib.rs

pub mod config;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod persistence;

pub use crate::config::{CategoryOffsets, Config};
pub use crate::core::calendar::{compute_seed, day_stamp, parse_day, Clock, FixedClock, SystemClock};
pub use crate::core::composer::{compose_sentence, validate_sentence, TEMPLATE};
pub use crate::core::engine::DailyVocabulary;
pub use crate::core::selector::{build_daily_word_set, build_word_set_with, select_words};
pub use crate::core::types::{Category, DailyWordSet, DictionaryEntry};
pub use crate::dictionary::Dictionaries;
pub use crate::error::{Result, VocabError};
pub use crate::persistence::{FileCache, MemoryCache, WordSetCache};
