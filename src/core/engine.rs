use crate::config::Config;
use crate::core::calendar::{day_stamp, Clock, SystemClock};
use crate::core::composer::compose_sentence;
use crate::core::selector::build_word_set_with;
use crate::core::types::DailyWordSet;
use crate::dictionary::Dictionaries;
use crate::error::Result;
use crate::persistence::{MemoryCache, WordSetCache};
use rand::Rng;

// The vocabulary service is composed of the tables, the clock and the day cache.
pub struct DailyVocabulary {
    pub dictionaries: Dictionaries,
    pub config: Config,
    cache: Box<dyn WordSetCache>,
    clock: Box<dyn Clock>,
}

impl DailyVocabulary {
    /// Built-in tables, default config, in-memory cache and the system clock.
    pub fn new() -> Self {
        Self::with_parts(
            Dictionaries::builtin(),
            Config::default(),
            Box::new(MemoryCache::new()),
            Box::new(SystemClock),
        )
    }

    pub fn with_parts(
        dictionaries: Dictionaries,
        config: Config,
        cache: Box<dyn WordSetCache>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self { dictionaries, config, cache, clock }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Returns today's set, from the cache when it was built today.
    /// A set cached on another day is discarded and rebuilt.
    pub fn todays_words(&mut self) -> Result<DailyWordSet> {
        let today = self.clock.today();
        let stamp = day_stamp(today);
        let key = self.config.cache_key.clone();

        if let Some(cached) = self.cache.get(&key) {
            if cached.created_at == stamp {
                tracing::debug!(key = %key, day = %stamp, "word set cache hit");
                return Ok(cached);
            }
            tracing::info!(key = %key, cached_day = %cached.created_at, day = %stamp, "discarding stale word set");
            self.cache.remove(&key);
        }

        let set = build_word_set_with(&self.dictionaries, today, &self.config)?;
        tracing::info!(day = %stamp, "built daily word set");
        if let Err(e) = self.cache.put(&key, &set) {
            tracing::warn!(key = %key, error = %e, "could not cache word set");
        }
        Ok(set)
    }

    /// Drops whatever is cached and recomputes today's set.
    pub fn refresh(&mut self) -> Result<DailyWordSet> {
        let key = self.config.cache_key.clone();
        self.cache.remove(&key);
        self.todays_words()
    }

    pub fn sentence<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String> {
        let set = self.todays_words()?;
        compose_sentence(&set, rng)
    }
}

impl Default for DailyVocabulary {
    fn default() -> Self {
        Self::new()
    }
}
