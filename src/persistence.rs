// File: src/persistence.rs
use crate::core::types::DailyWordSet;
use crate::error::{Result, VocabError};
use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Keyed storage for the day's word set.
/// Callers decide staleness; the cache only stores what it is given.
pub trait WordSetCache {
    fn get(&self, key: &str) -> Option<DailyWordSet>;
    fn put(&mut self, key: &str, value: &DailyWordSet) -> Result<()>;
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<String, DailyWordSet>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordSetCache for MemoryCache {
    fn get(&self, key: &str) -> Option<DailyWordSet> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &DailyWordSet) -> Result<()> {
        self.entries.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Stores each key as `<dir>/<key>.bin`, bincode-encoded.
/// Writes go through a temp file in the same directory and are renamed into
/// place, so a reader never sees a half-written set.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Keys name a single file inside `dir`; separators and dot segments are refused.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
            return Err(VocabError::InvalidInput(format!("cache key '{}' is not a plain file name", key)));
        }
        Ok(self.dir.join(format!("{}.bin", key)))
    }
}

// Decoding from a slice bounds every length prefix by the bytes actually
// present, so a corrupt file fails instead of triggering a huge allocation.
fn load_from_disk(path: &Path) -> Result<DailyWordSet> {
    let bytes = fs::read(path)?;
    Ok(bincode::deserialize(&bytes)?)
}

fn save_to_disk(value: &DailyWordSet, path: &Path) -> Result<()> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(temp_file.as_file());
    bincode::serialize_into(&mut writer, value)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl WordSetCache for FileCache {
    fn get(&self, key: &str) -> Option<DailyWordSet> {
        let path = match self.path_for(key) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "refusing cache lookup");
                return None;
            }
        };
        match load_from_disk(&path) {
            Ok(set) => Some(set),
            Err(VocabError::Io(e)) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable cache file");
                None
            }
        }
    }

    fn put(&mut self, key: &str, value: &DailyWordSet) -> Result<()> {
        let path = self.path_for(key)?;
        save_to_disk(value, &path)?;
        tracing::debug!(path = %path.display(), created_at = %value.created_at, "cached word set");
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        let path = match self.path_for(key) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "refusing cache removal");
                return;
            }
        };
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "could not remove cache file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DictionaryEntry;

    fn sample(day: &str) -> DailyWordSet {
        let one = |w: &str| vec![DictionaryEntry::new(w, w)];
        DailyWordSet {
            pronouns: one("I"),
            verbs: one("eat"),
            adjectives: one("big"),
            connectives: one("and"),
            substantives: one("apple"),
            created_at: day.to_string(),
        }
    }

    #[test]
    fn memory_cache_put_get_remove() {
        let mut cache = MemoryCache::new();
        assert!(cache.get("k").is_none());
        cache.put("k", &sample("2024-03-07")).unwrap();
        assert_eq!(cache.get("k"), Some(sample("2024-03-07")));
        cache.remove("k");
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn file_cache_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = FileCache::new(dir.path().join("nested"));
        cache.put("savedWords", &sample("2024-03-07")).unwrap();

        let reopened = FileCache::new(dir.path().join("nested"));
        assert_eq!(reopened.get("savedWords"), Some(sample("2024-03-07")));

        cache.put("savedWords", &sample("2024-03-08")).unwrap();
        assert_eq!(reopened.get("savedWords").unwrap().created_at, "2024-03-08");
    }

    #[test]
    fn file_cache_treats_corrupt_file_as_miss() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("savedWords.bin"), b"\xff\xff\xff\xff\xff\xff\xff\xff\xff").unwrap();
        let cache = FileCache::new(dir.path());
        assert!(cache.get("savedWords").is_none());
    }

    #[test]
    fn file_cache_treats_huge_length_prefix_as_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path());

        // One pronoun whose english string claims u64::MAX bytes.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.extend_from_slice(&u64::MAX.to_le_bytes());
        bytes.extend_from_slice(b"x");
        fs::write(dir.path().join("savedWords.bin"), &bytes).unwrap();
        assert!(cache.get("savedWords").is_none());

        // A prefix that fits in memory accounting but not in the file.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.extend_from_slice(&(1u64 << 45).to_le_bytes());
        bytes.extend_from_slice(b"x");
        fs::write(dir.path().join("savedWords.bin"), &bytes).unwrap();
        assert!(cache.get("savedWords").is_none());

        // Outer list length far beyond the file.
        fs::write(dir.path().join("savedWords.bin"), (1u64 << 40).to_le_bytes()).unwrap();
        assert!(cache.get("savedWords").is_none());
    }

    #[test]
    fn file_cache_refuses_keys_that_escape_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("inner");
        let mut cache = FileCache::new(&inner);

        for key in ["../escape", "a/b", "a\\b", "..", ""] {
            let err = cache.put(key, &sample("2024-03-07")).unwrap_err();
            assert!(matches!(err, VocabError::InvalidInput(_)), "{}", key);
            assert!(cache.get(key).is_none());
            cache.remove(key);
        }
        assert!(!dir.path().join("escape.bin").exists());
        assert!(!inner.join("a").exists());
    }

    #[test]
    fn file_cache_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = FileCache::new(dir.path());
        cache.remove("missing");
        cache.put("k", &sample("2024-03-07")).unwrap();
        cache.remove("k");
        assert!(cache.get("k").is_none());
        assert!(!dir.path().join("k.bin").exists());
    }
}
