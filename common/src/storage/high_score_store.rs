use crate::log;

use super::KeyValueStore;

pub const HIGH_SCORE_KEY: &str = "High Score";

/// Reads and writes the high score under a fixed key.
pub struct HighScoreStore<TStore: KeyValueStore> {
    store: TStore,
}

impl<TStore: KeyValueStore> HighScoreStore<TStore> {
    pub fn new(store: TStore) -> Self {
        Self { store }
    }

    /// Raw persisted value. `None` when absent or not a non-negative integer.
    pub fn load_high_score(&self) -> Result<Option<u32>, String> {
        let Some(raw) = self.store.get(HIGH_SCORE_KEY)? else {
            return Ok(None);
        };
        Ok(parse_score(&raw))
    }

    /// Persisted value with every failure coerced to 0.
    pub fn load_or_default(&self) -> u32 {
        match self.load_high_score() {
            Ok(Some(score)) => score,
            Ok(None) => 0,
            Err(e) => {
                log!("Failed to load high score, using 0: {}", e);
                0
            }
        }
    }

    pub fn save_high_score(&self, value: u32) -> Result<(), String> {
        self.store.set(HIGH_SCORE_KEY, &value.to_string())
    }
}

fn parse_score(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Some(value);
    }
    // Values written by other tools may be floats such as "12.0".
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 && value <= u32::MAX as f64 => {
            Some(value.trunc() as u32)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentProvider;
    use crate::storage::{MemoryStore, YamlFileStore};

    #[test]
    fn test_empty_store_yields_zero() {
        let store = HighScoreStore::new(MemoryStore::new());
        assert_eq!(store.load_high_score(), Ok(None));
        assert_eq!(store.load_or_default(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let store = HighScoreStore::new(MemoryStore::new());
        store.save_high_score(42).unwrap();
        assert_eq!(store.load_or_default(), 42);
    }

    #[test]
    fn test_invalid_values_coerce_to_zero() {
        let backing = MemoryStore::new();
        let store = HighScoreStore::new(backing.clone());

        for raw in ["-3", "NaN", "abc", "", "inf", "-0.5"] {
            backing.set(HIGH_SCORE_KEY, raw).unwrap();
            assert_eq!(store.load_or_default(), 0, "raw value {:?}", raw);
        }
    }

    #[test]
    fn test_float_values_are_truncated() {
        let backing = MemoryStore::new();
        backing.set(HIGH_SCORE_KEY, " 12.0 ").unwrap();
        let store = HighScoreStore::new(backing);
        assert_eq!(store.load_or_default(), 12);
    }

    #[test]
    fn test_save_recovers_from_corrupt_store_file() {
        let store = HighScoreStore::new(YamlFileStore::with_provider(
            MemoryContentProvider::with_content("[1, 2"),
        ));
        assert_eq!(store.load_or_default(), 0);

        store.save_high_score(7).unwrap();
        assert_eq!(store.load_high_score(), Ok(Some(7)));
    }
}
