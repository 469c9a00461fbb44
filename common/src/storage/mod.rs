mod high_score_store;
mod key_value_store;

pub use high_score_store::{HIGH_SCORE_KEY, HighScoreStore};
pub use key_value_store::{KeyValueStore, MemoryStore, YamlFileStore};
