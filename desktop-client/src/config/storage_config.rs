use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    pub high_score_file: String,
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.high_score_file.trim().is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            high_score_file: "snake_storage.yaml".to_string(),
        }
    }
}
