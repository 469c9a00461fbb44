use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, YamlConfigSerializer,
};
use crate::log;

/// A durable string-to-string store, the shape of a browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        (**self).set(key, value)
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| format!("Store lock poisoned: {}", e))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| format!("Store lock poisoned: {}", e))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores all entries as a single YAML mapping. Every write rewrites the whole file.
pub struct YamlFileStore<TProvider = FileContentConfigProvider>
where
    TProvider: ConfigContentProvider,
{
    content_provider: TProvider,
    serializer: YamlConfigSerializer,
}

impl YamlFileStore<FileContentConfigProvider> {
    pub fn open(file_path: impl Into<PathBuf>) -> Self {
        Self::with_provider(FileContentConfigProvider::new(file_path))
    }
}

impl<TProvider: ConfigContentProvider> YamlFileStore<TProvider> {
    pub fn with_provider(content_provider: TProvider) -> Self {
        Self {
            content_provider,
            serializer: YamlConfigSerializer::new(),
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, String> {
        match self.content_provider.get_config_content()? {
            Some(content) => self.parse_entries(&content),
            None => Ok(BTreeMap::new()),
        }
    }

    fn parse_entries(&self, content: &str) -> Result<BTreeMap<String, String>, String> {
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        self.serializer.deserialize(content)
    }
}

impl<TProvider: ConfigContentProvider> KeyValueStore for YamlFileStore<TProvider> {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.read_entries()?.remove(key))
    }

    /// A store whose content does not parse as a map is replaced by a fresh one.
    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let content = self.content_provider.get_config_content()?.unwrap_or_default();
        let mut entries = self.parse_entries(&content).unwrap_or_else(|e| {
            log!("Discarding unreadable store content: {}", e);
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());
        let content = self.serializer.serialize(&entries)?;
        self.content_provider.set_config_content(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentProvider;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_store_{}.yaml", random_number))
    }

    #[test]
    fn test_memory_store_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing"), Ok(None));
    }

    #[test]
    fn test_yaml_store_keeps_other_keys() {
        let provider = MemoryContentProvider::new();
        let store = YamlFileStore::with_provider(provider.clone());

        store.set("High Score", "12").unwrap();
        store.set("Theme", "dark").unwrap();
        store.set("High Score", "13").unwrap();

        assert_eq!(store.get("High Score"), Ok(Some("13".to_string())));
        assert_eq!(store.get("Theme"), Ok(Some("dark".to_string())));
        let content = provider.get_config_content().unwrap().unwrap();
        assert!(content.contains("High Score"));
    }

    #[test]
    fn test_yaml_store_empty_file_reads_as_empty() {
        let store = YamlFileStore::with_provider(MemoryContentProvider::with_content("  \n"));
        assert_eq!(store.get("High Score"), Ok(None));
    }

    #[test]
    fn test_yaml_store_corrupt_file_is_an_error() {
        let store = YamlFileStore::with_provider(MemoryContentProvider::with_content("[1, 2"));
        assert!(store.get("High Score").is_err());
    }

    #[test]
    fn test_yaml_store_set_overwrites_corrupt_content() {
        let provider = MemoryContentProvider::with_content("[1, 2");
        let store = YamlFileStore::with_provider(provider.clone());

        store.set("High Score", "7").unwrap();
        assert_eq!(store.get("High Score"), Ok(Some("7".to_string())));
        let reopened = YamlFileStore::with_provider(provider);
        assert_eq!(reopened.get("High Score"), Ok(Some("7".to_string())));
    }

    #[test]
    fn test_yaml_store_on_disk() {
        let path = get_temp_file_path();
        let store = YamlFileStore::open(path.clone());
        assert_eq!(store.get("High Score"), Ok(None));

        store.set("High Score", "7").unwrap();
        let reopened = YamlFileStore::open(path.clone());
        assert_eq!(reopened.get("High Score"), Ok(Some("7".to_string())));

        std::fs::remove_file(path).unwrap();
    }
}
