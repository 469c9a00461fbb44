use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, GameConfig, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::StorageConfig;

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

fn exe_dir() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    exe_path.parent().map(Path::to_path_buf)
}

fn get_config_path() -> String {
    if let Some(dir) = exe_dir() {
        return dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Relative storage paths live next to the executable, like the config file.
    pub fn high_score_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.storage.high_score_file);
        if path.is_absolute() {
            return path;
        }
        match exe_dir() {
            Some(dir) => dir.join(path),
            None => path,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_snake_client_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = Config {
            game: GameConfig {
                tick_interval_ms: 100,
                ..GameConfig::default()
            },
            storage: StorageConfig {
                high_score_file: "scores/high.yaml".to_string(),
            },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));

        let fresh = get_config_manager(Some(&file_path));
        assert_eq!(fresh.get_config(), Ok(config));
        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("storage:\n  high_score_file: best.yaml\n")
            .unwrap();

        let config = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.storage.high_score_file, "best.yaml");
        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_partial_game_section_fills_defaults() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("game:\n  tick_interval_ms: 100\n")
            .unwrap();

        let config = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(config.game.tick_interval_ms, 100);
        assert_eq!(config.game.board_width, 500);
        assert_eq!(config.game.initial_length, 5);
        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              board_width: 510
              board_height: 500
              unit_size: 25
              tick_interval_ms: 70
              initial_length: 5
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(Some(&file_path));
        assert!(manager.get_config().is_err());
        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_absolute_high_score_path_is_kept() {
        let absolute = std::env::temp_dir().join("snake_high.yaml");
        let config = Config {
            storage: StorageConfig {
                high_score_file: absolute.to_string_lossy().into_owned(),
            },
            ..Config::default()
        };
        assert_eq!(config.high_score_path(), absolute);
    }
}
