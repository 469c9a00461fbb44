use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::games::snake::Grid;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub unit_size: i32,
    pub tick_interval_ms: u32,
    pub initial_length: u32,
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.board_width, self.board_height, self.unit_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.unit_size <= 0 {
            return Err("unit_size must be greater than 0".to_string());
        }
        if self.board_width <= 0 || self.board_height <= 0 {
            return Err("board dimensions must be positive".to_string());
        }
        if self.board_width % self.unit_size != 0 || self.board_height % self.unit_size != 0 {
            return Err("board dimensions must be multiples of unit_size".to_string());
        }
        if self.initial_length < 1 {
            return Err("initial_length must be at least 1".to_string());
        }
        // The starting snake occupies columns 1..=initial_length on row 1 and needs a free column ahead.
        let columns = self.board_width / self.unit_size;
        let rows = self.board_height / self.unit_size;
        if columns < self.initial_length as i32 + 2 || rows < 2 {
            return Err("board is too small for the initial snake".to_string());
        }
        if self.tick_interval_ms < 10 {
            return Err("tick_interval_ms must be at least 10".to_string());
        }
        if self.tick_interval_ms > 2000 {
            return Err("tick_interval_ms must not exceed 2000".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 500,
            board_height: 500,
            unit_size: 25,
            tick_interval_ms: 70,
            initial_length: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(GameConfig::default().tick_interval(), Duration::from_millis(70));
    }

    #[test]
    fn test_board_must_align_with_unit() {
        let config = GameConfig {
            board_width: 510,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_board_must_fit_initial_snake() {
        let config = GameConfig {
            board_width: 150,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            board_width: 175,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_tick_interval_bounds() {
        let too_fast = GameConfig {
            tick_interval_ms: 5,
            ..GameConfig::default()
        };
        let too_slow = GameConfig {
            tick_interval_ms: 5000,
            ..GameConfig::default()
        };
        assert!(too_fast.validate().is_err());
        assert!(too_slow.validate().is_err());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: GameConfig = serde_yaml_ng::from_str("tick_interval_ms: 120\n").unwrap();
        assert_eq!(
            config,
            GameConfig {
                tick_interval_ms: 120,
                ..GameConfig::default()
            }
        );
    }

    #[test]
    fn test_yaml_round_trip_keeps_fields() {
        let yaml = "board_width: 300\nboard_height: 200\nunit_size: 20\ntick_interval_ms: 90\ninitial_length: 3\n";
        let config: GameConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.grid().columns(), 15);
        assert_eq!(config.grid().rows(), 10);
        assert_eq!(config.validate(), Ok(()));
    }
}
