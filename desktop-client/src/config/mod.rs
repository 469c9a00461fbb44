mod main_config;
mod storage_config;

pub use main_config::{Config, get_config_manager};
pub use storage_config::StorageConfig;
