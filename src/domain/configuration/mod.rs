pub mod generation_config;
pub mod loader;

pub use generation_config::{API_KEY_ENV, AppConfig, GenerationConfig, OutputConfig};
pub use loader::{CONFIG_FILE, ConfigOverrides, load_config, parse_config_content};
