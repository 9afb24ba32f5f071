pub mod toml_config;

pub use toml_config::{LogConfig, TimerConfig, ToolsConfig};
