pub mod config;
pub mod core;
pub mod utils;

pub use config::ToolsConfig;
pub use core::{
    files::{read_file, read_file_async, write_file, write_file_async},
    net::{get_json, get_json_async},
    strings::{camel_to_snake, slugify},
    timers::{timer, try_timer, Report, Timer, TimerGuard, TracingReport},
};
pub use utils::error::{ErrorCategory, Result, ToolsError};
