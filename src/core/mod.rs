pub mod files;
pub mod net;
pub mod strings;
pub mod timers;

pub use crate::utils::error::Result;
