//! Configuration: TOML settings plus an on-disk manager.
//!
//! Settings feed the widget's element ids and appearance. The manager keeps
//! the file normalized and writes it atomically.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{AppearanceSettings, ConfigSection, ElementSettings, LoggingSettings, Settings};
