//! Configuration for the stardrift backdrop.
//!
//! Settings persist as TOML in the platform configuration directory. Every
//! section uses `#[serde(default)]`, so a partial file fills the rest from
//! defaults and a missing file is the same as an empty one.

mod config;
mod error;
mod paths;

pub use config::{Config, DisplayConfig, LogConfig};
pub use error::ConfigError;
pub use paths::{config_path, log_dir};
