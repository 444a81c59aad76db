//! Log file setup.
//!
//! The terminal belongs to the UI, so logs only ever go to a file.

use std::{
    fs::{self, File},
    path::PathBuf,
    sync::Mutex,
};

use color_eyre::eyre::{Result, WrapErr};
use stardrift_config::{LogConfig, log_dir};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "stardrift.log";

/// Where logs go for `config`: the configured file, else the platform data
/// directory.
pub fn log_path(config: &LogConfig) -> Option<PathBuf> {
    config
        .file
        .clone()
        .or_else(|| log_dir().map(|dir| dir.join(LOG_FILE)))
}

/// Filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is off or there is nowhere to write.
pub fn init_logging(config: &LogConfig) -> Result<Option<PathBuf>> {
    if config.level.eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    let Some(path) = log_path(config) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::create(&path)
        .wrap_err_with(|| format!("creating log file {}", path.display()))?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(file_layer)
        .try_init()
        .wrap_err("installing log subscriber")?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_file_wins() {
        let config = LogConfig {
            file: Some(PathBuf::from("/tmp/elsewhere.log")),
            ..Default::default()
        };
        assert_eq!(log_path(&config), Some(PathBuf::from("/tmp/elsewhere.log")));
    }

    #[test]
    fn test_default_file_name() {
        if let Some(path) = log_path(&LogConfig::default()) {
            assert!(path.ends_with(LOG_FILE));
        }
    }

    #[test]
    fn test_off_installs_nothing() {
        let config = LogConfig {
            level: "OFF".to_string(),
            ..Default::default()
        };
        assert_eq!(init_logging(&config).unwrap(), None);
    }
}
