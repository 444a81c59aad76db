//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use stardrift_config::Config;

/// Command-line arguments. Values given here override `config.toml`.
#[derive(Parser, Debug, Default)]
#[command(name = "stardrift", version, about = "An animated starfield backdrop for the terminal")]
pub struct Cli {
    /// Path to the config file (overrides the default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the random source, for a reproducible backdrop.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of background stars.
    #[arg(long)]
    pub stars: Option<usize>,

    /// Target frames per second.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Cap on live floaters for periodic spawns (0 for no cap).
    #[arg(long)]
    pub max_floaters: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Hide the title banner.
    #[arg(long)]
    pub no_banner: bool,

    /// Disable the nebula glow.
    #[arg(long)]
    pub no_nebula: bool,

    /// Write a config file with default values and exit.
    #[arg(long)]
    pub write_default_config: bool,
}

impl Cli {
    /// Apply the overrides given on the command line to `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(stars) = self.stars {
            config.starfield.star_count = stars;
        }
        if let Some(fps) = self.fps {
            config.display.fps = fps;
        }
        if let Some(max) = self.max_floaters {
            config.floaters.max_floaters = max;
        }
        if let Some(ref level) = self.log_level {
            config.log.level = level.clone();
        }
        if self.no_banner {
            config.display.show_banner = false;
        }
        if self.no_nebula {
            config.display.show_nebula = false;
        }
    }

    /// Load the config from `--config` or the default location.
    pub fn load_config(&self) -> Result<Config, stardrift_config::ConfigError> {
        match self.config {
            Some(ref path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}
