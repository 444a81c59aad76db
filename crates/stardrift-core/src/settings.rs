//! Tunable parameters of the two backdrop effects.

use serde::{Deserialize, Serialize};

use crate::Icon;

/// Starfield parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldSettings {
    /// Number of stars generated per viewport.
    pub star_count: usize,
    /// Distance in pixels within which a star glows toward the pointer.
    pub glow_radius: f32,
    /// Twinkle time parameter per elapsed millisecond.
    pub twinkle_rate: f32,
    /// Probability per frame of attempting a shooting star.
    pub shooting_star_chance: f64,
    /// Interval of the timed shooting-star attempt, in milliseconds.
    pub shooting_star_interval_ms: u64,
    /// Frames a shooting star lives.
    pub shooting_star_life: u32,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            star_count: 2000,
            glow_radius: 60.0,
            twinkle_rate: 0.004,
            shooting_star_chance: 0.02,
            shooting_star_interval_ms: 3000,
            shooting_star_life: 90,
        }
    }
}

/// Floating icon parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloaterSettings {
    /// Floaters spawned on activation.
    pub initial_count: usize,
    /// Interval between periodic spawns, in milliseconds.
    pub spawn_interval_ms: u64,
    /// Distance outside the viewport edge where floaters appear.
    pub edge_offset: f32,
    /// Margin around the viewport beyond which floaters are removed.
    pub despawn_margin: f32,
    /// Side of the square sprite box, in pixels.
    pub sprite_size: f32,
    /// Lower bound of the per-axis speed, in pixels per frame.
    pub min_speed: f32,
    /// Upper bound (exclusive) of the per-axis speed.
    pub max_speed: f32,
    /// Periodic spawns are skipped once this many floaters are live.
    /// Zero disables the cap.
    pub max_floaters: usize,
    /// Icons to draw from, in order.
    pub icons: Vec<Icon>,
    /// Sprite opacity at rest.
    pub resting_opacity: f32,
    /// Sprite opacity under the pointer.
    pub hover_opacity: f32,
}

impl Default for FloaterSettings {
    fn default() -> Self {
        Self {
            initial_count: 5,
            spawn_interval_ms: 2000,
            edge_offset: 100.0,
            despawn_margin: 100.0,
            sprite_size: 100.0,
            min_speed: 0.3,
            max_speed: 0.7,
            max_floaters: 32,
            icons: Icon::ALL.to_vec(),
            resting_opacity: 0.4,
            hover_opacity: 0.8,
        }
    }
}

impl FloaterSettings {
    /// True when another periodic spawn would exceed the cap.
    pub fn at_capacity(&self, live: usize) -> bool {
        self.max_floaters != 0 && live >= self.max_floaters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        let mut settings = FloaterSettings::default();
        assert!(!settings.at_capacity(31));
        assert!(settings.at_capacity(32));

        settings.max_floaters = 0;
        assert!(!settings.at_capacity(10_000));
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: StarfieldSettings = toml::from_str("star_count = 10").expect("valid toml");
        assert_eq!(settings.star_count, 10);
        assert_eq!(settings.glow_radius, 60.0);
        assert_eq!(settings.shooting_star_life, 90);
    }
}
