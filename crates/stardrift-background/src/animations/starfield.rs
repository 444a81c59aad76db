//! Twinkling starfield with pointer glow and shooting stars (stateful).

use std::f32::consts::TAU;

use rand::Rng;
use stardrift_core::{StarfieldSettings, Vec2, Viewport};
use tracing::debug;

use crate::color::{Rgba, STREAK_GRADIENT};
use crate::surface::Surface;

/// Shooting stars alive at the same time never exceed this.
pub const MAX_SHOOTING_STARS: usize = 3;

/// Width of a shooting star streak in pixels.
const STREAK_WIDTH: f32 = 1.25;

/// A single background star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Position in pixels.
    pub position: Vec2,
    /// Radius before glow and twinkle.
    pub base_radius: f32,
    /// Radius drawn in the last frame.
    pub radius: f32,
    /// Phase offset of the twinkle oscillation, in radians.
    pub twinkle_phase: f32,
    /// Pointer glow in `[0, 1]` from the last frame.
    pub glow: f32,
    /// How strongly glow brightens this star, in `[0.5, 1]`.
    pub strength: f32,
}

/// A short-lived streak.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    /// Head position in pixels.
    pub position: Vec2,
    /// Pixels moved per frame.
    pub velocity: Vec2,
    /// Streak length in pixels.
    pub length: f32,
    /// Frames lived.
    pub life: u32,
    /// Frames to live.
    pub max_life: u32,
}

impl ShootingStar {
    /// End of the streak, behind the head along the direction of travel.
    pub fn tail(&self) -> Vec2 {
        self.position - self.velocity.normalize_or_zero() * self.length
    }

    pub fn is_expired(&self) -> bool {
        self.life > self.max_life
    }
}

/// Generate `count` stars spread uniformly over `viewport`.
pub fn generate_stars<R: Rng>(viewport: Viewport, count: usize, rng: &mut R) -> Vec<Star> {
    if viewport.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| Star {
            position: Vec2::new(
                rng.random::<f32>() * viewport.width,
                rng.random::<f32>() * viewport.height,
            ),
            radius: rng.random::<f32>() * 1.5 + 0.5,
            base_radius: rng.random::<f32>() * 1.5 + 0.5,
            twinkle_phase: rng.random::<f32>() * TAU,
            glow: 0.0,
            strength: 0.5 + rng.random::<f32>() * 0.5,
        })
        .collect()
}

/// Create a shooting star in the upper half of `viewport`, heading down and
/// to the left.
pub fn new_shooting_star<R: Rng>(viewport: Viewport, max_life: u32, rng: &mut R) -> ShootingStar {
    ShootingStar {
        position: Vec2::new(
            rng.random::<f32>() * viewport.width,
            rng.random::<f32>() * viewport.height / 2.0,
        ),
        velocity: Vec2::new(
            -10.0 - rng.random::<f32>() * 3.0,
            10.0 + rng.random::<f32>() * 3.0,
        ),
        length: rng.random::<f32>() * 80.0 + 50.0,
        life: 0,
        max_life,
    }
}

/// Glow in `[0, 1]` for a star `distance` pixels from the pointer.
pub fn glow_intensity(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (radius - distance).max(0.0) / radius
}

/// Twinkle multiplier in `[0.7, 1.3]`.
pub fn twinkle(time: f64, phase: f32) -> f32 {
    ((time + phase as f64).sin() * 0.3 + 1.0) as f32
}

/// Starfield animation state.
#[derive(Debug, Clone)]
pub struct Starfield {
    settings: StarfieldSettings,
    viewport: Viewport,
    stars: Vec<Star>,
    shooting_stars: Vec<ShootingStar>,
    pointer: Option<Vec2>,
}

impl Starfield {
    /// Create a starfield sized to `viewport`.
    pub fn new<R: Rng>(settings: StarfieldSettings, viewport: Viewport, rng: &mut R) -> Self {
        let stars = generate_stars(viewport, settings.star_count, rng);
        Self {
            settings,
            viewport,
            stars,
            shooting_stars: Vec::new(),
            pointer: None,
        }
    }

    pub fn settings(&self) -> &StarfieldSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Resize to `viewport` and regenerate every star.
    ///
    /// Shooting stars already in flight keep going and expire as usual.
    pub fn resize<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        self.viewport = viewport;
        self.stars = generate_stars(viewport, self.settings.star_count, rng);
        debug!(
            width = viewport.width,
            height = viewport.height,
            stars = self.stars.len(),
            "regenerated starfield"
        );
    }

    /// Remember the pointer position for the next frame.
    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    /// Forget the pointer, so no star glows.
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Add a shooting star unless the cap is reached or there is nowhere to
    /// draw it.
    pub fn try_spawn_shooting_star<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.shooting_stars.len() >= MAX_SHOOTING_STARS || self.viewport.is_empty() {
            return false;
        }
        let star = new_shooting_star(self.viewport, self.settings.shooting_star_life, rng);
        debug!(x = star.position.x, y = star.position.y, "shooting star");
        self.shooting_stars.push(star);
        true
    }

    /// Advance one frame and draw it.
    ///
    /// `elapsed_ms` is monotonic time since the animation loop started.
    pub fn frame<R: Rng, S: Surface>(&mut self, elapsed_ms: u64, rng: &mut R, surface: &mut S) {
        surface.clear(self.viewport);
        if self.viewport.is_empty() {
            return;
        }

        let time = self.time(elapsed_ms);

        if rng.random::<f64>() < self.settings.shooting_star_chance {
            self.try_spawn_shooting_star(rng);
        }

        let glow_radius = self.settings.glow_radius;
        for star in &mut self.stars {
            star.glow = match self.pointer {
                Some(pointer) => glow_intensity(pointer.distance(star.position), glow_radius),
                None => 0.0,
            };
            star.radius = (star.base_radius + star.glow) * twinkle(time, star.twinkle_phase);
            surface.fill_circle(
                star.position,
                star.radius,
                Rgba::white(0.1 + star.glow * star.strength),
            );
        }

        self.shooting_stars.retain_mut(|streak| {
            surface.stroke_gradient(streak.position, streak.tail(), &STREAK_GRADIENT, STREAK_WIDTH);
            streak.position += streak.velocity;
            streak.life += 1;
            !streak.is_expired()
        });
    }

    /// Draw the current state at `elapsed_ms` without advancing anything.
    pub fn draw<S: Surface>(&self, elapsed_ms: u64, surface: &mut S) {
        surface.clear(self.viewport);
        if self.viewport.is_empty() {
            return;
        }

        let time = self.time(elapsed_ms);
        for star in &self.stars {
            let glow = match self.pointer {
                Some(pointer) => {
                    glow_intensity(pointer.distance(star.position), self.settings.glow_radius)
                }
                None => 0.0,
            };
            let radius = (star.base_radius + glow) * twinkle(time, star.twinkle_phase);
            surface.fill_circle(star.position, radius, Rgba::white(0.1 + glow * star.strength));
        }
        for streak in &self.shooting_stars {
            surface.stroke_gradient(streak.position, streak.tail(), &STREAK_GRADIENT, STREAK_WIDTH);
        }
    }

    /// Twinkle time parameter for `elapsed_ms`.
    fn time(&self, elapsed_ms: u64) -> f64 {
        elapsed_ms as f64 * self.settings.twinkle_rate as f64
    }
}
