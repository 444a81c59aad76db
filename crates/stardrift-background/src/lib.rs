//! Animated backdrop for the stardrift portfolio.
//!
//! Two independent effects share one [`Backdrop`]: a twinkling starfield with
//! pointer glow and shooting stars, and a set of drifting icons that enter
//! from the viewport edges and reverse direction when clicked. Each frame is
//! recorded into a [`DrawList`] and then rendered onto a ratatui canvas.

mod animations;
mod canvas;
mod chars;
mod color;
mod state;
mod surface;
mod timer;

pub use animations::floaters::{
    Edge, Floater, FloaterField, FloaterId, SpawnPoint, spawn_from_edge, spawn_point,
};
pub use animations::nebula::{NebulaGlow, nebula_color, page_color};
pub use animations::starfield::{
    MAX_SHOOTING_STARS, ShootingStar, Star, Starfield, generate_stars, glow_intensity,
    new_shooting_star, twinkle,
};
pub use canvas::BackdropView;
pub use chars::sprite_frame;
pub use color::{GradientStop, Rgba, STREAK_GRADIENT, sample_gradient};
pub use state::Backdrop;
pub use surface::{DrawCommand, DrawList, SpriteCommand, Surface};
pub use timer::{AnimationLoop, FrameTick, IntervalTimer};
