//! Core types shared by the stardrift crates.
//!
//! Geometry lives in device pixels: the terminal is treated as a viewport of
//! `columns * cell_width` by `rows * cell_height` virtual pixels so that the
//! effect constants read the same as they would on a browser canvas.

mod geometry;
mod icon;
mod settings;

pub use geometry::{CellMetrics, Vec2, Viewport};
pub use icon::Icon;
pub use settings::{FloaterSettings, StarfieldSettings};
