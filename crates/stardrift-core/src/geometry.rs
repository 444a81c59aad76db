//! Viewport geometry in device pixels.

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

/// Size of one terminal cell in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMetrics {
    /// Cell width in pixels.
    pub cell_width: f32,
    /// Cell height in pixels.
    pub cell_height: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

impl CellMetrics {
    /// Width and height with non-positive values replaced by one pixel.
    fn sanitized(self) -> (f32, f32) {
        let w = if self.cell_width > 0.0 { self.cell_width } else { 1.0 };
        let h = if self.cell_height > 0.0 { self.cell_height } else { 1.0 };
        (w, h)
    }

    /// Pixel coordinate of the centre of the cell at `column`, `row`.
    pub fn cell_center(self, column: u16, row: u16) -> Vec2 {
        let (w, h) = self.sanitized();
        Vec2::new((column as f32 + 0.5) * w, (row as f32 + 0.5) * h)
    }

    /// Viewport covering `columns` x `rows` cells.
    pub fn viewport(self, columns: u16, rows: u16) -> Viewport {
        let (w, h) = self.sanitized();
        Viewport::new(columns as f32 * w, rows as f32 * h)
    }
}

/// The drawable area, in device pixels, with its origin at the top left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport. Negative or NaN sizes collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// True when there is nothing to draw on.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when `point` lies inside the viewport.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }

    /// True when `point` lies strictly inside the viewport grown by `margin`
    /// on every side.
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> bool {
        point.x > -margin
            && point.x < self.width + margin
            && point.y > -margin
            && point.y < self.height + margin
    }

    /// Centre of the viewport.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
