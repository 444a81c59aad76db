//! Nebula glow behind the stars (stateless, computed from position only).

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use stardrift_core::{CellMetrics, Vec2, Viewport};

use crate::color::{GradientStop, Rgba, sample_gradient};

/// Radius of the solid core of the glow, in pixels.
const CORE_RADIUS: f32 = 100.0;

/// Violet core fading through navy to nothing.
const NEBULA_GRADIENT: [GradientStop; 3] = [
    GradientStop::new(0.0, Rgba::new(128, 0, 255, 0.6)),
    GradientStop::new(0.5, Rgba::new(0, 0, 128, 0.2)),
    GradientStop::new(1.0, Rgba::new(0, 0, 0, 0.0)),
];

/// Page background: dark slate on the left fading to black on the right.
const PAGE_LEFT: (u8, u8, u8) = (17, 24, 39);

/// Page background color at horizontal position `x`.
pub fn page_color(x: f32, viewport: Viewport) -> (u8, u8, u8) {
    let t = if viewport.width > 0.0 {
        (x / viewport.width).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let fade = |c: u8| -> u8 { (c as f32 * (1.0 - t)).round() as u8 };
    (fade(PAGE_LEFT.0), fade(PAGE_LEFT.1), fade(PAGE_LEFT.2))
}

/// Nebula color at `point`: a radial gradient centred on the viewport,
/// reaching transparency at two thirds of the viewport width.
pub fn nebula_color(point: Vec2, viewport: Viewport) -> Rgba {
    let outer = viewport.width / 1.5;
    if viewport.is_empty() || outer <= CORE_RADIUS {
        return Rgba::new(0, 0, 0, 0.0);
    }
    let distance = point.distance(viewport.center());
    let t = ((distance - CORE_RADIUS) / (outer - CORE_RADIUS)).clamp(0.0, 1.0);
    sample_gradient(&NEBULA_GRADIENT, t)
}

/// Widget tinting cell backgrounds with the page gradient and nebula glow.
///
/// Only backgrounds are touched, so it can be rendered over a canvas without
/// hiding the stars.
#[derive(Debug, Clone, Copy)]
pub struct NebulaGlow {
    pub viewport: Viewport,
    pub cells: CellMetrics,
}

impl Widget for NebulaGlow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.viewport.is_empty() {
            return;
        }
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let center = self.cells.cell_center(x - area.x, y - area.y);
                let base = page_color(center.x, self.viewport);
                let (r, g, b) = nebula_color(center, self.viewport).over(base);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}
