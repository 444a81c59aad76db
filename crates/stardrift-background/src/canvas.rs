//! Rendering a recorded [`DrawList`] onto a ratatui braille canvas.

use std::collections::BTreeMap;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Widget,
        canvas::{Canvas, Context, Line as CanvasLine, Points},
    },
};
use stardrift_core::{Vec2, Viewport};

use crate::chars::sprite_frame;
use crate::color::{icon_tint, sample_gradient};
use crate::surface::{DrawCommand, DrawList, SpriteCommand};

/// Radius at which a star spills into the neighbouring braille dots.
const HALO_RADIUS: f32 = 2.5;

/// Pieces a gradient line is split into, each drawn in one color.
const GRADIENT_SEGMENTS: usize = 8;

/// Widget drawing one recorded backdrop frame.
#[derive(Debug, Clone, Copy)]
pub struct BackdropView<'a> {
    list: &'a DrawList,
}

impl<'a> BackdropView<'a> {
    pub fn new(list: &'a DrawList) -> Self {
        Self { list }
    }
}

/// Canvas coordinates grow upward; the surface grows downward.
fn to_canvas(point: Vec2, viewport: Viewport) -> (f64, f64) {
    (point.x as f64, (viewport.height - point.y) as f64)
}

fn paint_circles(ctx: &mut Context, list: &DrawList) {
    let viewport = list.viewport();
    let mut buckets: BTreeMap<(u8, u8, u8), Vec<(f64, f64)>> = BTreeMap::new();

    for command in list.commands() {
        let DrawCommand::Circle {
            center,
            radius,
            color,
        } = command
        else {
            continue;
        };
        let key = color.over((0, 0, 0));
        let points = buckets.entry(key).or_default();
        points.push(to_canvas(*center, viewport));
        if *radius >= HALO_RADIUS {
            let reach = radius * 0.9;
            for offset in [
                Vec2::new(reach, 0.0),
                Vec2::new(-reach, 0.0),
                Vec2::new(0.0, reach),
                Vec2::new(0.0, -reach),
            ] {
                points.push(to_canvas(*center + offset, viewport));
            }
        }
    }

    for ((r, g, b), coords) in &buckets {
        ctx.draw(&Points {
            coords,
            color: Color::Rgb(*r, *g, *b),
        });
    }
}

fn paint_gradients(ctx: &mut Context, list: &DrawList) {
    let viewport = list.viewport();
    for command in list.commands() {
        let DrawCommand::Gradient { from, to, stops, .. } = command else {
            continue;
        };
        for segment in 0..GRADIENT_SEGMENTS {
            let t0 = segment as f32 / GRADIENT_SEGMENTS as f32;
            let t1 = (segment + 1) as f32 / GRADIENT_SEGMENTS as f32;
            let (x1, y1) = to_canvas(from.lerp(*to, t0), viewport);
            let (x2, y2) = to_canvas(from.lerp(*to, t1), viewport);
            let color = sample_gradient(stops, (t0 + t1) / 2.0).to_color();
            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
        }
    }
}

fn paint_sprite(ctx: &mut Context, sprite: &SpriteCommand, viewport: Viewport, area: Rect) {
    let column_px = viewport.width / area.width.max(1) as f32;
    let row_px = viewport.height / area.height.max(1) as f32;
    let art = sprite_frame(sprite.icon, sprite.angle);
    let color = icon_tint(sprite.icon).with_alpha(sprite.opacity).to_color();

    let center = sprite.center();
    let width = art.first().map(|row| row.chars().count()).unwrap_or(0) as f32;
    let left = center.x - width * column_px / 2.0;
    let top = center.y - art.len() as f32 * row_px / 2.0;

    for (i, row) in art.iter().enumerate() {
        let anchor = Vec2::new(left, top + (i as f32 + 0.5) * row_px);
        let (x, y) = to_canvas(anchor, viewport);
        ctx.print(x, y, Line::styled(*row, Style::new().fg(color)));
    }
}

impl Widget for BackdropView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = self.list.viewport();
        if viewport.is_empty() || area.is_empty() {
            return;
        }
        let list = self.list;

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, viewport.width as f64])
            .y_bounds([0.0, viewport.height as f64])
            .paint(|ctx| {
                paint_circles(ctx, list);
                ctx.layer();
                paint_gradients(ctx, list);
                ctx.layer();
                for command in list.commands() {
                    if let DrawCommand::Sprite(sprite) = command {
                        paint_sprite(ctx, sprite, viewport, area);
                    }
                }
            })
            .render(area, buf);
    }
}
