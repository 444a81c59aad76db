//! Immediate-mode drawing surface.
//!
//! The effects draw through [`Surface`]; [`DrawList`] records the calls so a
//! frame can be built once per tick and rendered as many times as the
//! terminal needs.

use stardrift_core::{Icon, Vec2, Viewport};

use crate::color::{GradientStop, Rgba};

/// A 2D drawing context in device pixels, origin at the top left.
pub trait Surface {
    /// Erase everything and size the surface to `viewport`.
    fn clear(&mut self, viewport: Viewport);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight line whose color follows `stops` from `from` to `to`.
    fn stroke_gradient(&mut self, from: Vec2, to: Vec2, stops: &'static [GradientStop], width: f32);

    /// Draw an icon sprite.
    fn draw_sprite(&mut self, sprite: SpriteCommand);
}

/// A sprite placed in its square box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteCommand {
    /// Top-left corner of the box.
    pub origin: Vec2,
    /// Side of the box.
    pub size: f32,
    /// Rotation in degrees.
    pub angle: f32,
    /// Image to draw.
    pub icon: Icon,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl SpriteCommand {
    /// Centre of the sprite box.
    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::splat(self.size / 2.0)
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Gradient {
        from: Vec2,
        to: Vec2,
        stops: &'static [GradientStop],
        width: f32,
    },
    Sprite(SpriteCommand),
}

/// A [`Surface`] that records drawing calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Size the surface was last cleared to.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Recorded commands in drawing order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop the recorded frame but keep the viewport.
    pub fn discard(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DrawList {
    fn clear(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.commands.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius > 0.0 && color.a > 0.0 {
            self.commands.push(DrawCommand::Circle {
                center,
                radius,
                color,
            });
        }
    }

    fn stroke_gradient(
        &mut self,
        from: Vec2,
        to: Vec2,
        stops: &'static [GradientStop],
        width: f32,
    ) {
        if !stops.is_empty() && width > 0.0 {
            self.commands.push(DrawCommand::Gradient {
                from,
                to,
                stops,
                width,
            });
        }
    }

    fn draw_sprite(&mut self, sprite: SpriteCommand) {
        if sprite.opacity > 0.0 {
            self.commands.push(DrawCommand::Sprite(sprite));
        }
    }
}
