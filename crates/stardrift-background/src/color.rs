//! Color utility functions for the backdrop.

use ratatui::style::Color;
use stardrift_core::Icon;

/// An 8-bit RGB color with a floating point alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white at the given alpha.
    pub const fn white(a: f32) -> Self {
        Self::new(255, 255, 255, a)
    }

    /// Same color, different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Alpha-blend over an opaque base color.
    pub fn over(self, base: (u8, u8, u8)) -> (u8, u8, u8) {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| -> u8 {
            (top as f32 * a + bottom as f32 * (1.0 - a)).round() as u8
        };
        (mix(self.r, base.0), mix(self.g, base.1), mix(self.b, base.2))
    }

    /// Terminal color of this color drawn over black.
    pub fn to_color(self) -> Color {
        let (r, g, b) = self.over((0, 0, 0));
        Color::Rgb(r, g, b)
    }

    /// Linear interpolation between two colors, alpha included.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// A color at an offset in `[0, 1]` along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Shooting star streak, head to tail.
pub const STREAK_GRADIENT: [GradientStop; 3] = [
    GradientStop::new(0.0, Rgba::new(255, 255, 255, 0.9)),
    GradientStop::new(0.5, Rgba::new(255, 220, 180, 0.4)),
    GradientStop::new(1.0, Rgba::new(255, 100, 50, 0.1)),
];

/// Sample a gradient at `t`. Stops must be sorted by offset.
///
/// Values before the first stop or after the last take that stop's color;
/// an empty gradient is fully transparent.
pub fn sample_gradient(stops: &[GradientStop], t: f32) -> Rgba {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgba::new(0, 0, 0, 0.0);
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if t <= to.offset {
            let span = to.offset - from.offset;
            let local = if span > 0.0 { (t - from.offset) / span } else { 1.0 };
            return from.color.lerp(to.color, local);
        }
    }
    last.color
}

/// Base tint of a floating icon.
pub fn icon_tint(icon: Icon) -> Rgba {
    match icon {
        Icon::AsteroidOne => Rgba::new(181, 164, 140, 1.0),
        Icon::AsteroidTwo => Rgba::new(150, 140, 130, 1.0),
        Icon::Github => Rgba::new(240, 240, 240, 1.0),
        Icon::Python => Rgba::new(255, 212, 59, 1.0),
        Icon::RLang => Rgba::new(39, 109, 195, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_black() {
        assert_eq!(Rgba::white(1.0).to_color(), Color::Rgb(255, 255, 255));
        assert_eq!(Rgba::white(0.0).to_color(), Color::Rgb(0, 0, 0));
        assert_eq!(Rgba::white(0.5).over((0, 0, 0)), (128, 128, 128));
        assert_eq!(Rgba::white(2.0).over((10, 10, 10)), (255, 255, 255));
    }

    #[test]
    fn test_sample_gradient_endpoints() {
        assert_eq!(sample_gradient(&STREAK_GRADIENT, -1.0), STREAK_GRADIENT[0].color);
        assert_eq!(sample_gradient(&STREAK_GRADIENT, 0.5), STREAK_GRADIENT[1].color);
        assert_eq!(sample_gradient(&STREAK_GRADIENT, 3.0), STREAK_GRADIENT[2].color);
    }

    #[test]
    fn test_sample_gradient_midpoint() {
        let mid = sample_gradient(&STREAK_GRADIENT, 0.25);
        assert_eq!(mid.r, 255);
        assert!(mid.g < 255 && mid.g > 220);
        assert!((mid.a - 0.65).abs() < 1e-4);
    }

    #[test]
    fn test_empty_gradient_is_transparent() {
        assert_eq!(sample_gradient(&[], 0.3).a, 0.0);
    }
}
