//! Drifting clickable icons (stateful).
//!
//! Floaters enter from a random viewport edge, drift in a straight line while
//! spinning, and are dropped once they leave the viewport grown by the
//! despawn margin. Clicking one reverses its motion.

use rand::Rng;
use stardrift_core::{FloaterSettings, Icon, Vec2, Viewport};
use tracing::debug;

use crate::surface::{SpriteCommand, Surface};

/// Identity of a floater, unique within one [`FloaterField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FloaterId(pub u64);

/// A viewport edge a floater can enter from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// Where and how a new floater starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub edge: Edge,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// A drifting icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Floater {
    pub id: FloaterId,
    /// Top-left corner of the sprite box, in pixels.
    pub position: Vec2,
    /// Pixels moved per frame.
    pub velocity: Vec2,
    /// Rotation in degrees.
    pub angle: f32,
    /// Degrees rotated per frame.
    pub spin: f32,
    pub icon: Icon,
}

impl Floater {
    /// Reverse direction and rotation in place.
    pub fn invert(&mut self) {
        self.velocity = -self.velocity;
        self.spin = -self.spin;
    }

    /// True when `point` falls inside the sprite box of side `size`.
    pub fn contains(&self, point: Vec2, size: f32) -> bool {
        point.x >= self.position.x
            && point.x < self.position.x + size
            && point.y >= self.position.y
            && point.y < self.position.y + size
    }
}

fn random_speed<R: Rng>(settings: &FloaterSettings, rng: &mut R) -> f32 {
    settings.min_speed + rng.random::<f32>() * (settings.max_speed - settings.min_speed)
}

/// Spawn point just outside `edge`.
///
/// The velocity component normal to the edge points into the viewport; the
/// lateral component is positive.
pub fn spawn_from_edge<R: Rng>(
    edge: Edge,
    viewport: Viewport,
    settings: &FloaterSettings,
    rng: &mut R,
) -> SpawnPoint {
    let offset = settings.edge_offset;
    let (w, h) = (viewport.width, viewport.height);
    let (position, velocity) = match edge {
        Edge::Top => (
            Vec2::new(rng.random::<f32>() * w, -offset),
            Vec2::new(random_speed(settings, rng), random_speed(settings, rng)),
        ),
        Edge::Right => (
            Vec2::new(w + offset, rng.random::<f32>() * h),
            Vec2::new(-random_speed(settings, rng), random_speed(settings, rng)),
        ),
        Edge::Bottom => (
            Vec2::new(rng.random::<f32>() * w, h + offset),
            Vec2::new(random_speed(settings, rng), -random_speed(settings, rng)),
        ),
        Edge::Left => (
            Vec2::new(-offset, rng.random::<f32>() * h),
            Vec2::new(random_speed(settings, rng), random_speed(settings, rng)),
        ),
    };
    SpawnPoint {
        edge,
        position,
        velocity,
    }
}

/// Spawn point on an edge chosen uniformly at random.
pub fn spawn_point<R: Rng>(
    viewport: Viewport,
    settings: &FloaterSettings,
    rng: &mut R,
) -> SpawnPoint {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    spawn_from_edge(edge, viewport, settings, rng)
}

/// Floating icon simulation state.
#[derive(Debug, Clone)]
pub struct FloaterField {
    settings: FloaterSettings,
    viewport: Viewport,
    floaters: Vec<Floater>,
    next_id: u64,
}

impl FloaterField {
    /// Create an empty field sized to `viewport`.
    pub fn new(settings: FloaterSettings, viewport: Viewport) -> Self {
        Self {
            settings,
            viewport,
            floaters: Vec::new(),
            next_id: 0,
        }
    }

    pub fn settings(&self) -> &FloaterSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Live floaters, oldest first.
    pub fn floaters(&self) -> &[Floater] {
        &self.floaters
    }

    pub fn len(&self) -> usize {
        self.floaters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floaters.is_empty()
    }

    pub fn get(&self, id: FloaterId) -> Option<&Floater> {
        self.floaters.iter().find(|f| f.id == id)
    }

    /// Track a new viewport size. Existing floaters keep their positions.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Spawn a floater showing `icon`. Nothing spawns on an empty viewport.
    pub fn spawn<R: Rng>(&mut self, icon: Icon, rng: &mut R) -> Option<FloaterId> {
        if self.viewport.is_empty() {
            return None;
        }
        let start = spawn_point(self.viewport, &self.settings, rng);
        let id = FloaterId(self.next_id);
        self.next_id += 1;
        self.floaters.push(Floater {
            id,
            position: start.position,
            velocity: start.velocity,
            angle: rng.random::<f32>() * 360.0,
            spin: 0.1 + rng.random::<f32>() * 0.05,
            icon,
        });
        debug!(id = id.0, edge = ?start.edge, icon = icon.name(), "spawned floater");
        Some(id)
    }

    /// Spawn the initial batch, cycling through the icon list in order.
    pub fn spawn_initial<R: Rng>(&mut self, rng: &mut R) -> Vec<FloaterId> {
        if self.settings.icons.is_empty() {
            return Vec::new();
        }
        let mut ids = Vec::with_capacity(self.settings.initial_count);
        for i in 0..self.settings.initial_count {
            let icon = self.settings.icons[i % self.settings.icons.len()];
            if let Some(id) = self.spawn(icon, rng) {
                ids.push(id);
            }
        }
        ids
    }

    /// Spawn one floater with an icon chosen uniformly at random.
    pub fn spawn_random<R: Rng>(&mut self, rng: &mut R) -> Option<FloaterId> {
        if self.settings.icons.is_empty() {
            return None;
        }
        let icon = self.settings.icons[rng.random_range(0..self.settings.icons.len())];
        self.spawn(icon, rng)
    }

    /// Periodic spawn: like [`FloaterField::spawn_random`] but skipped at
    /// the configured cap.
    pub fn spawn_periodic<R: Rng>(&mut self, rng: &mut R) -> Option<FloaterId> {
        if self.settings.at_capacity(self.floaters.len()) {
            debug!(live = self.floaters.len(), "floater cap reached, skipping spawn");
            return None;
        }
        self.spawn_random(rng)
    }

    /// Advance every floater one frame and drop those that left the
    /// viewport grown by the despawn margin.
    pub fn step(&mut self) {
        let viewport = self.viewport;
        let margin = self.settings.despawn_margin;
        let before = self.floaters.len();

        self.floaters.retain_mut(|f| {
            f.position += f.velocity;
            f.angle += f.spin;
            viewport.contains_with_margin(f.position, margin)
        });

        let removed = before - self.floaters.len();
        if removed > 0 {
            debug!(removed, live = self.floaters.len(), "floaters left the viewport");
        }
    }

    /// Topmost floater whose sprite box contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<FloaterId> {
        let size = self.settings.sprite_size;
        self.floaters
            .iter()
            .rev()
            .find(|f| f.contains(point, size))
            .map(|f| f.id)
    }

    /// Reverse the motion of floater `id`. Returns false if it is gone.
    pub fn invert(&mut self, id: FloaterId) -> bool {
        match self.floaters.iter_mut().find(|f| f.id == id) {
            Some(floater) => {
                floater.invert();
                true
            }
            None => false,
        }
    }

    /// Reverse the topmost floater under `point`, if any.
    pub fn click(&mut self, point: Vec2) -> Option<FloaterId> {
        let id = self.hit_test(point)?;
        self.invert(id);
        debug!(id = id.0, "floater reversed");
        Some(id)
    }

    /// Draw every floater, highlighting the one under `pointer`.
    pub fn draw<S: Surface>(&self, surface: &mut S, pointer: Option<Vec2>) {
        let hovered = pointer.and_then(|p| self.hit_test(p));
        for floater in &self.floaters {
            let opacity = if Some(floater.id) == hovered {
                self.settings.hover_opacity
            } else {
                self.settings.resting_opacity
            };
            surface.draw_sprite(SpriteCommand {
                origin: floater.position,
                size: self.settings.sprite_size,
                angle: floater.angle,
                icon: floater.icon,
                opacity,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::surface::{DrawCommand, DrawList};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 720.0)
    }

    fn floater_at(position: Vec2, velocity: Vec2) -> Floater {
        Floater {
            id: FloaterId(0),
            position,
            velocity,
            angle: 0.0,
            spin: 0.12,
            icon: Icon::Python,
        }
    }

    #[test]
    fn test_spawn_from_each_edge() {
        let settings = FloaterSettings::default();
        let mut rng = rng();
        for _ in 0..50 {
            let top = spawn_from_edge(Edge::Top, viewport(), &settings, &mut rng);
            assert_eq!(top.position.y, -100.0);
            assert!(top.velocity.y > 0.0);

            let right = spawn_from_edge(Edge::Right, viewport(), &settings, &mut rng);
            assert_eq!(right.position.x, 1380.0);
            assert!(right.velocity.x < 0.0);

            let bottom = spawn_from_edge(Edge::Bottom, viewport(), &settings, &mut rng);
            assert_eq!(bottom.position.y, 820.0);
            assert!(bottom.velocity.y < 0.0);

            let left = spawn_from_edge(Edge::Left, viewport(), &settings, &mut rng);
            assert_eq!(left.position.x, -100.0);
            assert!(left.velocity.x > 0.0);

            for point in [top, right, bottom, left] {
                for speed in [point.velocity.x.abs(), point.velocity.y.abs()] {
                    assert!((0.3..0.7).contains(&speed), "speed {speed}");
                }
            }
        }
    }

    #[test]
    fn test_spawn_point_uses_every_edge() {
        let settings = FloaterSettings::default();
        let mut rng = rng();
        let mut seen = [false; 4];
        for _ in 0..200 {
            let point = spawn_point(viewport(), &settings, &mut rng);
            let index = Edge::ALL.iter().position(|e| *e == point.edge).expect("known edge");
            seen[index] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_invert() {
        let mut floater = floater_at(Vec2::new(5.0, 6.0), Vec2::new(0.4, -0.5));
        floater.invert();
        assert_eq!(floater.velocity, Vec2::new(-0.4, 0.5));
        assert_eq!(floater.spin, -0.12);
        assert_eq!(floater.position, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_initial_batch_cycles_icons() {
        let mut field = FloaterField::new(FloaterSettings::default(), viewport());
        let ids = field.spawn_initial(&mut rng());
        assert_eq!(ids.len(), 5);
        let icons: Vec<Icon> = field.floaters().iter().map(|f| f.icon).collect();
        assert_eq!(icons, Icon::ALL.to_vec());
    }

    #[test]
    fn test_initial_batch_wraps_short_icon_list() {
        let settings = FloaterSettings {
            icons: vec![Icon::Github, Icon::RLang],
            ..Default::default()
        };
        let mut field = FloaterField::new(settings, viewport());
        field.spawn_initial(&mut rng());
        let icons: Vec<Icon> = field.floaters().iter().map(|f| f.icon).collect();
        assert_eq!(
            icons,
            vec![Icon::Github, Icon::RLang, Icon::Github, Icon::RLang, Icon::Github]
        );
    }

    #[test]
    fn test_empty_icon_list_spawns_nothing() {
        let settings = FloaterSettings {
            icons: Vec::new(),
            ..Default::default()
        };
        let mut field = FloaterField::new(settings, viewport());
        let mut rng = rng();
        assert!(field.spawn_initial(&mut rng).is_empty());
        assert_eq!(field.spawn_random(&mut rng), None);
        assert!(field.is_empty());
    }

    #[test]
    fn test_empty_viewport_spawns_nothing() {
        let mut field = FloaterField::new(FloaterSettings::default(), Viewport::default());
        assert!(field.spawn_initial(&mut rng()).is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut field = FloaterField::new(FloaterSettings::default(), viewport());
        let mut rng = rng();
        let ids: Vec<FloaterId> = (0..20)
            .filter_map(|_| field.spawn_random(&mut rng))
            .collect();
        let unique: HashSet<FloaterId> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 20);
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_spin_and_angle_ranges() {
        let mut field = FloaterField::new(FloaterSettings::default(), viewport());
        let mut rng = rng();
        for _ in 0..30 {
            field.spawn_random(&mut rng);
        }
        for floater in field.floaters() {
            assert!((0.0..360.0).contains(&floater.angle));
            assert!((0.1..0.15).contains(&floater.spin));
        }
    }

    #[test]
    fn test_periodic_spawn_respects_cap() {
        let settings = FloaterSettings {
            max_floaters: 3,
            ..Default::default()
        };
        let mut field = FloaterField::new(settings, viewport());
        let mut rng = rng();
        for _ in 0..10 {
            field.spawn_periodic(&mut rng);
        }
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn test_step_moves_and_despawns() {
        let mut field = FloaterField::new(FloaterSettings::default(), viewport());
        field.floaters.push(floater_at(Vec2::new(10.0, 10.0), Vec2::new(0.5, 0.5)));
        field.floaters.push(Floater {
            id: FloaterId(1),
            ..floater_at(Vec2::new(-99.8, 10.0), Vec2::new(-0.5, 0.0))
        });

        field.step();
        assert_eq!(field.len(), 1);
        let floater = &field.floaters()[0];
        assert_eq!(floater.position, Vec2::new(10.5, 10.5));
        assert!((floater.angle - 0.12).abs() < 1e-6);
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut field = FloaterField::new(FloaterSettings::default(), viewport());
        field.floaters.push(floater_at(Vec2::new(0.0, 0.0), Vec2::ONE));
        field.floaters.push(Floater {
            id: FloaterId(1),
            ..floater_at(Vec2::new(50.0, 50.0), Vec2::ONE)
        });

        assert_eq!(field.hit_test(Vec2::new(75.0, 75.0)), Some(FloaterId(1)));
        assert_eq!(field.hit_test(Vec2::new(25.0, 25.0)), Some(FloaterId(0)));
        assert_eq!(field.hit_test(Vec2::new(200.0, 200.0)), None);
    }

    #[test]
    fn test_click_reverses_only_the_hit_floater() {
        let mut field = FloaterField::new(FloaterSettings::default(), viewport());
        field.floaters.push(floater_at(Vec2::new(0.0, 0.0), Vec2::new(0.3, 0.4)));
        field.floaters.push(Floater {
            id: FloaterId(1),
            ..floater_at(Vec2::new(400.0, 400.0), Vec2::new(0.5, 0.6))
        });

        assert_eq!(field.click(Vec2::new(10.0, 10.0)), Some(FloaterId(0)));
        assert_eq!(field.floaters()[0].velocity, Vec2::new(-0.3, -0.4));
        assert_eq!(field.floaters()[1].velocity, Vec2::new(0.5, 0.6));
        assert_eq!(field.click(Vec2::new(1000.0, 10.0)), None);
        assert!(!field.invert(FloaterId(99)));
    }

    #[test]
    fn test_draw_highlights_hovered() {
        let mut field = FloaterField::new(FloaterSettings::default(), viewport());
        field.floaters.push(floater_at(Vec2::new(0.0, 0.0), Vec2::ONE));
        field.floaters.push(Floater {
            id: FloaterId(1),
            ..floater_at(Vec2::new(300.0, 300.0), Vec2::ONE)
        });

        let mut surface = DrawList::new();
        field.draw(&mut surface, Some(Vec2::new(310.0, 310.0)));
        let opacities: Vec<f32> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite(sprite) => Some(sprite.opacity),
                _ => None,
            })
            .collect();
        assert_eq!(opacities, vec![0.4, 0.8]);
    }
}
