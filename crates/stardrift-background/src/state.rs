//! Backdrop state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::Frame;
use stardrift_core::{CellMetrics, FloaterSettings, StarfieldSettings, Vec2, Viewport};
use tracing::{debug, info};

use crate::animations::floaters::{FloaterField, FloaterId};
use crate::animations::nebula::NebulaGlow;
use crate::animations::starfield::Starfield;
use crate::canvas::BackdropView;
use crate::surface::DrawList;
use crate::timer::{AnimationLoop, IntervalTimer};

/// The animated backdrop: starfield, floaters, their timers and the frame
/// loop, owned by one instance.
///
/// All time is passed in by the caller as milliseconds on a monotonic clock.
#[derive(Debug)]
pub struct Backdrop {
    /// Stars and shooting stars.
    starfield: Starfield,
    /// Drifting icons.
    floaters: FloaterField,
    /// Random source for every spawn decision.
    rng: ChaCha8Rng,
    /// Seed `rng` was created from.
    seed: u64,
    /// Cell size used to map the terminal onto device pixels.
    cells: CellMetrics,
    /// Frame loop handle.
    frame_loop: AnimationLoop,
    /// Timed shooting star attempts.
    shooting_star_timer: IntervalTimer,
    /// Periodic floater spawns.
    floater_timer: IntervalTimer,
    /// Last known pointer position.
    pointer: Option<Vec2>,
    /// Most recently recorded frame.
    surface: DrawList,
    /// Whether the initial floater batch has been spawned.
    populated: bool,
    /// Draw the nebula glow.
    show_nebula: bool,
    /// Frame time of the most recent tick.
    last_elapsed_ms: u64,
}

impl Backdrop {
    /// Create an inactive backdrop with an empty viewport.
    ///
    /// Without a `seed` one is taken from the system clock.
    pub fn new(
        starfield: StarfieldSettings,
        floaters: FloaterSettings,
        cells: CellMetrics,
        frame_interval_ms: u64,
        seed: Option<u64>,
    ) -> Self {
        let seed = seed.unwrap_or_else(clock_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shooting_star_timer = IntervalTimer::new(starfield.shooting_star_interval_ms);
        let floater_timer = IntervalTimer::new(floaters.spawn_interval_ms);
        let viewport = Viewport::default();

        Self {
            starfield: Starfield::new(starfield, viewport, &mut rng),
            floaters: FloaterField::new(floaters, viewport),
            rng,
            seed,
            cells,
            frame_loop: AnimationLoop::new(frame_interval_ms),
            shooting_star_timer,
            floater_timer,
            pointer: None,
            surface: DrawList::new(),
            populated: false,
            show_nebula: true,
            last_elapsed_ms: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn floaters(&self) -> &FloaterField {
        &self.floaters
    }

    pub fn viewport(&self) -> Viewport {
        self.starfield.viewport()
    }

    pub fn cells(&self) -> CellMetrics {
        self.cells
    }

    /// The most recently recorded frame.
    pub fn surface(&self) -> &DrawList {
        &self.surface
    }

    pub fn show_nebula(&self) -> bool {
        self.show_nebula
    }

    pub fn set_show_nebula(&mut self, show: bool) {
        self.show_nebula = show;
    }

    pub fn is_active(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Start the frame loop and arm the timers.
    ///
    /// The first activation also spawns the initial floater batch.
    pub fn activate(&mut self, now_ms: u64) {
        if self.is_active() {
            return;
        }
        self.frame_loop.start(now_ms);
        self.shooting_star_timer.arm(now_ms);
        self.floater_timer.arm(now_ms);
        self.populate();
        info!(seed = self.seed, floaters = self.floaters.len(), "backdrop activated");
    }

    /// Stop the frame loop and cancel the timers. State is kept, so a later
    /// [`Backdrop::activate`] resumes where this left off.
    pub fn deactivate(&mut self) {
        if !self.is_active() {
            return;
        }
        self.frame_loop.stop();
        self.shooting_star_timer.cancel();
        self.floater_timer.cancel();
        info!("backdrop deactivated");
    }

    /// Resize to `viewport`. The star set is regenerated and the recorded
    /// frame is dropped; the next tick draws a fresh one. While inactive the
    /// new stars are drawn once so a paused backdrop still fills the screen.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport() && !self.starfield.stars().is_empty() {
            return;
        }
        self.starfield.resize(viewport, &mut self.rng);
        self.floaters.resize(viewport);
        self.surface.discard();
        debug!(width = viewport.width, height = viewport.height, "backdrop resized");
        if self.is_active() {
            self.populate();
        } else {
            self.starfield.draw(self.last_elapsed_ms, &mut self.surface);
            self.floaters.draw(&mut self.surface, self.pointer);
        }
    }

    /// Spawn the initial floater batch unless it already happened. An empty
    /// viewport spawns nothing and leaves the batch pending.
    fn populate(&mut self) {
        if !self.populated {
            let spawned = self.floaters.spawn_initial(&mut self.rng);
            self.populated = !spawned.is_empty();
        }
    }

    /// Resize to a terminal of `columns` x `rows` cells.
    pub fn resize_cells(&mut self, columns: u16, rows: u16) {
        self.resize(self.cells.viewport(columns, rows));
    }

    /// Record the pointer position. Takes effect on the next frame.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = Some(position);
        self.starfield.set_pointer(position);
    }

    /// Record the pointer at the centre of a terminal cell.
    pub fn pointer_moved_to_cell(&mut self, column: u16, row: u16) {
        self.pointer_moved(self.cells.cell_center(column, row));
    }

    /// Click at `position`: reverses the floater under it, if any.
    pub fn click(&mut self, position: Vec2) -> Option<FloaterId> {
        self.floaters.click(position)
    }

    /// Click at the centre of a terminal cell.
    pub fn click_cell(&mut self, column: u16, row: u16) -> Option<FloaterId> {
        self.click(self.cells.cell_center(column, row))
    }

    /// Try to add a shooting star now.
    pub fn spawn_shooting_star(&mut self) -> bool {
        self.starfield.try_spawn_shooting_star(&mut self.rng)
    }

    /// Add a floater with a random icon now, ignoring the periodic cap.
    pub fn spawn_floater(&mut self) -> Option<FloaterId> {
        self.floaters.spawn_random(&mut self.rng)
    }

    /// Milliseconds until the next frame is due, `None` when inactive.
    pub fn time_until_next_frame(&self, now_ms: u64) -> Option<u64> {
        self.frame_loop.time_until_next_frame(now_ms)
    }

    /// Run due timers and, if a frame is due, advance both effects and record
    /// the frame. Returns true when a new frame was recorded.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.is_active() {
            return false;
        }

        if self.shooting_star_timer.poll(now_ms) {
            self.starfield.try_spawn_shooting_star(&mut self.rng);
        }
        if self.floater_timer.poll(now_ms) {
            self.floaters.spawn_periodic(&mut self.rng);
        }

        let Some(tick) = self.frame_loop.poll(now_ms) else {
            return false;
        };

        self.last_elapsed_ms = tick.elapsed_ms;
        self.starfield.frame(tick.elapsed_ms, &mut self.rng, &mut self.surface);
        self.floaters.step();
        self.floaters.draw(&mut self.surface, self.pointer);
        true
    }

    /// Render the recorded frame to the whole terminal.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(BackdropView::new(&self.surface), area);
        if self.show_nebula {
            frame.render_widget(
                NebulaGlow {
                    viewport: self.viewport(),
                    cells: self.cells,
                },
                area,
            );
        }
    }
}

/// Seed from the system clock.
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    use super::*;
    use crate::animations::nebula::{nebula_color, page_color};
    use crate::surface::DrawCommand;

    fn backdrop() -> Backdrop {
        let starfield = StarfieldSettings {
            star_count: 100,
            ..Default::default()
        };
        let mut backdrop = Backdrop::new(
            starfield,
            FloaterSettings::default(),
            CellMetrics::default(),
            16,
            Some(1234),
        );
        backdrop.resize_cells(100, 40);
        backdrop
    }

    #[test]
    fn test_inactive_backdrop_does_nothing() {
        let mut backdrop = backdrop();
        let recorded = backdrop.surface().clone();
        assert!(!backdrop.tick(0));
        assert_eq!(backdrop.surface(), &recorded);
        assert!(backdrop.floaters().is_empty());
        assert_eq!(backdrop.time_until_next_frame(0), None);
    }

    #[test]
    fn test_activation_spawns_initial_batch_once() {
        let mut backdrop = backdrop();
        backdrop.activate(0);
        assert_eq!(backdrop.floaters().len(), 5);

        backdrop.deactivate();
        backdrop.activate(100);
        assert_eq!(backdrop.floaters().len(), 5);
    }

    #[test]
    fn test_initial_batch_waits_for_a_viewport() {
        let mut backdrop = Backdrop::new(
            StarfieldSettings::default(),
            FloaterSettings::default(),
            CellMetrics::default(),
            16,
            Some(1),
        );
        backdrop.activate(0);
        assert!(backdrop.floaters().is_empty());

        backdrop.resize_cells(80, 24);
        assert_eq!(backdrop.floaters().len(), 5);
        assert_eq!(backdrop.starfield().stars().len(), 2000);
    }

    #[test]
    fn test_first_tick_records_frame() {
        let mut backdrop = backdrop();
        backdrop.activate(0);
        assert!(backdrop.tick(0));

        let circles = backdrop
            .surface()
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        let sprites = backdrop
            .surface()
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite(_)))
            .count();
        assert_eq!(circles, 100);
        assert_eq!(sprites, 5);
        assert!(!backdrop.tick(5), "next frame not yet due");
    }

    #[test]
    fn test_periodic_floater_spawn() {
        let mut backdrop = backdrop();
        backdrop.activate(0);
        backdrop.tick(0);
        let before = backdrop.floaters().len();
        backdrop.tick(2000);
        assert_eq!(backdrop.floaters().len(), before + 1);
    }

    #[test]
    fn test_deactivate_cancels_everything() {
        let mut backdrop = backdrop();
        backdrop.activate(0);
        backdrop.tick(0);
        backdrop.deactivate();

        let floaters = backdrop.floaters().len();
        let streaks = backdrop.starfield().shooting_stars().to_vec();
        assert!(!backdrop.tick(60_000));
        assert_eq!(backdrop.floaters().len(), floaters);
        assert_eq!(backdrop.starfield().shooting_stars(), streaks.as_slice());
        assert_eq!(backdrop.time_until_next_frame(60_000), None);
    }

    #[test]
    fn test_resize_discards_recorded_frame() {
        let mut backdrop = backdrop();
        backdrop.activate(0);
        backdrop.tick(0);
        assert!(!backdrop.surface().is_empty());

        backdrop.resize_cells(50, 20);
        assert!(backdrop.surface().is_empty());
        assert_eq!(backdrop.viewport(), Viewport::new(400.0, 320.0));
        assert_eq!(backdrop.starfield().stars().len(), 100);
    }

    #[test]
    fn test_pause_keeps_time_moving_forward() {
        let mut backdrop = backdrop();
        backdrop.activate(0);
        backdrop.tick(0);
        backdrop.tick(10_000);
        assert_eq!(backdrop.last_elapsed_ms, 10_000);

        backdrop.deactivate();
        backdrop.activate(12_000);
        assert!(backdrop.tick(12_000));
        assert_eq!(backdrop.last_elapsed_ms, 12_000);
    }

    #[test]
    fn test_resize_while_paused_redraws() {
        let mut backdrop = backdrop();
        backdrop.activate(0);
        backdrop.tick(0);
        backdrop.deactivate();

        backdrop.resize_cells(50, 20);
        let viewport = Viewport::new(400.0, 320.0);
        assert_eq!(backdrop.surface().viewport(), viewport);
        let circles = backdrop
            .surface()
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, 100);
    }

    #[test]
    fn test_nebula_follows_resize_while_paused() {
        let mut backdrop = backdrop();
        backdrop.activate(0);
        backdrop.tick(0);
        backdrop.deactivate();
        backdrop.resize_cells(40, 10);

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| backdrop.render(frame)).unwrap();

        let viewport = backdrop.viewport();
        let center = backdrop.cells().cell_center(20, 5);
        let (r, g, b) = nebula_color(center, viewport).over(page_color(center.x, viewport));
        assert_eq!(terminal.backend().buffer()[(20, 5)].bg, Color::Rgb(r, g, b));
    }

    #[test]
    fn test_same_seed_same_backdrop() {
        let mut a = backdrop();
        let mut b = backdrop();
        a.activate(0);
        b.activate(0);
        for now in (0..1000).step_by(16) {
            a.tick(now);
            b.tick(now);
        }
        assert_eq!(a.surface().commands(), b.surface().commands());
    }

    #[test]
    fn test_click_hits_floater_under_point() {
        let mut backdrop = backdrop();
        backdrop.activate(0);
        let target = backdrop.floaters().floaters()[0].clone();
        let inside = target.position + Vec2::splat(50.0);

        // Other floaters could overlap; only assert on whichever one was hit.
        let hit = backdrop.click(inside).expect("a floater is under the point");
        let floater = backdrop.floaters().get(hit).expect("still live");
        assert!(floater.contains(inside, 100.0));
        assert_eq!(backdrop.click(Vec2::new(-5000.0, -5000.0)), None);
    }
}
