use std::{
    io,
    time::{Duration, Instant},
};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
};
use ratatui::{DefaultTerminal, Frame};
use stardrift_background::Backdrop;
use stardrift_config::Config;
use tracing::{debug, info};

use crate::cli::Cli;

mod cli;
mod hero;
mod logging;

/// Event poll timeout while the backdrop is paused.
const IDLE_POLL_MS: u64 = 250;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.write_default_config {
        let config = Config::default();
        let path = match cli.config {
            Some(ref path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        println!("wrote {}", path.display());
        return Ok(());
    }

    let mut config = cli.load_config().wrap_err("loading config")?;
    cli.apply(&mut config);
    let log_file = logging::init_logging(&config.log)?;
    info!(log_file = ?log_file, "starting stardrift");

    let app = App::new(&config);
    let terminal = ratatui::init();
    with_teardown(
        || execute!(io::stdout(), EnableMouseCapture),
        || app.run(terminal),
        || {
            let disabled = execute!(io::stdout(), DisableMouseCapture);
            ratatui::restore();
            disabled
        },
    )
}

/// Run `setup` then `body`, and always run `teardown` afterwards, even when
/// either of them failed. The first error wins.
fn with_teardown<S, B, T>(setup: S, body: B, teardown: T) -> color_eyre::Result<()>
where
    S: FnOnce() -> io::Result<()>,
    B: FnOnce() -> color_eyre::Result<()>,
    T: FnOnce() -> io::Result<()>,
{
    let result = setup().map_err(Into::into).and_then(|()| body());
    let restored = teardown();
    result?;
    restored?;
    Ok(())
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Stars, shooting stars and floaters.
    backdrop: Backdrop,
    /// Origin of the backdrop clock.
    started: Instant,
    /// Banner text.
    title: String,
    tagline: String,
    /// Show the title banner.
    show_banner: bool,
    /// Something changed outside the frame loop and needs a redraw.
    dirty: bool,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> Self {
        let mut backdrop = Backdrop::new(
            config.starfield.clone(),
            config.floaters.clone(),
            config.display.cell_metrics(),
            config.display.frame_interval_ms(),
            config.seed,
        );
        backdrop.set_show_nebula(config.display.show_nebula);

        Self {
            running: false,
            backdrop,
            started: Instant::now(),
            title: config.display.title.clone(),
            tagline: config.display.tagline.clone(),
            show_banner: config.display.show_banner,
            dirty: true,
        }
    }

    /// Milliseconds since the app started.
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.backdrop.resize_cells(size.width, size.height);
        self.backdrop.activate(self.now_ms());

        self.running = true;
        while self.running {
            let ticked = self.backdrop.tick(self.now_ms());
            if ticked || self.dirty {
                terminal.draw(|frame| self.render(frame))?;
                self.dirty = false;
            }
            let timeout = self
                .backdrop
                .time_until_next_frame(self.now_ms())
                .unwrap_or(IDLE_POLL_MS);
            self.handle_crossterm_events(Duration::from_millis(timeout))?;
        }

        self.backdrop.deactivate();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.backdrop.render(frame);
        hero::render_hero(
            frame,
            area,
            &self.title,
            &self.tagline,
            self.show_banner,
            !self.backdrop.is_active(),
        );
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout`, so the next frame is not delayed.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(columns, rows) => {
                    self.backdrop.resize_cells(columns, rows);
                    self.dirty = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.toggle_pause(),
            (_, KeyCode::Char('s')) => {
                self.backdrop.spawn_shooting_star();
            }
            (_, KeyCode::Char('f')) => {
                self.backdrop.spawn_floater();
            }
            (_, KeyCode::Char('n')) => {
                let show = !self.backdrop.show_nebula();
                self.backdrop.set_show_nebula(show);
                self.dirty = true;
            }
            (_, KeyCode::Char('b')) => {
                self.show_banner = !self.show_banner;
                self.dirty = true;
            }
            _ => {}
        }
    }

    /// Pointer moves feed the glow and hover; left clicks reverse floaters.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.backdrop.pointer_moved_to_cell(mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.backdrop.pointer_moved_to_cell(mouse.column, mouse.row);
                if let Some(id) = self.backdrop.click_cell(mouse.column, mouse.row) {
                    debug!(?id, "clicked floater");
                }
            }
            _ => {}
        }
    }

    /// Pause or resume the backdrop.
    fn toggle_pause(&mut self) {
        if self.backdrop.is_active() {
            self.backdrop.deactivate();
        } else {
            self.backdrop.activate(self.now_ms());
        }
        self.dirty = true;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use color_eyre::eyre::eyre;

    use super::*;

    #[test]
    fn test_teardown_runs_when_setup_fails() {
        let ran_body = Cell::new(false);
        let tore_down = Cell::new(false);
        let result = with_teardown(
            || Err(io::Error::other("no mouse")),
            || {
                ran_body.set(true);
                Ok(())
            },
            || {
                tore_down.set(true);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(!ran_body.get());
        assert!(tore_down.get());
    }

    #[test]
    fn test_teardown_runs_when_body_fails() {
        let tore_down = Cell::new(false);
        let result = with_teardown(
            || Ok(()),
            || Err(eyre!("draw failed")),
            || {
                tore_down.set(true);
                Ok(())
            },
        );
        assert_eq!(result.unwrap_err().to_string(), "draw failed");
        assert!(tore_down.get());
    }

    #[test]
    fn test_teardown_error_surfaces() {
        let result = with_teardown(|| Ok(()), || Ok(()), || Err(io::Error::other("restore")));
        assert!(result.is_err());
    }
}
