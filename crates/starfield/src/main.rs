mod logging;
mod title;

use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{DefaultTerminal, Frame};
use starfield_background::{Animator, AnimatorSettings, SkyCanvas};
use starfield_config::Config;
use starfield_core::Surface;

use crate::title::Title;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Some(path) = logging::init() {
        log::debug!("logging to {}", path.display());
    }

    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("ignoring config: {err}");
        Config::default()
    });

    let terminal = ratatui::init();
    let result = execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| App::new(&config, &terminal))
        .and_then(|app| app.run(terminal));
    let released = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result?;
    released?;
    Ok(())
}

fn animator_settings(config: &Config) -> AnimatorSettings {
    AnimatorSettings {
        star_count: config.star_count,
        influence_radius: config.influence_radius,
        spawn_interval_min_ms: config.spawn_interval_min_ms,
        spawn_interval_max_ms: config.spawn_interval_max_ms,
        spawn_probability: config.spawn_probability,
        initial_burst: config.initial_burst,
    }
}

/// How long to wait for input before the next frame. Zero once the deadline
/// has passed, which still checks for pending events.
fn poll_timeout(deadline: Instant, now: Instant) -> Duration {
    deadline.saturating_duration_since(now)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// The starfield, absent when the terminal had no area at startup.
    animator: Option<Animator>,
    /// Cell raster the starfield paints onto.
    canvas: SkyCanvas,
    /// Title overlay.
    title: Title,
    /// Time budget for one frame.
    frame_budget: Duration,
    /// Animation start, for the spawn timer clock.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] sized to the terminal.
    pub fn new(config: &Config, terminal: &DefaultTerminal) -> color_eyre::Result<Self> {
        let size = terminal.size()?;
        let canvas = SkyCanvas::new(
            size.width,
            size.height,
            config.cell_width_px,
            config.cell_height_px,
        );
        let animator = Animator::new(
            animator_settings(config),
            canvas.dimensions(),
            StdRng::from_entropy(),
        );

        Ok(Self {
            running: false,
            animator,
            canvas,
            title: Title::new(config.title.as_str(), config.subtitle.as_str()),
            frame_budget: Duration::from_secs_f64(1.0 / config.frame_rate.max(1) as f64),
            started: Instant::now(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.started = Instant::now();
        while self.running {
            let deadline = Instant::now() + self.frame_budget;
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(deadline)?;
        }
        if let Some(animator) = self.animator.as_mut() {
            animator.teardown();
        }
        Ok(())
    }

    /// Advance the starfield by one frame.
    fn tick(&mut self) {
        let now_ms = self.started.elapsed().as_millis() as u64;
        if let Some(animator) = self.animator.as_mut() {
            animator.tick(&mut self.canvas, now_ms);
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        if self.animator.is_some() {
            self.canvas.render(frame);
        }
        self.title.render(frame);
    }

    /// Reads the crossterm events until the frame deadline and updates the
    /// state of [`App`].
    ///
    /// Input is checked at least once per frame, even when the frame ran
    /// over budget.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        let mut timeout = poll_timeout(deadline, Instant::now());
        while self.running && event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
            timeout = poll_timeout(deadline, Instant::now());
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Forward pointer movement to the starfield.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if !matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_)
        ) {
            return;
        }
        let position = self.canvas.cell_center(mouse.column, mouse.row);
        if let Some(animator) = self.animator.as_mut() {
            animator.on_pointer_move(position);
        }
    }

    /// Resize the canvas and tell the starfield about the new surface.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        self.canvas.resize(cols, rows);
        let dimensions = self.canvas.dimensions();
        if let Some(animator) = self.animator.as_mut() {
            animator.on_resize(dimensions);
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
