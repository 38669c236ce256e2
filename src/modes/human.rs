use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Action, Direction, GameConfig, GameEngine, Grid, Session};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Renderer, Scene, Surface, TerminalSurface};

/// Interactive play: one async loop owns input, simulation, and drawing.
///
/// Death is not an exit. A collision ends the round, the session is
/// rebuilt in place, and play continues until an explicit quit. A quit
/// arriving in the same tick as a death wins over the reset.
pub struct HumanMode {
    config: GameConfig,
    renderer: Renderer,
    input_handler: InputHandler,
    metrics: GameMetrics,
    pending_direction: Option<Direction>,
    should_quit: bool,
    round_over: bool,
    restart_requested: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            metrics: GameMetrics::new(),
            pending_direction: None,
            should_quit: false,
            round_over: false,
            restart_requested: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let size = terminal.size().context("Failed to read terminal size")?;

        // Header, footer, and grid border take fixed rows/columns; the
        // surface covers what is left.
        let cols = size.width.saturating_sub(4);
        let rows = size.height.saturating_sub(8);
        let mut surface = TerminalSurface::new(cols, rows, self.config.cell_size);

        let (display_width, display_height) = surface.dimensions();
        let grid = Grid::from_display(
            display_width,
            display_height,
            self.config.cell_size,
            self.config.top_margin,
            self.config.bottom_margin,
        );
        info!(
            "playable rectangle {}x{} at ({}, {}), cell {}",
            grid.width(),
            grid.height(),
            grid.origin().x,
            grid.origin().y,
            grid.cell()
        );

        let mut engine = GameEngine::new(self.config.clone(), grid);
        let mut session = engine.new_round();
        let mut scene = Scene::new(self.config.cell_size);

        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(Duration::from_millis(self.config.tick_ms));

        // Render at 30 FPS regardless of the tick rate
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game(&mut engine, &mut session);
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    scene.sync(&mut surface, &session);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &surface, &session, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.end_of_tick(&mut engine, &mut session) {
                break;
            }
        }

        Ok(())
    }

    /// End-of-iteration bookkeeping. Returns true when the loop should
    /// exit; quit wins even when a death landed in the same tick, so
    /// the session is left alone and never rebuilt on the way out.
    ///
    /// A death counts toward the round metrics; a manual restart throws
    /// the round away without recording it.
    fn end_of_tick(&mut self, engine: &mut GameEngine, session: &mut Session) -> bool {
        if self.should_quit {
            info!("quit requested, exiting");
            return true;
        }

        if self.round_over || self.restart_requested {
            if self.round_over {
                self.metrics.on_round_over(session.score.value());
            }
            *session = engine.new_round();
            self.metrics.on_round_start();
            self.pending_direction = None;
            self.round_over = false;
            self.restart_requested = false;
        }

        false
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::GameAction(Action::Move(direction)) => {
                    // Last key within a frame wins
                    self.pending_direction = Some(direction);
                }
                KeyAction::GameAction(Action::Continue) => {}
                KeyAction::Restart => {
                    self.restart_requested = true;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self, engine: &mut GameEngine, session: &mut Session) {
        let action = self
            .pending_direction
            .take()
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        let outcome = engine.step(session, action);

        if outcome.ate_fruit {
            debug!("fruit eaten, score {}", session.score.value());
        }

        if let Some(collision) = outcome.collision {
            info!(
                "round over ({:?}) with score {}",
                collision,
                session.score.value()
            );
            self.round_over = true;
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_last_direction_wins_within_a_frame() {
        let mut mode = HumanMode::new(GameConfig::default());

        mode.handle_event(press(KeyCode::Up));
        mode.handle_event(press(KeyCode::Left));

        assert_eq!(mode.pending_direction, Some(Direction::Left));
    }

    #[test]
    fn test_quit_key_sets_quit_flag() {
        let mut mode = HumanMode::new(GameConfig::default());
        assert!(!mode.should_quit);

        mode.handle_event(press(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_restart_key_requests_a_reset() {
        let mut mode = HumanMode::new(GameConfig::default());

        mode.handle_event(press(KeyCode::Char('r')));
        assert!(mode.restart_requested);
        assert!(!mode.round_over);
        assert!(!mode.should_quit);
    }

    fn test_setup() -> (HumanMode, GameEngine, Session) {
        let config = GameConfig::default();
        let grid = Grid::from_display(500, 500, 50, 0, 0);
        let mut engine = GameEngine::new(config.clone(), grid);
        let session = engine.new_round();
        (HumanMode::new(config), engine, session)
    }

    #[test]
    fn test_quit_wins_over_a_same_tick_death() {
        let (mut mode, mut engine, mut session) = test_setup();
        session.score.increment();
        mode.round_over = true;
        mode.should_quit = true;
        let before = session.clone();

        let exit = mode.end_of_tick(&mut engine, &mut session);

        // The loop exits without rebuilding the session or touching
        // the metrics
        assert!(exit);
        assert_eq!(session, before);
        assert_eq!(mode.metrics.rounds_played, 0);
    }

    #[test]
    fn test_death_rebuilds_the_session_and_records_the_round() {
        let (mut mode, mut engine, mut session) = test_setup();
        session.score.increment();
        session.snake.advance(true);
        mode.round_over = true;
        mode.pending_direction = Some(Direction::Left);

        let exit = mode.end_of_tick(&mut engine, &mut session);

        assert!(!exit);
        assert!(!mode.round_over);
        assert_eq!(session.score.value(), 0);
        assert_eq!(session.snake.len(), 6);
        assert_eq!(session.snake.head(), engine.grid().origin());
        assert_eq!(mode.pending_direction, None);
        assert_eq!(mode.metrics.rounds_played, 1);
        assert_eq!(mode.metrics.high_score, 1);
    }

    #[test]
    fn test_manual_restart_resets_without_recording() {
        let (mut mode, mut engine, mut session) = test_setup();
        session.score.increment();
        mode.restart_requested = true;

        let exit = mode.end_of_tick(&mut engine, &mut session);

        // The round is thrown away: fresh session, no metrics entry
        assert!(!exit);
        assert!(!mode.restart_requested);
        assert_eq!(session.score.value(), 0);
        assert_eq!(mode.metrics.rounds_played, 0);
        assert_eq!(mode.metrics.high_score, 0);
    }

    #[test]
    fn test_death_flags_round_over_and_consumes_input() {
        let config = GameConfig::default();
        let grid = Grid::from_display(500, 500, 50, 0, 0);
        let mut engine = GameEngine::new(config.clone(), grid);
        let mut session = engine.new_round();
        session.fruit.pos = crate::game::Position::new(450, 0);
        let mut mode = HumanMode::new(config);

        mode.pending_direction = Some(Direction::Down);
        // Straight down from the origin: the tenth tick leaves the grid
        for _ in 0..10 {
            mode.update_game(&mut engine, &mut session);
        }

        assert!(mode.round_over);
        assert_eq!(mode.pending_direction, None);
    }
}
