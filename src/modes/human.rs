use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep};

use crate::game::{GameConfig, Referee};
use crate::input::{GestureTracker, InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{CanvasBuffer, Renderer};

/// Terminal columns used to draw one board cell
const COLUMNS_PER_CELL: u32 = 2;

/// Interactive game in the terminal.
///
/// Owns everything a running game needs; input handlers reach the snake only
/// through [`Referee::request_direction_change`].
pub struct HumanMode {
    referee: Referee,
    canvas: CanvasBuffer,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    gestures: GestureTracker,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let referee = Referee::from_config(&config);
        let mut canvas = CanvasBuffer::for_board(referee.board());
        referee.start(&mut canvas);

        Self {
            referee,
            canvas,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            gestures: GestureTracker::new(config.swipe_threshold),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        if let Some(score) = self.metrics.final_score {
            tracing::info!(
                score,
                ticks = self.metrics.ticks,
                food_eaten = self.metrics.food_eaten,
                time = %self.metrics.format_time(),
                "session finished"
            );
        }

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The first tick fires right away; each later one is armed only after the
        // previous tick has finished, using the referee's current interval
        let next_tick = sleep(Duration::ZERO);
        tokio::pin!(next_tick);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick; disabled once the game is over
                () = &mut next_tick, if self.referee.is_running() => {
                    self.update_game();
                    if self.referee.is_running() {
                        next_tick.as_mut().reset(Instant::now() + self.referee.interval());
                    }
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.referee, &self.canvas, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Turn(direction) => {
                        self.referee.request_direction_change(direction);
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                    }
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = self.pointer_pixels(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(_) => self.gestures.start(x, y),
            MouseEventKind::Drag(_) => {
                if let Some(direction) = self.gestures.track(x, y) {
                    tracing::debug!(?direction, "swipe");
                    self.referee.request_direction_change(direction);
                }
            }
            MouseEventKind::Up(_) => self.gestures.cancel(),
            _ => {}
        }
    }

    /// Terminal position to canvas pixels, so swipe thresholds mean the same as on the canvas
    fn pointer_pixels(&self, column: u16, row: u16) -> (f64, f64) {
        let cell_size = self.referee.board().cell_size();
        let x = f64::from(column) * f64::from(cell_size) / f64::from(COLUMNS_PER_CELL);
        let y = f64::from(row) * f64::from(cell_size);
        (x, y)
    }

    fn update_game(&mut self) {
        let outcome = self.referee.tick(&mut self.canvas);
        self.metrics.record_tick(&outcome);
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
