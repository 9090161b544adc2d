use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stderr;
use tracing::info;

use crate::clock::{Clock, TokioClock};
use crate::game::{GameConfig, GameEngine, GameState, StepInfo};
use crate::input::{InputEvent, InputSource, TerminalInput};
use crate::render::{Renderer, TerminalRenderer, draw_frame};

const WINDOW_TITLE: &str = "Snake";

/// Keyboard-controlled game: owns the simulation and every collaborator it drives
pub struct HumanMode<R, I, C> {
    engine: GameEngine,
    state: GameState,
    renderer: R,
    input: I,
    clock: C,
    should_quit: bool,
}

impl<R: Renderer, I: InputSource, C: Clock> HumanMode<R, I, C> {
    pub fn new(mut engine: GameEngine, renderer: R, input: I, clock: C) -> Self {
        let state = engine.reset();

        Self {
            engine,
            state,
            renderer,
            input,
            clock,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Play until the player quits
    pub async fn run(&mut self) -> Result<()> {
        let palette = self.engine.config().palette;
        self.renderer.clear(palette.background);
        draw_frame(&mut self.renderer, &self.state, &StepInfo::default(), &palette)?;

        while !self.should_quit {
            self.clock.tick().await;
            self.tick()?;
        }

        info!(ticks = self.state.ticks, length = self.state.snake.length(), "player quit");
        Ok(())
    }

    /// One frame: read input, advance the game, draw it.
    ///
    /// Returns `None` without touching the game once a quit was read.
    pub fn tick(&mut self) -> Result<Option<StepInfo>> {
        while let Some(event) = self.input.next_event()? {
            match event {
                InputEvent::KeyDown(direction) => self.state.snake.request_direction(direction),
                InputEvent::Quit => {
                    self.should_quit = true;
                    return Ok(None);
                }
            }
        }

        let info = self.engine.step(&mut self.state);
        let palette = self.engine.config().palette;
        draw_frame(&mut self.renderer, &self.state, &info, &palette)?;

        Ok(Some(info))
    }
}

/// Run the game in the terminal until the player quits
pub async fn play(config: GameConfig, seed: Option<u64>) -> Result<()> {
    let engine = match seed {
        Some(seed) => GameEngine::with_seed(config.clone(), seed),
        None => GameEngine::new(config.clone()),
    };
    info!(
        grid_width = config.grid_width(),
        grid_height = config.grid_height(),
        ticks_per_second = config.ticks_per_second,
        seed,
        "starting game"
    );

    enable_raw_mode().context("Failed to enable raw mode")?;
    let result = run_in_terminal(engine, &config).await;
    cleanup_terminal();

    result
}

async fn run_in_terminal(engine: GameEngine, config: &GameConfig) -> Result<()> {
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen, SetTitle(WINDOW_TITLE))
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;

    let renderer = TerminalRenderer::new(
        terminal,
        engine.grid(),
        config.palette.background,
        config.palette.border,
    );
    let clock = TokioClock::new(config.ticks_per_second);
    let mut mode = HumanMode::new(engine, renderer, TerminalInput::new(), clock);
    mode.run().await
}

fn cleanup_terminal() {
    if let Err(err) = disable_raw_mode() {
        tracing::error!(?err, "failed to disable raw mode");
    }
    let mut stderr = stderr();
    if let Err(err) = execute!(stderr, LeaveAlternateScreen, Show) {
        tracing::error!(?err, "failed to leave alternate screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction, Positioned};
    use crate::render::{Canvas, Paint};
    use std::collections::VecDeque;

    /// Input queued up front, handed out one tick at a time
    struct ScriptedInput {
        ticks: VecDeque<Vec<InputEvent>>,
        pending: VecDeque<InputEvent>,
    }

    impl ScriptedInput {
        fn new(ticks: Vec<Vec<InputEvent>>) -> Self {
            Self {
                ticks: ticks.into(),
                pending: VecDeque::new(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn next_event(&mut self) -> Result<Option<InputEvent>> {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }
            // end of this tick's batch; load the next one for the following tick
            if let Some(batch) = self.ticks.pop_front() {
                self.pending = batch.into();
            }
            Ok(None)
        }
    }

    #[derive(Default)]
    struct CountingClock {
        ticks: usize,
    }

    impl Clock for CountingClock {
        async fn tick(&mut self) {
            self.ticks += 1;
        }
    }

    fn mode(script: Vec<Vec<InputEvent>>) -> HumanMode<Canvas, ScriptedInput, CountingClock> {
        let config = GameConfig::default();
        let engine = GameEngine::with_seed(config.clone(), 21);
        let canvas = Canvas::new(engine.grid(), config.palette.background);
        let input = ScriptedInput::new(script);
        let mut mode = HumanMode::new(engine, canvas, input, CountingClock::default());
        mode.state.apple.place(Cell::new(0, 0));
        mode.state.stone.place(Cell::new(0, 1));
        mode
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode(Vec::new());
        assert_eq!(mode.state().snake.head(), Cell::new(16, 12));
        assert_eq!(mode.state().ticks, 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_tick_steps_and_draws() {
        // the first poll primes the script, so the turn lands on the second tick
        let mut mode = mode(vec![vec![InputEvent::KeyDown(Direction::Down)]]);

        let info = mode.tick().unwrap();
        assert_eq!(info, Some(StepInfo::default()));
        assert_eq!(mode.state().snake.head(), Cell::new(17, 12));

        mode.tick().unwrap();
        assert_eq!(mode.state().snake.head(), Cell::new(17, 13));
        assert_eq!(mode.state().ticks, 2);

        let palette = GameConfig::default().palette;
        let canvas = mode.renderer();
        assert_eq!(canvas.frames_presented(), 2);
        assert_eq!(
            canvas.paint_at(Cell::new(17, 13)),
            Some(Paint::new(palette.snake, palette.border))
        );
        assert_eq!(canvas.paint_at(Cell::new(17, 12)), Some(Paint::blank(palette.background)));
        assert_eq!(
            canvas.paint_at(mode.state().apple.position()),
            Some(Paint::new(palette.apple, palette.border))
        );
    }

    #[test]
    fn test_quit_skips_the_step() {
        let mut mode = mode(vec![vec![
            InputEvent::KeyDown(Direction::Up),
            InputEvent::Quit,
        ]]);

        assert!(mode.tick().unwrap().is_some());
        assert_eq!(mode.tick().unwrap(), None);
        assert!(mode.should_quit);
        assert_eq!(mode.state().ticks, 1);
        assert_eq!(mode.state().snake.head(), Cell::new(17, 12));
    }

    #[tokio::test]
    async fn test_run_until_quit() {
        let mut mode = mode(vec![
            vec![InputEvent::KeyDown(Direction::Up)],
            vec![],
            vec![InputEvent::Quit],
        ]);

        mode.run().await.unwrap();

        // ticks: prime, turn up, nothing, quit
        assert_eq!(mode.clock.ticks, 4);
        assert_eq!(mode.state().ticks, 3);
        assert_eq!(mode.state().snake.head(), Cell::new(17, 10));
        // initial draw plus one per simulated tick
        assert_eq!(mode.renderer().frames_presented(), 4);
    }
}
