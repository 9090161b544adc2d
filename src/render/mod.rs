//! Drawing the board.
//!
//! The game only talks to a [`Renderer`]: it paints whole cells, clears the board
//! after a reset and presents once per tick. [`Canvas`] keeps those paints in
//! memory; [`TerminalRenderer`] puts a canvas on screen with ratatui.

pub mod canvas;
pub mod renderer;

use anyhow::Result;

use crate::game::{Cell, GameState, Palette, Positioned, Rgb, StepInfo};

pub use canvas::{Canvas, Paint};
pub use renderer::TerminalRenderer;

pub trait Renderer {
    /// Paint one grid cell with a fill and an outline color
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb);
    /// Repaint the whole board with the background color
    fn clear(&mut self, background: Rgb);
    /// Show everything painted since the last call
    fn present(&mut self) -> Result<()>;
}

/// Draw one tick's result.
///
/// The board is only cleared when the snake was reset; otherwise the cell the
/// tail just left is painted over and everything else is drawn on top.
pub fn draw_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
    info: &StepInfo,
    palette: &Palette,
) -> Result<()> {
    if info.reset.is_some() {
        renderer.clear(palette.background);
    }

    if let Some(vacated) = state.snake.last() {
        renderer.draw_cell(vacated, palette.background, palette.background);
    }

    for &segment in state.snake.positions() {
        renderer.draw_cell(segment, palette.snake, palette.border);
    }
    draw_item(renderer, &state.apple, palette.border);
    draw_item(renderer, &state.stone, palette.border);

    renderer.present()
}

fn draw_item<R: Renderer + ?Sized>(renderer: &mut R, item: &dyn Positioned, border: Rgb) {
    renderer.draw_cell(item.position(), item.color(), border);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, GameEngine, ResetCause, Snake};

    fn setup() -> (GameState, Canvas, Palette) {
        let config = GameConfig::with_grid(8, 6);
        let mut engine = GameEngine::with_seed(config.clone(), 5);
        let mut state = engine.reset();
        state.apple.place(Cell::new(0, 0));
        state.stone.place(Cell::new(7, 5));
        let canvas = Canvas::new(state.grid, config.palette.background);
        (state, canvas, config.palette)
    }

    #[test]
    fn test_draws_every_item() {
        let (state, mut canvas, palette) = setup();

        draw_frame(&mut canvas, &state, &StepInfo::default(), &palette).unwrap();

        let snake = Paint::new(palette.snake, palette.border);
        assert_eq!(canvas.paint_at(state.snake.head()), Some(snake));
        assert_eq!(
            canvas.paint_at(Cell::new(0, 0)),
            Some(Paint::new(palette.apple, palette.border))
        );
        assert_eq!(
            canvas.paint_at(Cell::new(7, 5)),
            Some(Paint::new(palette.stone, palette.border))
        );
        assert_eq!(canvas.frames_presented(), 1);
    }

    #[test]
    fn test_vacated_tail_is_erased() {
        let (mut state, mut canvas, palette) = setup();
        let start = state.snake.head();
        draw_frame(&mut canvas, &state, &StepInfo::default(), &palette).unwrap();

        let mut rng = rand::thread_rng();
        state.snake.move_forward(&state.grid, &mut rng);
        draw_frame(&mut canvas, &state, &StepInfo::default(), &palette).unwrap();

        assert_eq!(state.snake.last(), Some(start));
        assert_eq!(canvas.paint_at(start), Some(Paint::blank(palette.background)));
        assert_eq!(
            canvas.paint_at(state.snake.head()),
            Some(Paint::new(palette.snake, palette.border))
        );
    }

    #[test]
    fn test_clear_only_after_reset() {
        let (mut state, mut canvas, palette) = setup();
        let stray = Cell::new(3, 1);
        canvas.draw_cell(stray, palette.snake, palette.border);

        draw_frame(&mut canvas, &state, &StepInfo::default(), &palette).unwrap();
        assert_eq!(
            canvas.paint_at(stray),
            Some(Paint::new(palette.snake, palette.border))
        );

        state.snake = Snake::new(state.grid.center(), Direction::Up);
        let info = StepInfo {
            ate_apple: false,
            reset: Some(ResetCause::SelfCollision),
        };
        draw_frame(&mut canvas, &state, &info, &palette).unwrap();
        assert_eq!(canvas.paint_at(stray), Some(Paint::blank(palette.background)));
        assert_eq!(
            canvas.paint_at(state.grid.center()),
            Some(Paint::new(palette.snake, palette.border))
        );
    }
}
