use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    action::Direction,
    config::GameConfig,
    entity::{Apple, Positioned, Stone},
    grid::Grid,
    state::{GameState, Movement, Snake},
};

/// Why the snake went back to a single segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// The head landed on the stone
    Stone,
    /// The head ran into the body
    SelfCollision,
}

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
    /// Set when the snake was reset this step; the board must be cleared
    pub reset: Option<ResetCause>,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine whose apple/stone placement and reset directions replay for a given seed
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let grid = Grid::new(config.grid_width(), config.grid_height());
        Self { config, grid, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Build the starting board: a one-segment snake heading right from the
    /// center, then an apple off the snake, then a stone off both
    pub fn reset(&mut self) -> GameState {
        let palette = self.config.palette;
        let snake = Snake::new(self.grid.center(), Direction::Right);

        let mut apple = Apple::new(snake.head(), palette.apple);
        apple.relocate(&self.grid, &mut self.rng, &[&snake]);

        let mut stone = Stone::new(snake.head(), palette.stone);
        stone.relocate(&self.grid, &mut self.rng, &[&snake, &apple]);

        GameState::new(snake, apple, stone, self.grid)
    }

    /// Execute one tick. Collisions are checked against the head left by the
    /// previous tick's move, apple first, then stone, then the snake moves.
    pub fn step(&mut self, state: &mut GameState) -> StepInfo {
        let mut info = StepInfo::default();
        let GameState {
            snake,
            apple,
            stone,
            grid,
            ticks,
        } = state;

        snake.apply_pending_direction();

        if snake.head() == apple.position() {
            apple.relocate(grid, &mut self.rng, &[&*snake, &*stone]);
            snake.grow();
            info.ate_apple = true;
            debug!(length = snake.length(), apple = ?apple.position(), "apple eaten");
        }

        if snake.head() == stone.position() {
            let reached = snake.length();
            snake.reset(&mut self.rng);
            stone.relocate(grid, &mut self.rng, &[&*snake, &*apple]);
            info.reset = Some(ResetCause::Stone);
            info!(length = reached, stone = ?stone.position(), "snake hit the stone");
        }

        let reached = snake.length();
        if snake.move_forward(grid, &mut self.rng) == Movement::SelfCollision {
            info.reset = Some(ResetCause::SelfCollision);
            info!(length = reached, "snake ran into itself");
        }

        *ticks += 1;
        info
    }
}
