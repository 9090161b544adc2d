use std::collections::VecDeque;

use rand::Rng;

use super::action::Direction;
use super::entity::{Apple, Stone};
use super::grid::{Cell, Grid, Occupancy};

/// What a call to [`Snake::move_forward`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// The head stepped onto a free cell
    Advanced,
    /// The head would have entered the body, so the snake was reset instead
    SelfCollision,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    positions: VecDeque<Cell>,
    /// Number of segments the body grows (or shrinks) towards
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
    /// Cell vacated by the tail on the latest move, still painted on screen
    last: Option<Cell>,
    /// Where the snake restarts after a reset
    start: Cell,
}

impl Snake {
    /// Create a one-segment snake at `start`
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self::with_body(start, [start], direction)
    }

    /// Create a snake with an explicit body, head first; its length target is the body size
    pub fn with_body(
        start: Cell,
        body: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Self {
        let mut positions: VecDeque<Cell> = body.into_iter().collect();
        if positions.is_empty() {
            positions.push_back(start);
        }

        Self {
            length: positions.len(),
            positions,
            direction,
            next_direction: None,
            last: None,
            start,
        }
    }

    /// Queue a turn for the next tick; a 180-degree turn is ignored
    pub fn request_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.next_direction = Some(direction);
        }
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    /// Advance one cell in the current direction.
    ///
    /// The new head is checked against the whole body, including the tail
    /// segment that this move would drop.
    pub fn move_forward<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) -> Movement {
        let new_head = grid.wrap(self.head(), self.direction);

        if self.positions.contains(&new_head) {
            self.reset(rng);
            return Movement::SelfCollision;
        }

        self.positions.push_front(new_head);
        if self.positions.len() > self.length {
            self.last = self.positions.pop_back();
        }

        Movement::Advanced
    }

    /// Shrink back to a single segment on the start cell, facing a random direction
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.length = 1;
        self.positions.clear();
        self.positions.push_back(self.start);
        self.direction = Direction::random(rng);
        self.next_direction = None;
        self.last = None;
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        // the body is never empty: constructors and reset always leave one segment
        self.positions[0]
    }

    pub fn positions(&self) -> &VecDeque<Cell> {
        &self.positions
    }

    /// Current number of body segments
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Target number of segments
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    pub fn last(&self) -> Option<Cell> {
        self.last
    }

    pub fn start(&self) -> Cell {
        self.start
    }
}

impl Occupancy for Snake {
    fn occupies(&self, cell: Cell) -> bool {
        self.positions.contains(&cell)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub stone: Stone,
    pub grid: Grid,
    /// Ticks simulated so far
    pub ticks: u64,
}

impl GameState {
    pub fn new(snake: Snake, apple: Apple, stone: Stone, grid: Grid) -> Self {
        Self {
            snake,
            apple,
            stone,
            grid,
            ticks: 0,
        }
    }
}
