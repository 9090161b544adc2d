//! Toroidal grid math shared by every entity on the board.

use std::collections::VecDeque;

use rand::Rng;

use super::action::Direction;

/// A cell on the game grid, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Anything that covers one or more cells of the board
pub trait Occupancy {
    fn occupies(&self, cell: Cell) -> bool;
}

impl Occupancy for Cell {
    fn occupies(&self, cell: Cell) -> bool {
        *self == cell
    }
}

impl Occupancy for Vec<Cell> {
    fn occupies(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl Occupancy for VecDeque<Cell> {
    fn occupies(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

/// Dimensions of a wrapping grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Sizes beyond `i32::MAX` are clamped to it
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// The cell the snake starts from after every reset
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Step one cell in `direction`, leaving through an edge re-enters at the opposite one
    pub fn wrap(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(
            (cell.x + dx).rem_euclid(self.width),
            (cell.y + dy).rem_euclid(self.height),
        )
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    /// True if any of the occupants covers `cell`
    pub fn occupied(&self, cell: Cell, occupants: &[&dyn Occupancy]) -> bool {
        occupants.iter().any(|occupant| occupant.occupies(cell))
    }

    /// Draw random cells until one is free of every excluded occupant.
    ///
    /// Loops forever on a fully occupied grid; callers keep the board sparse.
    pub fn random_free_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        excluded: &[&dyn Occupancy],
    ) -> Cell {
        loop {
            let candidate = self.random_cell(rng);
            if !self.occupied(candidate, excluded) {
                return candidate;
            }
        }
    }
}
