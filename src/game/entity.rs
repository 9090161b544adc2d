//! Single-cell board items: the apple the snake eats and the stone it must avoid.

use rand::Rng;

use super::config::Rgb;
use super::grid::{Cell, Grid, Occupancy};

/// Something that sits on one cell and is drawn in one color
pub trait Positioned {
    fn position(&self) -> Cell;
    fn color(&self) -> Rgb;
}

/// Food; eating it makes the snake one segment longer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    position: Cell,
    color: Rgb,
}

impl Apple {
    pub fn new(position: Cell, color: Rgb) -> Self {
        Self { position, color }
    }

    /// Move to a random cell that none of `excluded` covers and return it
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        rng: &mut R,
        excluded: &[&dyn Occupancy],
    ) -> Cell {
        self.position = grid.random_free_cell(rng, excluded);
        self.position
    }

    pub fn place(&mut self, position: Cell) {
        self.position = position;
    }
}

impl Positioned for Apple {
    fn position(&self) -> Cell {
        self.position
    }

    fn color(&self) -> Rgb {
        self.color
    }
}

impl Occupancy for Apple {
    fn occupies(&self, cell: Cell) -> bool {
        self.position == cell
    }
}

/// Obstacle; hitting it sends the snake back to the start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stone {
    position: Cell,
    color: Rgb,
}

impl Stone {
    pub fn new(position: Cell, color: Rgb) -> Self {
        Self { position, color }
    }

    /// Move to a random cell that none of `excluded` covers and return it
    pub fn relocate<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        rng: &mut R,
        excluded: &[&dyn Occupancy],
    ) -> Cell {
        self.position = grid.random_free_cell(rng, excluded);
        self.position
    }

    pub fn place(&mut self, position: Cell) {
        self.position = position;
    }
}

impl Positioned for Stone {
    fn position(&self) -> Cell {
        self.position
    }

    fn color(&self) -> Rgb {
        self.color
    }
}

impl Occupancy for Stone {
    fn occupies(&self, cell: Cell) -> bool {
        self.position == cell
    }
}
