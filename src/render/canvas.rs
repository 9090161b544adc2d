use anyhow::Result;

use super::Renderer;
use crate::game::{Cell, Grid, Rgb};

/// How one cell is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fill: Rgb,
    pub border: Rgb,
}

impl Paint {
    pub fn new(fill: Rgb, border: Rgb) -> Self {
        Self { fill, border }
    }

    /// An empty cell: no outline, just the background
    pub fn blank(background: Rgb) -> Self {
        Self::new(background, background)
    }

    pub fn is_blank(&self) -> bool {
        self.fill == self.border
    }
}

/// In-memory board, one paint per grid cell, row by row
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    grid: Grid,
    cells: Vec<Paint>,
    frames_presented: u64,
}

impl Canvas {
    pub fn new(grid: Grid, background: Rgb) -> Self {
        Self {
            grid,
            cells: vec![Paint::blank(background); grid.width() * grid.height()],
            frames_presented: 0,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Paint of a cell, `None` off the board
    pub fn paint_at(&self, cell: Cell) -> Option<Paint> {
        self.index(cell).map(|index| self.cells[index])
    }

    /// Rows of paints, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Paint]> {
        self.cells.chunks(self.grid.width().max(1))
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.grid
            .contains(cell)
            .then(|| cell.y as usize * self.grid.width() + cell.x as usize)
    }
}

impl Renderer for Canvas {
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = Paint::new(fill, border);
        }
    }

    fn clear(&mut self, background: Rgb) {
        self.cells.fill(Paint::blank(background));
    }

    fn present(&mut self) -> Result<()> {
        self.frames_presented += 1;
        Ok(())
    }
}
