use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{Canvas, Paint, Renderer};
use crate::game::{Cell, Grid, Rgb};

/// Terminal columns used by one grid cell
const CELL_COLUMNS: u16 = 2;

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// Draws the board as a ratatui paragraph, two columns per cell
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    canvas: Canvas,
    border: Rgb,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, grid: Grid, background: Rgb, border: Rgb) -> Self {
        Self {
            terminal,
            canvas: Canvas::new(grid, background),
            border,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn render_board(canvas: &Canvas, border: Rgb) -> Paragraph<'static> {
        let lines: Vec<Line> = canvas
            .rows()
            .map(|row| {
                let spans: Vec<Span> = row.iter().map(|paint| Self::render_cell(*paint)).collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::from(border)))
                .title(" Snake "),
        )
    }

    fn render_cell(paint: Paint) -> Span<'static> {
        if paint.is_blank() {
            Span::styled("  ", Style::default().bg(paint.fill.into()))
        } else {
            Span::styled(
                "[]",
                Style::default().fg(paint.border.into()).bg(paint.fill.into()),
            )
        }
    }
}

/// Board rectangle centered in `area`, shrunk to fit if the terminal is too small
fn board_area(area: Rect, grid: Grid) -> Rect {
    let columns = u16::try_from(grid.width()).unwrap_or(u16::MAX);
    let rows = u16::try_from(grid.height()).unwrap_or(u16::MAX);
    let width = columns
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2)
        .min(area.width);
    let height = rows.saturating_add(2).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb) {
        self.canvas.draw_cell(cell, fill, border);
    }

    fn clear(&mut self, background: Rgb) {
        self.canvas.clear(background);
    }

    fn present(&mut self) -> Result<()> {
        let canvas = &self.canvas;
        let border = self.border;
        self.terminal
            .draw(|frame| {
                let area = board_area(frame.area(), canvas.grid());
                frame.render_widget(Self::render_board(canvas, border), area);
            })
            .context("Failed to draw frame")?;
        self.canvas.present()
    }
}
