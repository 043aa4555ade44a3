//! Terminal renderer: a [`Canvas`] painting into a ratatui [`Terminal`].
//!
//! Draw calls are queued and painted in one `Terminal::draw` on
//! `present`, so ratatui only flushes the cells that changed.

use crate::glyphs::Glyph;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::Paragraph,
};
use tracing::instrument;
use triplet::{Canvas, CellGeometry, CellRect, Position, TextSlot};

/// One queued draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// The grid lines.
    BoardLines,
    /// A glyph centered in a cell.
    Mark(Position, Glyph),
    /// A centered line of text.
    Text(String, TextSlot),
}

/// Renders game frames onto a terminal.
pub struct TerminalCanvas<B: Backend> {
    terminal: Terminal<B>,
    geometry: CellGeometry,
    ops: Vec<DrawOp>,
}

impl<B: Backend> TerminalCanvas<B> {
    /// Creates a canvas laying the grid out with `geometry`.
    pub fn new(terminal: Terminal<B>, geometry: CellGeometry) -> Self {
        Self {
            terminal,
            geometry,
            ops: Vec::new(),
        }
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The underlying terminal, mutably (for restoring it on exit).
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Calls queued since the last `present`.
    pub fn pending(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl<B: Backend> Canvas for TerminalCanvas<B> {
    type Sprite = Glyph;
    type Error = B::Error;

    fn draw_board_lines(&mut self) {
        self.ops.push(DrawOp::BoardLines);
    }

    fn draw_mark(&mut self, position: Position, sprite: &Glyph) {
        self.ops.push(DrawOp::Mark(position, sprite.clone()));
    }

    fn draw_text(&mut self, content: &str, slot: TextSlot) {
        self.ops.push(DrawOp::Text(content.to_string(), slot));
    }

    #[instrument(skip_all, fields(ops = self.ops.len()))]
    fn present(&mut self) -> Result<(), B::Error> {
        let geometry = self.geometry;
        let ops = &self.ops;
        self.terminal.draw(|frame| paint(frame, &geometry, ops))?;
        self.ops.clear();
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Painting
// ─────────────────────────────────────────────────────────────

fn paint(frame: &mut Frame, geometry: &CellGeometry, ops: &[DrawOp]) {
    let area = frame.area();
    for op in ops {
        match op {
            DrawOp::BoardLines => paint_lines(frame.buffer_mut(), geometry),
            DrawOp::Mark(position, glyph) => {
                let rect = glyph_rect(geometry.cell(*position), glyph).intersection(area);
                let lines: Vec<Line> = glyph.lines().iter().map(|l| Line::from(l.as_str())).collect();
                let paragraph =
                    Paragraph::new(Text::from(lines)).style(Style::default().add_modifier(Modifier::BOLD));
                frame.render_widget(paragraph, rect);
            }
            DrawOp::Text(content, slot) => {
                let row = Rect::new(area.x, area.y.saturating_add(slot.row(area.height)), area.width, 1);
                let line = Line::from(content.as_str()).style(slot_style(*slot)).centered();
                frame.render_widget(line, row.intersection(area));
            }
        }
    }
}

/// Two horizontal and two vertical lines on the internal cell boundaries.
fn paint_lines(buf: &mut Buffer, geometry: &CellGeometry) {
    let bounds = geometry.bounds();
    let right = bounds.x.saturating_add(bounds.width);
    let bottom = bounds.y.saturating_add(bounds.height);
    let columns: Vec<u16> = (1..3u16)
        .map(|k| bounds.x.saturating_add(geometry.cell_width.saturating_mul(k)))
        .collect();
    let rows: Vec<u16> = (1..3u16)
        .map(|k| bounds.y.saturating_add(geometry.cell_height.saturating_mul(k)))
        .collect();

    for &y in &rows {
        for x in bounds.x..right {
            let symbol = if columns.contains(&x) { "┼" } else { "─" };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol);
            }
        }
    }
    for &x in &columns {
        for y in bounds.y..bottom {
            if rows.contains(&y) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("│");
            }
        }
    }
}

/// Glyph box centered in `cell`, shrunk to the cell if the glyph is bigger.
fn glyph_rect(cell: CellRect, glyph: &Glyph) -> Rect {
    let width = glyph.width().min(cell.width);
    let height = glyph.height().min(cell.height);
    Rect::new(
        cell.x.saturating_add((cell.width - width) / 2),
        cell.y.saturating_add((cell.height - height) / 2),
        width,
        height,
    )
}

fn slot_style(slot: TextSlot) -> Style {
    match slot {
        TextSlot::Banner => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        TextSlot::Headline => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        TextSlot::Hint | TextSlot::Footer => Style::default().fg(Color::DarkGray),
        TextSlot::Status => Style::default(),
    }
}
