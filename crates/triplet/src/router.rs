//! Maps raw input events onto engine commands.
//!
//! The router owns the board's on-screen geometry so that hit testing and
//! drawing agree on where each cell is.

use crate::{Command, Position};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::convert::Infallible;
use tracing::{debug, instrument};

/// Key identity as seen by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Any other printable character.
    Char(char),
    /// Everything else.
    Other,
}

/// A raw input event from the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// The user asked to leave (window close, Esc, Ctrl-C).
    Quit,
    /// A key went down.
    KeyPress(Key),
    /// The primary pointer button went down at `(x, y)`.
    PointerDown {
        /// Column, in the same units as [`CellGeometry`].
        x: u16,
        /// Row, in the same units as [`CellGeometry`].
        y: u16,
    },
}

/// Where input events come from.
///
/// Events are pulled lazily. `Ok(None)` means nothing more is pending for
/// this frame; the next frame polls again.
pub trait InputSource {
    /// Failure reading the underlying device.
    type Error;

    /// Next pending event, if any.
    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}

/// A fixed queue of events, drained front to back. Never fails.
impl InputSource for VecDeque<InputEvent> {
    type Error = Infallible;

    fn next_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.pop_front())
    }
}

/// One cell's rectangle on screen.
///
/// `x`/`y` are inclusive; `x + width` and `y + height` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Left edge.
    pub x: u16,
    /// Top edge.
    pub y: u16,
    /// Width.
    pub width: u16,
    /// Height.
    pub height: u16,
}

impl CellRect {
    /// Hit test, left/top inclusive and right/bottom exclusive.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        let (x, y) = (u32::from(x), u32::from(y));
        let (left, top) = (u32::from(self.x), u32::from(self.y));
        x >= left
            && x < left + u32::from(self.width)
            && y >= top
            && y < top + u32::from(self.height)
    }

    /// Center point, rounded toward the top-left.
    pub fn center(&self) -> (u16, u16) {
        (
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }
}

/// Placement of the 3x3 grid: top-left corner and uniform cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellGeometry {
    /// Left edge of the grid.
    #[serde(default = "default_left")]
    pub left: u16,
    /// Top edge of the grid.
    #[serde(default = "default_top")]
    pub top: u16,
    /// Width of one cell.
    #[serde(default = "default_cell_width")]
    pub cell_width: u16,
    /// Height of one cell.
    #[serde(default = "default_cell_height")]
    pub cell_height: u16,
}

fn default_left() -> u16 {
    4
}

fn default_top() -> u16 {
    3
}

fn default_cell_width() -> u16 {
    13
}

fn default_cell_height() -> u16 {
    5
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            left: default_left(),
            top: default_top(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
        }
    }
}

impl CellGeometry {
    /// Rectangle of the cell at `position`.
    pub fn cell(&self, position: Position) -> CellRect {
        CellRect {
            x: self
                .left
                .saturating_add(self.cell_width.saturating_mul(position.col() as u16)),
            y: self
                .top
                .saturating_add(self.cell_height.saturating_mul(position.row() as u16)),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Rectangle covering all nine cells.
    pub fn bounds(&self) -> CellRect {
        CellRect {
            x: self.left,
            y: self.top,
            width: self.cell_width.saturating_mul(3),
            height: self.cell_height.saturating_mul(3),
        }
    }

    /// Cell containing `(x, y)`, if any.
    pub fn hit(&self, x: u16, y: u16) -> Option<Position> {
        if self.cell_width == 0 || self.cell_height == 0 || !self.bounds().contains(x, y) {
            return None;
        }
        let col = usize::from((x - self.left) / self.cell_width);
        let row = usize::from((y - self.top) / self.cell_height);
        Position::from_row_col(row, col)
    }
}

/// Translates [`InputEvent`]s into [`Command`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputRouter {
    geometry: CellGeometry,
}

impl InputRouter {
    /// Creates a router over `geometry`.
    pub fn new(geometry: CellGeometry) -> Self {
        Self { geometry }
    }

    /// The grid geometry used for hit testing.
    pub fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }

    /// Routes one event. Events with no meaning return `None`.
    ///
    /// Phase filtering happens in the state machine, not here: a click on a
    /// cell always yields `Select`, whatever screen is showing.
    #[instrument(skip(self))]
    pub fn route(&self, event: InputEvent) -> Option<Command> {
        let command = match event {
            InputEvent::Quit => Some(Command::Quit),
            InputEvent::KeyPress(Key::Space) => Some(Command::Proceed),
            InputEvent::KeyPress(_) => None,
            InputEvent::PointerDown { x, y } => self.geometry.hit(x, y).map(Command::Select),
        };
        debug!(?command, "Routed input");
        command
    }
}
