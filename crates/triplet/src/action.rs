//! Commands the machine accepts and the moves it records.

use crate::{Mark, Position};

/// Engine-level intent produced by the input router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Command {
    /// Space: start from the title screen, or restart from an end screen.
    #[display("Proceed")]
    Proceed,
    /// A click that landed inside a cell.
    #[display("Select {_0}")]
    Select(Position),
    /// Leave the game.
    #[display("Quit")]
    Quit,
}

/// A mark placed at a position.
///
/// The machine keeps these in order for the current match only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}
