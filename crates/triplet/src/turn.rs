//! Whose turn it is.

use crate::Mark;
use tracing::instrument;

/// Alternates between the two marks, starting at [`Mark::X`].
///
/// Advanced exactly once per successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTracker {
    current: Mark,
}

impl TurnTracker {
    /// The mark that always opens a match.
    pub const FIRST: Mark = Mark::X;

    /// Creates a tracker with `X` to move.
    pub fn new() -> Self {
        Self {
            current: Self::FIRST,
        }
    }

    /// Mark to move next.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Hands the turn to the other mark.
    #[instrument(skip(self), fields(from = %self.current))]
    pub fn advance(&mut self) {
        self.current = self.current.opponent();
    }

    /// Back to `X`.
    pub fn reset(&mut self) {
        self.current = Self::FIRST;
    }
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new()
    }
}
