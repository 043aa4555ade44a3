//! Screen phases of a match.

/// Which screen the game is on, and therefore which input it accepts.
///
/// `Title` waits for Space, `Playing` accepts cell selections, and the two
/// end screens wait for Space to go back to `Title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum GamePhase {
    /// Start screen.
    #[default]
    #[display("Title")]
    Title,
    /// A match is running.
    #[display("Playing")]
    Playing,
    /// The match ended with a completed line.
    #[display("Won by {_0}")]
    Won(crate::Mark),
    /// The board filled with no completed line.
    #[display("Drawn")]
    Drawn,
}

impl GamePhase {
    /// True on either end screen.
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Won(_) | GamePhase::Drawn)
    }
}
