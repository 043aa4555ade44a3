//! Phase consistency invariant: the screen phase agrees with the board.

use super::Invariant;
use crate::{GamePhase, GameState};

/// Invariant: the phase is the one the board implies.
///
/// - `Title`: empty board.
/// - `Playing`: no completed line and at least one empty square.
/// - `Won(m)`: `m` owns the first completed line.
/// - `Drawn`: full board, no completed line.
pub struct PhaseConsistentInvariant;

impl Invariant<GameState> for PhaseConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.phase() {
            GamePhase::Title => board.occupied().next().is_none(),
            GamePhase::Playing => board.check_win().is_none() && !board.is_full(),
            GamePhase::Won(mark) => board.check_win() == Some(mark),
            GamePhase::Drawn => board.check_draw(),
        }
    }

    fn description() -> &'static str {
        "Phase matches the board's win/draw state"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_title_with_marks_violates() {
        let mut state = GameState::new();
        state.board.place(Position::Center, Mark::X);
        assert!(!PhaseConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_won_without_line_violates() {
        let mut state = GameState::new();
        state.phase = GamePhase::Won(Mark::X);
        assert!(!PhaseConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_playing_with_line_violates() {
        let mut state = GameState::new();
        state.phase = GamePhase::Playing;
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            state.board.place(pos, Mark::O);
        }
        assert!(!PhaseConsistentInvariant::holds(&state));

        state.phase = GamePhase::Won(Mark::O);
        assert!(PhaseConsistentInvariant::holds(&state));
    }
}
