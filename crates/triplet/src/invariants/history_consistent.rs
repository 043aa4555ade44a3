//! History consistency invariant: the move log and the board agree.

use super::Invariant;
use crate::GameState;

/// Invariant: every occupied square has exactly one logged move with the
/// same mark, and no square is logged twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let history = state.history();

        let mut seen = [false; 9];
        history.len() == board.occupied().count()
            && history.iter().all(|m| {
                let first = !std::mem::replace(&mut seen[m.position.to_index()], true);
                first && board.square(m.position).mark() == Some(m.mark)
            })
    }

    fn description() -> &'static str {
        "Move log matches the occupied squares"
    }
}
