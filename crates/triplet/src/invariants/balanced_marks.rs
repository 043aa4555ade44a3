//! Balanced marks invariant: X is never behind O, and never more than one ahead.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let xs = state.board().count(Mark::X);
        let os = state.board().count(Mark::O);
        xs == os || xs == os + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
