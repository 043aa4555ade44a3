//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: the move log alternates starting with X, and the mark to move
/// is X exactly when an even number of moves has been made.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.first().is_some_and(|m| m.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        state.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Command, Move, Position};

    #[test]
    fn test_sequence_holds() {
        let mut state = GameState::new();
        state.apply(Command::Proceed);
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            state.apply(Command::Select(pos));
            assert!(AlternatingTurnInvariant::holds(&state));
        }
        assert_eq!(state.to_move(), Mark::O);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut state = GameState::new();
        state.history.push(Move::new(Mark::X, Position::TopLeft));
        state.history.push(Move::new(Mark::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_o_first_violates() {
        let mut state = GameState::new();
        state.history.push(Move::new(Mark::O, Position::Center));
        state.turn.advance();
        state.turn.advance();
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
