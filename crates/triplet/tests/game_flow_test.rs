//! Scripted games through the state machine.

use triplet::invariants::{GameInvariants, InvariantSet};
use triplet::{Board, Command, GamePhase, GameState, Mark, Position, Transition};

fn start() -> GameState {
    let mut state = GameState::new();
    assert_eq!(state.apply(Command::Proceed), Transition::Started);
    state
}

fn play(state: &mut GameState, cells: &[(usize, usize)]) -> Vec<Transition> {
    cells
        .iter()
        .map(|&(row, col)| {
            let pos = Position::from_row_col(row, col).expect("Cell on the board");
            let transition = state.apply(Command::Select(pos));
            assert!(GameInvariants::check_all(state).is_ok());
            transition
        })
        .collect()
}

#[test]
fn test_x_wins_top_row() {
    let mut state = start();
    // X (0,0), O (1,0), X (0,1), O (1,1), X (0,2)
    let transitions = play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert!(matches!(transitions[4], Transition::Won(m) if m.mark == Mark::X));
    assert_eq!(state.phase(), GamePhase::Won(Mark::X));
    assert_eq!(state.board().check_win(), Some(Mark::X));
}

#[test]
fn test_full_board_draw() {
    let mut state = start();
    // X O X
    // X O O
    // O X X
    let transitions = play(
        &mut state,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert!(matches!(transitions.last(), Some(Transition::Drawn(_))));
    assert_eq!(state.phase(), GamePhase::Drawn);
    assert!(state.board().is_full());
    assert_eq!(state.board().check_win(), None);
}

#[test]
fn test_filling_move_that_wins_is_a_win() {
    let mut state = start();
    // X O X
    // O X O
    // O X X   <- last X at (2,2) fills the board and completes the diagonal
    let transitions = play(
        &mut state,
        &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert!(matches!(transitions.last(), Some(Transition::Won(_))));
    assert_eq!(state.phase(), GamePhase::Won(Mark::X));
}

#[test]
fn test_occupied_cell_does_not_advance_turn() {
    let mut state = start();
    play(&mut state, &[(1, 1)]);
    let before = state.board().clone();

    let transitions = play(&mut state, &[(1, 1), (1, 1)]);
    assert_eq!(
        transitions,
        vec![Transition::Rejected(Position::Center); 2]
    );
    assert_eq!(state.board(), &before);
    assert_eq!(state.to_move(), Mark::O);
}

#[test]
fn test_turn_parity_over_a_match() {
    let mut state = start();
    let cells = [(0, 0), (1, 1), (2, 2), (0, 2), (2, 0), (1, 0)];
    for (n, cell) in cells.iter().enumerate() {
        play(&mut state, &[*cell]);
        let expected = if (n + 1) % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(state.to_move(), expected);
    }
}

#[test]
fn test_space_after_win_returns_to_title() {
    let mut state = start();
    play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(state.phase(), GamePhase::Won(Mark::X));

    assert_eq!(state.apply(Command::Proceed), Transition::Restarted);
    assert_eq!(state.phase(), GamePhase::Title);
    assert_eq!(state.board(), &Board::new());
    assert_eq!(state.to_move(), Mark::X);
    assert!(state.history().is_empty());

    // A fresh match starts with X again.
    assert_eq!(state.apply(Command::Proceed), Transition::Started);
    let transitions = play(&mut state, &[(2, 2)]);
    assert!(matches!(transitions[0], Transition::Placed(m) if m.mark == Mark::X));
}

#[test]
fn test_o_can_win() {
    let mut state = start();
    // X: (0,0) (0,1) (2,2); O: (1,0) (1,1) (1,2)
    play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert_eq!(state.phase(), GamePhase::Won(Mark::O));
}

#[test]
fn test_history_records_moves_in_order() {
    let mut state = start();
    play(&mut state, &[(2, 0), (0, 2)]);
    let positions: Vec<_> = state.history().iter().map(|m| m.position).collect();
    assert_eq!(positions, vec![Position::BottomLeft, Position::TopRight]);
}

#[test]
fn test_drawn_board_ignores_clicks_then_restarts() {
    let mut state = start();
    play(
        &mut state,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(state.phase(), GamePhase::Drawn);
    let frozen = state.board().clone();

    for pos in [Position::Center, Position::TopLeft] {
        assert_eq!(state.apply(Command::Select(pos)), Transition::Ignored);
    }
    assert_eq!(state.phase(), GamePhase::Drawn);
    assert_eq!(state.board(), &frozen);

    assert_eq!(state.apply(Command::Proceed), Transition::Restarted);
    assert_eq!(state.phase(), GamePhase::Title);
    assert_eq!(state.board(), &Board::new());
    assert_eq!(state.to_move(), Mark::X);
    assert!(state.history().is_empty());
    assert!(GameInvariants::check_all(&state).is_ok());
}
