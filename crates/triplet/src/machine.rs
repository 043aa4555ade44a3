//! The game-state machine: phase guard, placements and restart.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{Board, Command, GamePhase, Mark, Move, Position, TurnTracker};
use tracing::{debug, info, instrument, warn};

/// What a command did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Title -> Playing.
    Started,
    /// A mark was placed and play continues.
    Placed(Move),
    /// A mark was placed and completed a line.
    Won(Move),
    /// A mark was placed and filled the board without a line.
    Drawn(Move),
    /// Selection of an occupied square. Nothing changed.
    Rejected(Position),
    /// End screen -> Title, board cleared and turn reset.
    Restarted,
    /// The command has no meaning in the current phase.
    Ignored,
}

impl Transition {
    /// True if the command changed anything.
    pub fn changed(&self) -> bool {
        !matches!(self, Transition::Rejected(_) | Transition::Ignored)
    }
}

// ─────────────────────────────────────────────────────────────
//  GameState
// ─────────────────────────────────────────────────────────────

/// Authoritative state of one game: phase, board, turn and move log.
///
/// Created once at startup and reused across matches; a restart clears the
/// board and log in place.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub(crate) phase: GamePhase,
    pub(crate) board: Board,
    pub(crate) turn: TurnTracker,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a state on the title screen with an empty board and `X` to move.
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Title,
            board: Board::new(),
            turn: TurnTracker::new(),
            history: Vec::with_capacity(9),
        }
    }

    /// Current screen phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next.
    pub fn to_move(&self) -> Mark {
        self.turn.current()
    }

    /// Moves of the current match in the order they were made.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies one command under the phase guard.
    ///
    /// Invalid or out-of-phase commands are reported through the returned
    /// [`Transition`] and leave the state untouched.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn apply(&mut self, command: Command) -> Transition {
        let transition = match (self.phase, command) {
            (_, Command::Quit) => Transition::Ignored,
            (GamePhase::Title, Command::Proceed) => {
                self.phase = GamePhase::Playing;
                info!("Match started");
                Transition::Started
            }
            (GamePhase::Playing, Command::Select(position)) => self.select(position),
            (phase, Command::Proceed) if phase.is_over() => {
                self.restart();
                Transition::Restarted
            }
            // Space while playing, clicks outside of play.
            (_, Command::Proceed | Command::Select(_)) => Transition::Ignored,
        };

        debug!(?transition, next = %self.phase, "Command applied");
        self.debug_assert_invariants();
        transition
    }

    fn select(&mut self, position: Position) -> Transition {
        let mark = self.turn.current();
        if !self.board.place(position, mark) {
            warn!(%position, %mark, "Square already occupied");
            return Transition::Rejected(position);
        }

        let action = Move::new(mark, position);
        self.history.push(action);
        self.turn.advance();

        // Win is checked before draw: a filling move that completes a line wins.
        if let Some(winner) = self.board.check_win() {
            self.phase = GamePhase::Won(winner);
            info!(%winner, moves = self.history.len(), "Match won");
            Transition::Won(action)
        } else if self.board.check_draw() {
            self.phase = GamePhase::Drawn;
            info!("Match drawn");
            Transition::Drawn(action)
        } else {
            Transition::Placed(action)
        }
    }

    #[instrument(skip(self))]
    fn restart(&mut self) {
        self.board.clear();
        self.turn.reset();
        self.history.clear();
        self.phase = GamePhase::Title;
        info!("Back to title");
    }

    fn debug_assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(self)
        {
            panic!("Game invariants violated: {violations:?}");
        }
    }
}
