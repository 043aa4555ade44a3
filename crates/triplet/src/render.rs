//! What gets drawn each frame, independent of how it is drawn.
//!
//! [`Scene`] walks the authoritative [`GameState`] and issues draw calls on a
//! [`Canvas`]. The canvas decides what a board line, a sprite and a text slot
//! look like on its device.

use crate::{GamePhase, GameState, MarkSprites, Position};
use tracing::instrument;

/// Title screen banner.
pub const TITLE_TEXT: &str = "TIC TAC TOE";
/// Title screen prompt.
pub const START_PROMPT: &str = "Press Space to Start";
/// End screen prompt.
pub const RESTART_PROMPT: &str = "Press Space to Restart";
/// Drawn game headline.
pub const TIE_TEXT: &str = "It's a Tie";

/// Vertical text placement, as a fraction of screen height.
///
/// Text is always centered horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    /// One quarter down: the title.
    Banner,
    /// Seven sixteenths down: the result headline.
    Headline,
    /// Halfway: the restart prompt.
    Hint,
    /// Seven eighths down: the start prompt.
    Footer,
    /// Fifteen sixteenths down: whose turn it is.
    Status,
}

impl TextSlot {
    /// Position as `(numerator, denominator)` of screen height.
    pub fn fraction(self) -> (u16, u16) {
        match self {
            TextSlot::Banner => (1, 4),
            TextSlot::Headline => (7, 16),
            TextSlot::Hint => (1, 2),
            TextSlot::Footer => (7, 8),
            TextSlot::Status => (15, 16),
        }
    }

    /// Row of this slot on a screen `height` units tall.
    pub fn row(self, height: u16) -> u16 {
        let (num, den) = self.fraction();
        let row = u32::from(height) * u32::from(num) / u32::from(den);
        // Always on screen, even when the fraction rounds to the last row.
        (row as u16).min(height.saturating_sub(1))
    }
}

/// The renderer collaborator.
///
/// Calls made between two `present`s describe one frame; `present` shows it
/// and starts the next frame empty.
pub trait Canvas {
    /// Device-specific image of a mark.
    type Sprite;
    /// Failure showing a frame.
    type Error;

    /// Draws the two horizontal and two vertical grid lines.
    fn draw_board_lines(&mut self);

    /// Draws `sprite` centered in the cell at `position`.
    fn draw_mark(&mut self, position: Position, sprite: &Self::Sprite);

    /// Draws `content` centered on the row of `slot`.
    fn draw_text(&mut self, content: &str, slot: TextSlot);

    /// Shows the frame.
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Turns a [`GameState`] into draw calls.
#[derive(Debug, Clone)]
pub struct Scene<S> {
    sprites: MarkSprites<S>,
}

impl<S> Scene<S> {
    /// Creates a scene drawing marks with `sprites`.
    pub fn new(sprites: MarkSprites<S>) -> Self {
        Self { sprites }
    }

    /// Draws one frame of `state` and presents it.
    #[instrument(skip_all, fields(phase = %state.phase()))]
    pub fn render<C>(&self, state: &GameState, canvas: &mut C) -> Result<(), C::Error>
    where
        C: Canvas<Sprite = S>,
    {
        match state.phase() {
            GamePhase::Title => {
                canvas.draw_text(TITLE_TEXT, TextSlot::Banner);
                canvas.draw_text(START_PROMPT, TextSlot::Footer);
            }
            GamePhase::Playing => {
                canvas.draw_board_lines();
                for (position, mark) in state.board().occupied() {
                    canvas.draw_mark(position, self.sprites.get(mark));
                }
                canvas.draw_text(&turn_text(state), TextSlot::Status);
            }
            GamePhase::Won(winner) => {
                canvas.draw_text(&format!("{winner} Wins!"), TextSlot::Headline);
                canvas.draw_text(RESTART_PROMPT, TextSlot::Hint);
            }
            GamePhase::Drawn => {
                canvas.draw_text(TIE_TEXT, TextSlot::Headline);
                canvas.draw_text(RESTART_PROMPT, TextSlot::Hint);
            }
        }
        canvas.present()
    }
}

fn turn_text(state: &GameState) -> String {
    format!("{}'s turn", state.to_move())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Command, Mark};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Lines,
        Mark(Position, char),
        Text(String, TextSlot),
        Present,
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        type Sprite = char;
        type Error = std::convert::Infallible;

        fn draw_board_lines(&mut self) {
            self.ops.push(Op::Lines);
        }

        fn draw_mark(&mut self, position: Position, sprite: &char) {
            self.ops.push(Op::Mark(position, *sprite));
        }

        fn draw_text(&mut self, content: &str, slot: TextSlot) {
            self.ops.push(Op::Text(content.to_string(), slot));
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            self.ops.push(Op::Present);
            Ok(())
        }
    }

    fn scene() -> Scene<char> {
        Scene::new(MarkSprites::new('x', 'o'))
    }

    fn render(state: &GameState) -> Vec<Op> {
        let mut canvas = Recorder::default();
        scene().render(state, &mut canvas).unwrap();
        canvas.ops
    }

    #[test]
    fn test_title_screen() {
        assert_eq!(
            render(&GameState::new()),
            vec![
                Op::Text(TITLE_TEXT.into(), TextSlot::Banner),
                Op::Text(START_PROMPT.into(), TextSlot::Footer),
                Op::Present,
            ]
        );
    }

    #[test]
    fn test_playing_screen_draws_placed_marks() {
        let mut state = GameState::new();
        state.apply(Command::Proceed);
        state.apply(Command::Select(Position::Center));
        state.apply(Command::Select(Position::TopLeft));

        assert_eq!(
            render(&state),
            vec![
                Op::Lines,
                Op::Mark(Position::TopLeft, 'o'),
                Op::Mark(Position::Center, 'x'),
                Op::Text("X's turn".into(), TextSlot::Status),
                Op::Present,
            ]
        );
    }

    #[test]
    fn test_end_screens() {
        let mut state = GameState::new();
        state.phase = GamePhase::Won(Mark::O);
        let ops = render(&state);
        assert_eq!(ops[0], Op::Text("O Wins!".into(), TextSlot::Headline));
        assert_eq!(ops[1], Op::Text(RESTART_PROMPT.into(), TextSlot::Hint));

        state.phase = GamePhase::Drawn;
        let ops = render(&state);
        assert_eq!(ops[0], Op::Text(TIE_TEXT.into(), TextSlot::Headline));
        assert!(!ops.contains(&Op::Lines));
    }

    #[test]
    fn test_slot_rows_follow_screen_fractions() {
        assert_eq!(TextSlot::Banner.row(800), 200);
        assert_eq!(TextSlot::Headline.row(800), 350);
        assert_eq!(TextSlot::Hint.row(800), 400);
        assert_eq!(TextSlot::Footer.row(800), 700);
        assert_eq!(TextSlot::Status.row(800), 750);
        assert_eq!(TextSlot::Status.row(1), 0);
        assert_eq!(TextSlot::Banner.row(0), 0);
    }
}
