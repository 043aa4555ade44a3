//! Full frame loop against a test terminal.

use ratatui::{Terminal, backend::TestBackend};
use std::collections::VecDeque;
use std::convert::Infallible;
use std::time::Duration;
use triplet::{
    CellGeometry, GamePhase, InputEvent, InputRouter, InputSource, Key, Mark, MarkSprites,
    Position, Session,
};
use triplet_tui::tui::{TerminalCanvas, run_loop};
use triplet_tui::{Glyph, GlyphLoader};

/// Hands out one batch of events per frame.
struct Frames {
    pending: VecDeque<Vec<InputEvent>>,
    current: Option<VecDeque<InputEvent>>,
}

impl Frames {
    fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            pending: frames.into(),
            current: None,
        }
    }
}

impl InputSource for Frames {
    type Error = Infallible;

    fn next_event(&mut self) -> Result<Option<InputEvent>, Infallible> {
        let pending = &mut self.pending;
        let batch = self
            .current
            .get_or_insert_with(|| pending.pop_front().unwrap_or_default().into());
        match batch.pop_front() {
            Some(event) => Ok(Some(event)),
            None => {
                self.current = None;
                Ok(None)
            }
        }
    }
}

fn click(position: Position) -> InputEvent {
    let (x, y) = CellGeometry::default().cell(position).center();
    InputEvent::PointerDown { x, y }
}

fn screen(canvas: &TerminalCanvas<TestBackend>) -> String {
    let buffer = canvas.terminal().backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn setup() -> (Session<Glyph>, TerminalCanvas<TestBackend>) {
    let sprites = MarkSprites::load(&GlyphLoader::Builtin).unwrap();
    let geometry = CellGeometry::default();
    let terminal = Terminal::new(TestBackend::new(48, 24)).unwrap();
    (
        Session::new(InputRouter::new(geometry), sprites),
        TerminalCanvas::new(terminal, geometry),
    )
}

#[tokio::test]
async fn test_quit_on_first_frame() {
    let (mut session, mut canvas) = setup();
    let mut input = VecDeque::from([InputEvent::Quit]);
    let frames = run_loop(&mut session, &mut input, &mut canvas, Duration::from_millis(1))
        .await
        .unwrap();
    assert_eq!(frames, 0);
}

#[tokio::test]
async fn test_title_then_play() {
    let (mut session, mut canvas) = setup();
    let mut input = Frames::new(vec![
        vec![],
        vec![InputEvent::KeyPress(Key::Space)],
        vec![click(Position::Center)],
        vec![InputEvent::Quit],
    ]);

    let frames = run_loop(&mut session, &mut input, &mut canvas, Duration::from_millis(1))
        .await
        .unwrap();

    assert_eq!(frames, 3);
    assert_eq!(session.state().phase(), GamePhase::Playing);
    assert_eq!(session.state().board().square(Position::Center).mark(), Some(Mark::X));

    let text = screen(&canvas);
    assert!(text.contains("O's turn"));
    assert!(text.contains('┼'));
    assert!(!text.contains("TIC TAC TOE"));
}

#[tokio::test]
async fn test_win_screen_then_restart() {
    let (mut session, mut canvas) = setup();
    let mut input = Frames::new(vec![
        vec![
            InputEvent::KeyPress(Key::Space),
            click(Position::TopLeft),
            click(Position::MiddleLeft),
            click(Position::TopCenter),
            click(Position::Center),
            click(Position::TopRight),
        ],
        vec![InputEvent::Quit],
    ]);
    run_loop(&mut session, &mut input, &mut canvas, Duration::from_millis(1))
        .await
        .unwrap();

    let text = screen(&canvas);
    assert!(text.contains("X Wins!"));
    assert!(text.contains("Press Space to Restart"));
    // The end screen shows only the result.
    assert!(!text.contains('┼'));

    let mut input = Frames::new(vec![
        vec![InputEvent::KeyPress(Key::Space)],
        vec![InputEvent::Quit],
    ]);
    run_loop(&mut session, &mut input, &mut canvas, Duration::from_millis(1))
        .await
        .unwrap();
    let text = screen(&canvas);
    assert!(text.contains("TIC TAC TOE"));
    assert!(text.contains("Press Space to Start"));
    assert!(session.state().history().is_empty());
}
