//! Terminal input source: crossterm events to engine input events.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use derive_new::new;
use std::io;
use std::time::Duration;
use tracing::debug;
use triplet::{InputEvent, InputSource, Key};

/// Reads pending crossterm events without blocking the frame.
#[derive(Debug, Clone, Copy, new)]
pub struct TerminalInput {
    /// How long to wait for the first event of a batch.
    poll_timeout: Duration,
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl InputSource for TerminalInput {
    type Error = io::Error;

    fn next_event(&mut self) -> io::Result<Option<InputEvent>> {
        while event::poll(self.poll_timeout)? {
            let raw = event::read()?;
            if let Some(input) = translate(&raw) {
                return Ok(Some(input));
            }
            debug!(?raw, "Unmapped terminal event");
        }
        Ok(None)
    }
}

/// Maps a crossterm event onto an engine event.
///
/// Esc and Ctrl-C quit. Key releases, mouse moves, resizes and the like map
/// to nothing.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if *kind == KeyEventKind::Release {
                return None;
            }
            let input = match code {
                KeyCode::Esc => InputEvent::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Quit,
                KeyCode::Char(' ') => InputEvent::KeyPress(Key::Space),
                KeyCode::Char(c) => InputEvent::KeyPress(Key::Char(*c)),
                _ => InputEvent::KeyPress(Key::Other),
            };
            Some(input)
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(InputEvent::PointerDown {
            x: *column,
            y: *row,
        }),
        _ => None,
    }
}
