//! Terminal front end: screen setup, the frame loop and teardown.

mod canvas;
mod input;

pub use canvas::{DrawOp, TerminalCanvas};
pub use input::{TerminalInput, translate};

use crate::config::TripletConfig;
use crate::glyphs::Glyph;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, instrument};
use triplet::{Canvas, Flow, InputRouter, InputSource, MarkSprites, Session};

/// Takes over the terminal and plays until the user quits.
///
/// The terminal is restored before returning, error or not.
pub async fn run(config: &TripletConfig, sprites: MarkSprites<Glyph>) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            return Err(e).context("Failed to create terminal");
        }
    };

    let geometry = *config.board();
    let mut canvas = TerminalCanvas::new(terminal, geometry);
    let mut session = Session::new(InputRouter::new(geometry), sprites);
    let mut input = TerminalInput::default();

    let res = run_loop(
        &mut session,
        &mut input,
        &mut canvas,
        config.display().frame_period(),
    )
    .await;

    restore(canvas.terminal_mut()).context("Failed to restore terminal")?;

    match res {
        Ok(frames) => {
            info!(frames, "Terminal UI closed");
            Ok(())
        }
        Err(err) => {
            error!(error = ?err, "Game loop error");
            Err(err)
        }
    }
}

/// Ticks `session` once per `period` until it reports [`Flow::Quit`].
///
/// Missed ticks are skipped rather than bunched up. Returns the number of
/// frames drawn.
#[instrument(skip(session, input, canvas))]
pub async fn run_loop<I, C>(
    session: &mut Session<C::Sprite>,
    input: &mut I,
    canvas: &mut C,
    period: Duration,
) -> Result<u64>
where
    I: InputSource,
    I::Error: std::error::Error + Send + Sync + 'static,
    C: Canvas,
    C::Error: std::error::Error + Send + Sync + 'static,
{
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut frames = 0u64;
    loop {
        interval.tick().await;
        match session.tick(input, canvas).context("Frame failed")? {
            Flow::Continue => frames += 1,
            Flow::Quit => return Ok(frames),
        }
    }
}

fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
