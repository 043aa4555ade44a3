//! Game-state engine for a two-player 3x3 match-three board game.
//!
//! The engine owns the board, the turn order and the screen phases
//! (title, playing, won, drawn). Rendering, input and asset loading are
//! collaborators described by traits:
//!
//! - [`InputSource`] produces [`InputEvent`]s, which an [`InputRouter`] turns
//!   into [`Command`]s using the on-screen [`CellGeometry`].
//! - [`GameState::apply`] accepts or ignores each command depending on the
//!   current [`GamePhase`].
//! - [`Scene`] draws the state onto a [`Canvas`] every frame, using sprites
//!   an [`AssetLoader`] resolved at startup.
//!
//! [`Session`] bundles these for a frame loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod assets;
mod error;
pub mod invariants;
mod machine;
mod phase;
mod position;
mod render;
mod router;
pub mod rules;
mod session;
mod turn;
mod types;

pub use action::{Command, Move};
pub use assets::{AssetError, AssetLoader, MarkSprites};
pub use error::TickError;
pub use machine::{GameState, Transition};
pub use phase::GamePhase;
pub use position::Position;
pub use render::{
    Canvas, RESTART_PROMPT, START_PROMPT, Scene, TIE_TEXT, TITLE_TEXT, TextSlot,
};
pub use router::{CellGeometry, CellRect, InputEvent, InputRouter, InputSource, Key};
pub use session::{Flow, Session};
pub use turn::TurnTracker;
pub use types::{Board, InvalidMarkType, Mark, Square};
