//! Terminal front end for the triplet engine.
//!
//! Draws the board with ratatui, reads keyboard and mouse through crossterm,
//! and loads mark glyphs from text files.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod glyphs;
pub mod logging;
pub mod tui;

pub use config::{ConfigError, TripletConfig};
pub use glyphs::{Glyph, GlyphLoader};
