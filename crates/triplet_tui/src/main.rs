//! Triplet - two-player match-three in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;
use tracing::{info, warn};
use triplet::{Mark, MarkSprites, Position};
use triplet_tui::cli::Cli;
use triplet_tui::{Glyph, GlyphLoader, TripletConfig, logging, tui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config =
        TripletConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(file) = cli.log_file {
        config = config.with_log_file(file);
    }

    logging::init(config.logging().file(), config.logging().filter())?;
    info!(fps = config.display().fps(), "Starting triplet");

    let loader = GlyphLoader::from_config(config.assets()).context("Invalid asset configuration")?;
    let sprites = MarkSprites::load(&loader).context("Failed to load mark glyphs")?;

    if cli.check {
        report(&config, &sprites);
        return Ok(());
    }

    tui::run(&config, sprites).await
}

/// Prints what `--check` found.
fn report(config: &TripletConfig, sprites: &MarkSprites<Glyph>) {
    let board = config.board();
    let cell = board.cell(Position::TopLeft);
    println!("config ok: {} fps", config.display().fps());
    println!(
        "board: 3x3 cells of {}x{} at ({}, {})",
        cell.width, cell.height, board.left, board.top
    );
    for mark in Mark::iter() {
        let glyph = sprites.get(mark);
        println!("glyph {}: {}x{}", mark, glyph.width(), glyph.height());
        if glyph.width() > cell.width || glyph.height() > cell.height {
            warn!(%mark, "Glyph larger than a cell, it will be clipped");
            println!("  warning: larger than a cell, will be clipped");
        }
    }
}
