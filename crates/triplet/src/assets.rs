//! Mark sprites and the loader that resolves them.
//!
//! Validating a mark identifier is [`Mark::from_str`](std::str::FromStr);
//! turning a valid mark into something drawable is an [`AssetLoader`]. The
//! engine never looks inside a sprite handle.

use crate::Mark;
use derive_more::{Display, Error};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Failure resolving a mark's sprite.
#[derive(Debug, Display, Error)]
pub enum AssetError {
    /// No asset is configured for the mark.
    #[display("No asset configured for mark {mark}")]
    Unmapped {
        /// The mark with no asset.
        #[error(not(source))]
        mark: Mark,
    },
    /// The asset could not be read.
    #[display("Failed to read asset for mark {mark} at {}: {source}", path.display())]
    Unreadable {
        /// The mark being loaded.
        mark: Mark,
        /// Where the asset was expected.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The asset was read but is not usable.
    #[display("Invalid asset for mark {mark} at {}: {reason}", path.display())]
    Invalid {
        /// The mark being loaded.
        mark: Mark,
        /// Where the asset came from.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },
}

/// Resolves a mark to a renderer-specific sprite handle.
pub trait AssetLoader {
    /// Opaque, renderer-specific sprite.
    type Handle;

    /// Loads the sprite for `mark`.
    fn load(&self, mark: Mark) -> Result<Self::Handle, AssetError>;
}

/// One sprite per mark, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSprites<H> {
    x: H,
    o: H,
}

impl<H> MarkSprites<H> {
    /// Wraps already-loaded sprites.
    pub fn new(x: H, o: H) -> Self {
        Self { x, o }
    }

    /// Loads both sprites, failing on the first missing one.
    #[instrument(skip_all)]
    pub fn load<L>(loader: &L) -> Result<Self, AssetError>
    where
        L: AssetLoader<Handle = H>,
    {
        let x = loader.load(Mark::X)?;
        let o = loader.load(Mark::O)?;
        info!("Mark sprites loaded");
        Ok(Self { x, o })
    }

    /// Sprite for `mark`.
    pub fn get(&self, mark: Mark) -> &H {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}
