//! Text glyphs for the two marks.
//!
//! A glyph is a few lines of text drawn centered in a board cell. Glyphs
//! come either from built-in art or from files named in the config.

use crate::config::{AssetsConfig, ConfigError};
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use triplet::{AssetError, AssetLoader, Mark};

/// A multi-line text sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    lines: Vec<String>,
}

impl Glyph {
    /// Builds a glyph from text, dropping trailing blank lines and trailing
    /// whitespace on each line. Returns `None` if nothing visible remains.
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        while lines.first().is_some_and(|l| l.is_empty()) {
            lines.remove(0);
        }
        (!lines.is_empty()).then_some(Self { lines })
    }

    /// The glyph's rows, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width of the widest row, in characters.
    pub fn width(&self) -> u16 {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .try_into()
            .unwrap_or(u16::MAX)
    }

    /// Number of rows.
    pub fn height(&self) -> u16 {
        self.lines.len().try_into().unwrap_or(u16::MAX)
    }
}

const BUILTIN_CROSS: &str = include_str!("../assets/cross.txt");
const BUILTIN_CIRCLE: &str = include_str!("../assets/circle.txt");

/// Where glyphs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphLoader {
    /// Art compiled into the binary.
    Builtin,
    /// One file per mark.
    Files(Vec<(Mark, PathBuf)>),
}

impl GlyphLoader {
    /// Picks the loader the `[assets]` section asks for.
    #[instrument(skip(assets))]
    pub fn from_config(assets: &AssetsConfig) -> Result<Self, ConfigError> {
        if assets.dir().is_none() {
            debug!("No asset directory configured, using built-in glyphs");
            return Ok(GlyphLoader::Builtin);
        }
        Ok(GlyphLoader::Files(assets.mark_files()?))
    }
}

impl AssetLoader for GlyphLoader {
    type Handle = Glyph;

    #[instrument(skip(self))]
    fn load(&self, mark: Mark) -> Result<Glyph, AssetError> {
        match self {
            GlyphLoader::Builtin => {
                let art = match mark {
                    Mark::X => BUILTIN_CROSS,
                    Mark::O => BUILTIN_CIRCLE,
                };
                Glyph::parse(art).ok_or(AssetError::Unmapped { mark })
            }
            GlyphLoader::Files(files) => {
                let path = files
                    .iter()
                    .find(|(m, _)| *m == mark)
                    .map(|(_, p)| p.clone())
                    .ok_or(AssetError::Unmapped { mark })?;
                let text = std::fs::read_to_string(&path).map_err(|source| {
                    AssetError::Unreadable {
                        mark,
                        path: path.clone(),
                        source,
                    }
                })?;
                let glyph = Glyph::parse(&text).ok_or_else(|| AssetError::Invalid {
                    mark,
                    path: path.clone(),
                    reason: "file has no visible characters".to_string(),
                })?;
                info!(%mark, path = %path.display(), "Loaded glyph");
                Ok(glyph)
            }
        }
    }
}
