//! Configuration file for the terminal front end.
//!
//! Every section and field is optional; missing values take the defaults
//! below, so an empty file is a valid config.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};
use triplet::{CellGeometry, Mark};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "triplet.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct TripletConfig {
    /// Frame pacing.
    #[serde(default)]
    display: DisplayConfig,

    /// Where the 3x3 grid sits on screen, in terminal cells.
    #[serde(default)]
    board: CellGeometry,

    /// Mark glyph files.
    #[serde(default)]
    assets: AssetsConfig,

    /// Log destination and filter.
    #[serde(default)]
    logging: LoggingConfig,
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Frames per second.
    #[serde(default = "default_fps")]
    fps: u32,
}

fn default_fps() -> u32 {
    60
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { fps: default_fps() }
    }
}

impl DisplayConfig {
    /// Time between two frames.
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

/// `[assets]` section.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding glyph files. Built-in glyphs are used when unset.
    #[serde(default)]
    dir: Option<PathBuf>,

    /// Mark identifier to file name, relative to `dir`.
    #[serde(default = "default_files")]
    files: BTreeMap<String, String>,
}

fn default_files() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("X".to_string(), "cross.txt".to_string()),
        ("O".to_string(), "circle.txt".to_string()),
    ])
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            files: default_files(),
        }
    }
}

impl AssetsConfig {
    /// Creates an assets section reading glyphs from `dir`.
    pub fn new(dir: Option<PathBuf>, files: BTreeMap<String, String>) -> Self {
        Self { dir, files }
    }

    /// Resolves the file table to marks and full paths.
    ///
    /// Every key must be exactly `X` or `O` (case-sensitive). When a
    /// directory is configured both marks must be mapped.
    #[instrument(skip(self))]
    pub fn mark_files(&self) -> Result<Vec<(Mark, PathBuf)>, ConfigError> {
        let base = self.dir.clone().unwrap_or_default();
        let mut resolved: Vec<(Mark, PathBuf)> = Vec::with_capacity(self.files.len());

        for (key, file) in &self.files {
            let mark: Mark = key
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid [assets.files] entry: {}", e)))?;
            resolved.push((mark, base.join(file)));
        }

        if self.dir.is_some() {
            for mark in Mark::iter() {
                if !resolved.iter().any(|(m, _)| *m == mark) {
                    return Err(ConfigError::new(format!(
                        "No glyph file configured for mark {}",
                        mark
                    )));
                }
            }
        }

        debug!(count = resolved.len(), "Resolved glyph files");
        Ok(resolved)
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file. The terminal belongs to the game, so logs never go to stdout.
    #[serde(default = "default_log_file")]
    file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("triplet.log")
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_filter(),
        }
    }
}

impl TripletConfig {
    /// Finds and loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present, otherwise defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(fps = config.display.fps, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides the log file.
    pub fn with_log_file(mut self, file: PathBuf) -> Self {
        self.logging.file = file;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.fps == 0 {
            return Err(ConfigError::new("display.fps must be greater than 0".to_string()));
        }
        if self.board.cell_width == 0 || self.board.cell_height == 0 {
            return Err(ConfigError::new(
                "board.cell_width and board.cell_height must be greater than 0".to_string(),
            ));
        }
        self.assets.mark_files()?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
