//=========================================================================
// Client Options
//=========================================================================
//
// Persistent user options (video, window, audio), stored as TOML.
//
// Fields missing from the file fall back to their defaults, so options
// files written by older builds keep loading.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Constants ===========================================================

const CONFIG_DIR_NAME: &str = "campaign-client";
const OPTIONS_FILE_NAME: &str = "options.toml";

//=== OptionsError ========================================================

/// Errors raised while reading or writing the options file.
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("options file io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error("invalid options file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),
}

//=== WindowMode ==========================================================

/// How the client window is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Covers the whole current monitor.
    Fullscreen,

    /// Regular decorated window.
    Windowed,

    /// Window without decorations.
    Borderless,
}

impl Default for WindowMode {
    fn default() -> Self {
        Self::Fullscreen
    }
}

//=== Options =============================================================

/// User-adjustable client options.
///
/// # Example
///
/// ```rust
/// # use campaign_client::prelude::*;
/// let mut options = Options::default();
/// options.video_mode = "1280x720".to_string();
/// options.window_mode = WindowMode::Windowed;
///
/// assert_eq!(options.resolution(), Some((1280, 720)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Video mode as `"<width>x<height>"`; empty lets the platform decide.
    pub video_mode: String,

    /// Full-screen anti-aliasing sample count.
    pub full_screen_anti_aliasing: u8,

    pub window_mode: WindowMode,

    pub vertical_sync: bool,

    /// Audio output device name; empty selects the system default.
    pub audio_device: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            video_mode: String::new(),
            full_screen_anti_aliasing: 8,
            window_mode: WindowMode::default(),
            vertical_sync: true,
            audio_device: String::new(),
        }
    }
}

impl Options {
    //--- Persistence ------------------------------------------------------

    /// Returns the per-user options file location, if the platform has a
    /// configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(OPTIONS_FILE_NAME))
    }

    /// Reads options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let options = toml::from_str(&content).map_err(|source| OptionsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Reads options from `path`, or returns defaults if it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, OptionsError> {
        if !path.exists() {
            info!("No options file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Writes options to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), OptionsError> {
        let io_error = |source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_error)?;

        debug!("Saved options to {}", path.display());
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    /// Parses the width and height out of `video_mode`.
    ///
    /// Accepts `"1280x720"` as well as the long form
    /// `"1280 x 720 @ 32-bpp"`. Returns `None` for empty or malformed modes.
    pub fn resolution(&self) -> Option<(u32, u32)> {
        let mode = self.video_mode.split('@').next()?;
        let (width, height) = mode.split_once('x')?;

        let width: u32 = width.trim().parse().ok()?;
        let height: u32 = height.trim().parse().ok()?;

        if width == 0 || height == 0 {
            return None;
        }
        Some((width, height))
    }
}

//=== Tests ===============================================================
