//! User settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "inception.toml";

/// Front-end settings.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Log file written by the terminal UI.
    log_file: PathBuf,

    /// Fallback log filter when `RUST_LOG` is unset.
    log_level: String,

    /// Event poll timeout in milliseconds.
    tick_rate_ms: u64,

    /// Highlight the playable cell under the mouse.
    hover_highlight: bool,

    /// Colours used by the board renderer.
    theme: ThemeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("inception.log"),
            log_level: "info".to_string(),
            tick_rate_ms: 100,
            hover_highlight: true,
            theme: ThemeSettings::default(),
        }
    }
}

/// Colour names as written in the config file.
///
/// Values are ratatui colour names (`"blue"`, `"lightyellow"`) or hex
/// triplets (`"#fffcb3"`).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    /// Colour of X marks.
    x_color: String,
    /// Colour of O marks.
    o_color: String,
    /// Background of the hovered cell.
    highlight: String,
    /// Background of the keyboard cursor.
    cursor: String,
    /// Grid lines and empty cells.
    grid: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            highlight: "#fffcb3".to_string(),
            cursor: "white".to_string(),
            grid: "darkgray".to_string(),
        }
    }
}

/// Parses a configured colour.
///
/// # Errors
///
/// Returns [`ConfigError`] naming the field when the value is not a colour.
#[track_caller]
pub fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid colour for {}: {:?}", field, value)))
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML, unknown keys, a zero tick
    /// rate, or an unparseable colour.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(settings)
    }

    /// Resolves settings for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// `dir` is used if present, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the chosen file cannot be loaded.
    #[instrument(skip(explicit, dir))]
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_file(fallback)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be greater than zero"));
        }
        let theme = &self.theme;
        for (field, value) in [
            ("theme.x_color", &theme.x_color),
            ("theme.o_color", &theme.o_color),
            ("theme.highlight", &theme.highlight),
            ("theme.cursor", &theme.cursor),
            ("theme.grid", &theme.grid),
        ] {
            parse_color(field, value)?;
        }
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
