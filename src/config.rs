//! Settings loaded from `sanmoku.toml`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use sanmoku_core::{LabelStyle, MoveOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Initial order of the move list.
    #[serde(default)]
    move_order: MoveOrder,

    /// Append the (row,col) of each move to its move-list label.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_show_coordinates() -> bool {
    true
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("sanmoku.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            move_order: MoveOrder::default(),
            show_coordinates: default_show_coordinates(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the initial move-list order.
    #[instrument(skip(self))]
    pub fn with_move_order(mut self, order: MoveOrder) -> Self {
        self.move_order = order;
        self
    }

    /// Overrides whether coordinates are shown in move-list labels.
    #[instrument(skip(self))]
    pub fn with_show_coordinates(mut self, show: bool) -> Self {
        self.show_coordinates = show;
        self
    }

    /// Move-list label style implied by these settings.
    pub fn label_style(&self) -> LabelStyle {
        if self.show_coordinates {
            LabelStyle::WithCoordinates
        } else {
            LabelStyle::Plain
        }
    }
}

/// Loads settings with a temporary subscriber writing to `writer`.
///
/// The application subscriber depends on the loaded settings, so it cannot
/// exist yet. This one is dropped as soon as loading finishes.
pub fn load_settings_logged<W>(
    path: impl AsRef<Path>,
    filter: EnvFilter,
    writer: W,
) -> Result<Settings, ConfigError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || Settings::load_or_default(path))
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
