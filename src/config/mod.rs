//! Configuration file support for inkmask.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkmask/config.toml`. Settings include pen and eraser defaults,
//! erase cursor appearance, and the canvas used for headless rendering.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LINE_WIDTH_RANGE: (f64, f64) = (0.5, 100.0);
const ERASER_WIDTH_RANGE: (f64, f64) = (1.0, 200.0);
const CANVAS_SIZE_RANGE: (u32, u32) = (1, 16384);

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// line_color = "red"
/// line_width = 3.0
/// eraser_width = 20.0
///
/// [ui]
/// show_erase_cursor = true
/// erase_cursor_color = [128, 128, 128]
///
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pen and eraser defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// UI chrome preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Headless canvas settings
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `line_width`: 0.5 - 100.0
    /// - `eraser_width`: 1.0 - 200.0
    /// - `canvas.width` / `canvas.height`: 1 - 16384
    fn validate_and_clamp(&mut self) {
        let (min, max) = LINE_WIDTH_RANGE;
        if !(min..=max).contains(&self.drawing.line_width) {
            warn!(
                "Invalid line_width {:.1}, clamping to {min:.1}-{max:.1} range",
                self.drawing.line_width
            );
            self.drawing.line_width = clamp_or(self.drawing.line_width, min, max, 3.0);
        }

        let (min, max) = ERASER_WIDTH_RANGE;
        if !(min..=max).contains(&self.drawing.eraser_width) {
            warn!(
                "Invalid eraser_width {:.1}, clamping to {min:.1}-{max:.1} range",
                self.drawing.eraser_width
            );
            self.drawing.eraser_width = clamp_or(self.drawing.eraser_width, min, max, 20.0);
        }

        let (min, max) = CANVAS_SIZE_RANGE;
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(min..=max).contains(&*value) {
                warn!("Invalid canvas {name} {value}, clamping to {min}-{max} range");
                *value = (*value).clamp(min, max);
            }
        }

        if !self.drawing.line_color.is_valid() {
            warn!(
                "Invalid line_color {:?}, falling back to red",
                self.drawing.line_color
            );
            self.drawing.line_color = ColorSpec::Name("red".to_string());
        }
        if !self.ui.erase_cursor_color.is_valid() {
            warn!(
                "Invalid erase_cursor_color {:?}, falling back to gray",
                self.ui.erase_cursor_color
            );
            self.ui.erase_cursor_color = ColorSpec::Name("gray".to_string());
        }
        if let Some(background) = &self.canvas.background {
            if !background.is_valid() {
                warn!("Invalid canvas background {background:?}, using transparent");
                self.canvas.background = None;
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkmask/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkmask");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from a TOML string without validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the bundled example config to the user's config directory and
    /// returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
