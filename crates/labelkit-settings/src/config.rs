//! Configuration and settings management for LabelKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (surface scale, snapping, history depth)
//! - Barcode settings (size caps, symbol geometry, placeholder value)
//! - Overlay settings (photo simulation ranges)
//! - Wizard defaults (prefilled client and destination)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use labelkit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application directory name under the platform config dir.
const APP_DIR: &str = "labelkit";

/// Default config file name.
const CONFIG_FILE: &str = "config.toml";

/// Editor surface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Device pixels per millimetre on the flat editor surface
    pub pixels_per_mm: f64,
    /// Device pixels per millimetre when drawn on a photograph
    pub overlay_pixels_per_mm: f64,
    /// Snap distance in pixels
    pub snap_threshold_px: f64,
    /// Smallest resizable dimension in millimetres
    pub min_element_mm: f64,
    /// Margin for edge alignment in millimetres
    pub align_margin_mm: f64,
    /// Maximum undo checkpoints, unlimited when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
    /// Increment of the rotation control in degrees
    pub rotation_step_deg: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            pixels_per_mm: constants::DEFAULT_PIXELS_PER_MM,
            overlay_pixels_per_mm: constants::OVERLAY_PIXELS_PER_MM,
            snap_threshold_px: constants::SNAP_THRESHOLD_PX,
            min_element_mm: constants::MIN_ELEMENT_MM,
            align_margin_mm: constants::ALIGN_MARGIN_MM,
            history_limit: None,
            rotation_step_deg: constants::ROTATION_STEP_DEG,
        }
    }
}

/// Barcode symbol settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeSettings {
    /// Width cap in millimetres
    pub max_width_mm: f64,
    /// Height cap in millimetres
    pub max_height_mm: f64,
    /// Bar height in symbol units
    pub bar_height: f64,
    /// Narrow module width in symbol units
    pub module_width: f64,
    /// Value drawn while the element has no content
    pub placeholder_value: String,
}

impl Default for BarcodeSettings {
    fn default() -> Self {
        Self {
            max_width_mm: constants::BARCODE_MAX_WIDTH_MM,
            max_height_mm: constants::BARCODE_MAX_HEIGHT_MM,
            bar_height: 100.0,
            module_width: 1.0,
            placeholder_value: "12345".to_string(),
        }
    }
}

/// Photo overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Smallest box-label scale in percent
    pub box_scale_min: f64,
    /// Largest box-label scale in percent
    pub box_scale_max: f64,
    /// Scale slider step in percent
    pub box_scale_step: f64,
    /// Lower bound of the box-label anchor in percent
    pub box_position_min: f64,
    /// Upper bound of the box-label anchor in percent
    pub box_position_max: f64,
    /// Smallest batch-code font size in container-width percent
    pub batch_font_min: f64,
    /// Largest batch-code font size in container-width percent
    pub batch_font_max: f64,
    /// Maximum number of batch-simulation views
    pub max_views: usize,
    /// Initial height of the positioning guide line in percent
    pub guide_default_y: f64,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            box_scale_min: 10.0,
            box_scale_max: 150.0,
            box_scale_step: 5.0,
            box_position_min: -50.0,
            box_position_max: 150.0,
            batch_font_min: 1.0,
            batch_font_max: 15.0,
            max_views: 3,
            guide_default_y: 85.0,
        }
    }
}

/// Defaults used to prefill the label wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSettings {
    /// Client name shown when the project has none
    pub default_client: String,
    /// Destination shown in the bottom-right corner
    pub default_destination: String,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            default_client: "ANTONIO PUIG S.A.".to_string(),
            default_destination: "BARCELONA".to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Editor settings
    pub editor: EditorSettings,
    /// Barcode settings
    pub barcode: BarcodeSettings,
    /// Overlay settings
    pub overlay: OverlaySettings,
    /// Wizard defaults
    pub wizard: WizardSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/labelkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let editor = &self.editor;
        if editor.pixels_per_mm <= 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.pixels_per_mm",
                editor.pixels_per_mm,
            ));
        }
        if editor.overlay_pixels_per_mm <= 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.overlay_pixels_per_mm",
                editor.overlay_pixels_per_mm,
            ));
        }
        if editor.snap_threshold_px < 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.snap_threshold_px",
                editor.snap_threshold_px,
            ));
        }
        if editor.min_element_mm <= 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.min_element_mm",
                editor.min_element_mm,
            ));
        }
        if editor.history_limit == Some(0) {
            return Err(ConfigError::out_of_range("editor.history_limit", 0));
        }
        if editor.rotation_step_deg <= 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.rotation_step_deg",
                editor.rotation_step_deg,
            ));
        }

        let barcode = &self.barcode;
        if barcode.max_width_mm < editor.min_element_mm {
            return Err(ConfigError::out_of_range(
                "barcode.max_width_mm",
                barcode.max_width_mm,
            ));
        }
        if barcode.max_height_mm < editor.min_element_mm {
            return Err(ConfigError::out_of_range(
                "barcode.max_height_mm",
                barcode.max_height_mm,
            ));
        }
        if barcode.bar_height <= 0.0 {
            return Err(ConfigError::out_of_range(
                "barcode.bar_height",
                barcode.bar_height,
            ));
        }
        if barcode.module_width <= 0.0 {
            return Err(ConfigError::out_of_range(
                "barcode.module_width",
                barcode.module_width,
            ));
        }

        let overlay = &self.overlay;
        if overlay.box_scale_min <= 0.0 || overlay.box_scale_min > overlay.box_scale_max {
            return Err(ConfigError::out_of_range(
                "overlay.box_scale_min",
                overlay.box_scale_min,
            ));
        }
        if overlay.box_position_min > overlay.box_position_max {
            return Err(ConfigError::out_of_range(
                "overlay.box_position_min",
                overlay.box_position_min,
            ));
        }
        if overlay.batch_font_min <= 0.0 || overlay.batch_font_min > overlay.batch_font_max {
            return Err(ConfigError::out_of_range(
                "overlay.batch_font_min",
                overlay.batch_font_min,
            ));
        }
        if overlay.max_views == 0 {
            return Err(ConfigError::out_of_range("overlay.max_views", 0));
        }
        if !(0.0..=100.0).contains(&overlay.guide_default_y) {
            return Err(ConfigError::out_of_range(
                "overlay.guide_default_y",
                overlay.guide_default_y,
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
