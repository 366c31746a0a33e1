//! LabelKit Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{BarcodeSettings, Config, EditorSettings, OverlaySettings, WizardSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
