//! # LabelKit
//!
//! Millimetre-accurate packaging label layout and rendering:
//! - Typed label elements: text, metadata fields, barcodes, frames
//! - Interactive editing with snapping, alignment and undo/redo
//! - Wizard and standard layout generators
//! - One renderer for the editor canvas, the printable preview and a photo overlay
//!
//! ## Architecture
//!
//! LabelKit is organized as a workspace with multiple crates:
//!
//! 1. **labelkit-core** - Units, geometry, constants, error types
//! 2. **labelkit-settings** - Configuration load/save and validation
//! 3. **labelkit-designer** - Document model, editor, barcodes, renderer, overlays
//! 4. **labelkit** - This crate: re-exports, logging setup and the CLI

pub use labelkit_core::units::format_mm;
pub use labelkit_core::{
    constants, ensure_dimension, mm_to_px, percent_to_px, px_to_mm, px_to_percent,
    surface_factor, Error, Point, Rect, Result, Size, SymbolError,
};
pub use labelkit_designer as designer;
pub use labelkit_designer::{
    generate_wizard_label, render, scene_to_svg, standard_layout, BarcodeFormat, ElementPatch,
    ElementType, LabelConfig, LabelEditor, LabelElement, LabelScene, ProjectMetadata, Surface,
    TextAlign, WizardInput,
};
pub use labelkit_settings::{Config, ConfigError, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, INFO by default
/// - Output on stderr, leaving stdout for rendered documents
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
