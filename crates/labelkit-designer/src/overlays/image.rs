//! Background photo bookkeeping shared by the overlay views.

use std::path::{Path, PathBuf};

use labelkit_core::Size;
use thiserror::Error;

/// Natural sizes closer than this are treated as the same aspect ratio.
pub const ASPECT_EPSILON: f64 = 0.01;

/// Errors raised while inspecting a background photo.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The file could not be read or decoded.
    #[error("Failed to probe image {path}: {source}")]
    Probe {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The image has a zero dimension.
    #[error("Image {path} has degenerate size {width}x{height}")]
    Degenerate {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

/// Reads the natural pixel size of a local image without decoding it fully.
pub fn probe_size(path: impl AsRef<Path>) -> Result<Size, ImageError> {
    let path = path.as_ref();
    let (width, height) = image::image_dimensions(path).map_err(|source| ImageError::Probe {
        path: path.to_path_buf(),
        source,
    })?;
    if width == 0 || height == 0 {
        return Err(ImageError::Degenerate {
            path: path.to_path_buf(),
            width,
            height,
        });
    }
    Ok(Size::new(width as f64, height as f64))
}

/// Stores the aspect ratio of `natural` in `current` when it is unset or
/// differs by more than [`ASPECT_EPSILON`]. Returns whether it changed.
pub fn refresh_aspect_ratio(current: &mut Option<f64>, natural: Size) -> bool {
    let Some(ratio) = natural.aspect_ratio() else {
        return false;
    };
    match current {
        Some(existing) if (*existing - ratio).abs() <= ASPECT_EPSILON => false,
        _ => {
            *current = Some(ratio);
            true
        }
    }
}

/// Pixel size of a photo container `width_px` wide.
pub fn container_size(aspect_ratio: f64, width_px: f64) -> Size {
    if aspect_ratio > 0.0 && aspect_ratio.is_finite() {
        Size::new(width_px, width_px / aspect_ratio)
    } else {
        Size::new(width_px, width_px)
    }
}
