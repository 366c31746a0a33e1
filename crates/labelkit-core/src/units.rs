//! Unit conversion utilities
//!
//! Maps physical millimetres to device pixels and to percentage-relative
//! placements. All functions are total and never clamp; callers decide
//! which range applies to their surface.

use crate::constants::DEFAULT_PIXELS_PER_MM;

/// Converts a length in millimetres to device pixels.
///
/// * `value_mm` - Length in millimetres
/// * `pixels_per_mm` - Device scale of the target surface
pub fn mm_to_px(value_mm: f64, pixels_per_mm: f64) -> f64 {
    value_mm * pixels_per_mm
}

/// Converts a length in device pixels back to millimetres.
///
/// A zero scale yields a non-finite result rather than a panic, matching
/// the plain arithmetic of [`mm_to_px`].
pub fn px_to_mm(value_px: f64, pixels_per_mm: f64) -> f64 {
    value_px / pixels_per_mm
}

/// Converts a pixel offset inside a container into a percentage of its extent.
pub fn px_to_percent(value_px: f64, extent_px: f64) -> f64 {
    value_px / extent_px * 100.0
}

/// Converts a percentage of a container extent into a pixel offset.
pub fn percent_to_px(percent: f64, extent_px: f64) -> f64 {
    percent / 100.0 * extent_px
}

/// Ratio between a surface scale and the reference editor scale.
///
/// Font sizes and stroke widths are authored in pixels at the reference
/// scale and multiplied by this factor on other surfaces.
pub fn surface_factor(pixels_per_mm: f64) -> f64 {
    pixels_per_mm / DEFAULT_PIXELS_PER_MM
}

/// Rounds a millimetre value to one decimal place for display.
pub fn round_to_tenth(value_mm: f64) -> f64 {
    (value_mm * 10.0).round() / 10.0
}

/// Format a millimetre length for display.
///
/// Whole values print without decimals, everything else with one.
pub fn format_mm(value_mm: f64) -> String {
    let rounded = round_to_tenth(value_mm);
    if rounded.fract().abs() < f64::EPSILON {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}
