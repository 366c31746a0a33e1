//! Shared constants for the label engine.

/// Device pixels per millimetre for the flat editor and flat preview.
pub const DEFAULT_PIXELS_PER_MM: f64 = 4.0;

/// Device pixels per millimetre used when a label is drawn as a
/// percentage-anchored overlay on a photograph.
pub const OVERLAY_PIXELS_PER_MM: f64 = 4.0;

/// Distance in pixels within which a dragged element snaps to a guide.
pub const SNAP_THRESHOLD_PX: f64 = 8.0;

/// Smallest width or height a resizable element may be given.
pub const MIN_ELEMENT_MM: f64 = 5.0;

/// Margin kept between the label edge and an edge-aligned element.
pub const ALIGN_MARGIN_MM: f64 = 3.0;

/// Hard cap on barcode width regardless of label size.
pub const BARCODE_MAX_WIDTH_MM: f64 = 80.0;

/// Hard cap on barcode height regardless of label size.
pub const BARCODE_MAX_HEIGHT_MM: f64 = 50.0;

/// Increment of the rotation control, in degrees.
pub const ROTATION_STEP_DEG: f64 = 5.0;

/// Rotation range accepted by the rotation control, in degrees.
pub const ROTATION_RANGE_DEG: (f64, f64) = (-180.0, 180.0);
