//! Snap-to-guide for dragged elements.
//!
//! Each axis is snapped independently against the label edges and centre,
//! then against the raw anchors of the other elements. The first candidate
//! closer than the threshold wins.

use smallvec::SmallVec;

use labelkit_core::Point;

use super::session::SnapGuides;
use crate::model::LabelConfig;

type Candidates = SmallVec<[f64; 16]>;

/// Where a dragged element lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOutcome {
    /// Resulting anchor in millimetres, never negative.
    pub x_mm: f64,
    pub y_mm: f64,
    pub guides: SnapGuides,
}

fn snap_axis(value: f64, candidates: &[f64], threshold_px: f64) -> Option<f64> {
    candidates
        .iter()
        .copied()
        .find(|candidate| (value - candidate).abs() < threshold_px)
}

fn candidates(
    config: &LabelConfig,
    dragged_id: &str,
    extent_px: f64,
    pixels_per_mm: f64,
    coordinate: impl Fn(&crate::model::LabelElement) -> f64,
) -> Candidates {
    let mut out: Candidates = SmallVec::new();
    out.extend([0.0, extent_px, extent_px / 2.0]);
    out.extend(
        config
            .elements
            .iter()
            .filter(|e| e.id != dragged_id)
            .map(|e| coordinate(e) * pixels_per_mm),
    );
    out
}

/// Snaps a pointer position (canvas pixels) for the element `dragged_id`.
pub fn snap_position(
    config: &LabelConfig,
    dragged_id: &str,
    pointer: Point,
    pixels_per_mm: f64,
    threshold_px: f64,
) -> SnapOutcome {
    let xs = candidates(
        config,
        dragged_id,
        config.width_mm * pixels_per_mm,
        pixels_per_mm,
        |e| e.x,
    );
    let ys = candidates(
        config,
        dragged_id,
        config.height_mm * pixels_per_mm,
        pixels_per_mm,
        |e| e.y,
    );

    let guides = SnapGuides {
        x: snap_axis(pointer.x, &xs, threshold_px),
        y: snap_axis(pointer.y, &ys, threshold_px),
    };
    let final_x = guides.x.unwrap_or(pointer.x);
    let final_y = guides.y.unwrap_or(pointer.y);

    SnapOutcome {
        x_mm: (final_x / pixels_per_mm).max(0.0),
        y_mm: (final_y / pixels_per_mm).max(0.0),
        guides,
    }
}
