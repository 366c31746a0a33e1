//! Alignment of one element against the label.

use std::fmt;

use labelkit_core::{px_to_mm, Size};
use serde::{Deserialize, Serialize};

use crate::model::{ElementPatch, LabelConfig, LabelElement};

/// Alignment types for an element against the label bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    Left,
    #[serde(rename = "center-x")]
    CenterHorizontal,
    Right,
    Top,
    #[serde(rename = "center-y")]
    CenterVertical,
    Bottom,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::CenterHorizontal => "center-x",
            Self::Right => "right",
            Self::Top => "top",
            Self::CenterVertical => "center-y",
            Self::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// Computes the position change that aligns `element`'s rendered box to the
/// label. `measured_px` is the rendered size at `pixels_per_mm`.
///
/// The stored `x` is an anchor, so the target left edge is moved right by the
/// element's anchor correction.
pub fn aligned_patch(
    alignment: Alignment,
    element: &LabelElement,
    measured_px: Size,
    config: &LabelConfig,
    pixels_per_mm: f64,
    margin_mm: f64,
) -> ElementPatch {
    let width = px_to_mm(measured_px.width, pixels_per_mm);
    let height = px_to_mm(measured_px.height, pixels_per_mm);
    let shift = element.text_align.anchor_shift() * width;

    match alignment {
        Alignment::Left => ElementPatch::new().x(margin_mm + shift),
        Alignment::CenterHorizontal => {
            ElementPatch::new().x((config.width_mm - width) / 2.0 + shift)
        }
        Alignment::Right => ElementPatch::new().x(config.width_mm - width - margin_mm + shift),
        Alignment::Top => ElementPatch::new().y(margin_mm),
        Alignment::CenterVertical => ElementPatch::new().y((config.height_mm - height) / 2.0),
        Alignment::Bottom => ElementPatch::new().y(config.height_mm - height - margin_mm),
    }
}
