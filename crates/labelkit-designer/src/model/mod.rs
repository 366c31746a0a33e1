//! Label document model.
//!
//! [`LabelConfig`] is the single source of truth for a layout. It carries no
//! interaction or history state; the editor and the template generators both
//! mutate it through the same operations.

mod element;
mod label;
mod patch;

pub use element::{
    BarcodeFormat, BarcodeSpec, ElementKind, ElementType, FrameSpec, LabelElement, TextAlign,
};
pub use label::{BarcodeLimits, LabelConfig};
pub use patch::{ElementPatch, BORDER_RANGE};
