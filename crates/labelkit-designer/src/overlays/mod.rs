//! Photo-based previews: batch marks, a positioning guide and a label
//! composited onto a box.

pub mod batch;
pub mod box_label;
pub mod guide;
pub mod image;

pub use batch::{BatchSimulation, BatchSimulationItem, LASER_COLOR};
pub use box_label::BoxLabelSimulation;
pub use guide::PositioningGuide;
pub use image::{container_size, probe_size, refresh_aspect_ratio, ImageError};
