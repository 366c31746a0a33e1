//! Label composited onto a box photograph.
//!
//! The label is anchored by its centre at a percentage of the photo, then
//! rotated and scaled about that centre. Positions may leave the photo by
//! half its size in either direction.

use lyon::math::{point, vector, Angle, Transform};
use serde::{Deserialize, Serialize};

use labelkit_core::{px_to_percent, Point, Size};
use labelkit_settings::OverlaySettings;

use super::image::refresh_aspect_ratio;
use crate::model::LabelConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxLabelSimulation {
    pub box_image_url: Option<String>,
    pub aspect_ratio: Option<f64>,
    pub label_config: LabelConfig,
    pub position_x: f64,
    pub position_y: f64,
    /// Percent, 100 is natural size.
    pub scale: f64,
    pub rotation: f64,
    #[serde(skip)]
    grab_offset: Option<Point>,
    #[serde(skip)]
    limits: OverlaySettings,
}

impl Default for BoxLabelSimulation {
    fn default() -> Self {
        Self::new(OverlaySettings::default())
    }
}

impl BoxLabelSimulation {
    pub fn new(limits: OverlaySettings) -> Self {
        Self {
            box_image_url: None,
            aspect_ratio: Some(4.0 / 3.0),
            label_config: LabelConfig::default(),
            position_x: 50.0,
            position_y: 50.0,
            scale: 100.0,
            rotation: 0.0,
            grab_offset: None,
            limits,
        }
    }

    pub fn set_limits(&mut self, limits: OverlaySettings) {
        self.limits = limits;
    }

    pub fn set_image(&mut self, uri: Option<String>) {
        self.box_image_url = uri;
    }

    pub fn on_image_loaded(&mut self, natural: Size) -> bool {
        refresh_aspect_ratio(&mut self.aspect_ratio, natural)
    }

    /// Label anchor in container pixels.
    pub fn anchor(&self, container: Size) -> Point {
        Point::new(
            self.position_x / 100.0 * container.width,
            self.position_y / 100.0 * container.height,
        )
    }

    /// Maps label-local pixels onto the photo container.
    pub fn composite_transform(&self, container: Size, label_px: Size) -> Transform {
        let anchor = self.anchor(container);
        let factor = (self.scale / 100.0) as f32;
        Transform::translation(-label_px.width as f32 / 2.0, -label_px.height as f32 / 2.0)
            .then_scale(factor, factor)
            .then_rotate(Angle::degrees(self.rotation as f32))
            .then_translate(vector(anchor.x as f32, anchor.y as f32))
    }

    /// Whether `pointer` falls on the transformed label.
    pub fn label_contains(&self, pointer: Point, container: Size, label_px: Size) -> bool {
        let Some(inverse) = self.composite_transform(container, label_px).inverse() else {
            return false;
        };
        let local = inverse.transform_point(point(pointer.x as f32, pointer.y as f32));
        let (x, y) = (local.x as f64, local.y as f64);
        (0.0..=label_px.width).contains(&x) && (0.0..=label_px.height).contains(&y)
    }

    /// Grabs the label, remembering where on it the pointer landed.
    pub fn begin_drag(&mut self, pointer: Point, container: Size) {
        let anchor = self.anchor(container);
        self.grab_offset = Some(Point::new(pointer.x - anchor.x, pointer.y - anchor.y));
    }

    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    /// Follows the pointer while dragging. Returns false when no drag is in
    /// progress or the container is degenerate.
    pub fn drag_to(&mut self, pointer: Point, container: Size) -> bool {
        let Some(offset) = self.grab_offset else {
            return false;
        };
        if container.width <= 0.0 || container.height <= 0.0 {
            return false;
        }
        let target = pointer.offset_by(-offset.x, -offset.y);
        let (min, max) = (self.limits.box_position_min, self.limits.box_position_max);
        self.position_x = px_to_percent(target.x, container.width).clamp(min, max);
        self.position_y = px_to_percent(target.y, container.height).clamp(min, max);
        true
    }

    pub fn end_drag(&mut self) {
        self.grab_offset = None;
    }

    pub fn set_scale(&mut self, percent: f64) {
        self.scale = percent.clamp(self.limits.box_scale_min, self.limits.box_scale_max);
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale + self.limits.box_scale_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale - self.limits.box_scale_step);
    }

    pub fn rotate_left(&mut self) {
        self.rotation -= 90.0;
    }

    pub fn rotate_right(&mut self) {
        self.rotation += 90.0;
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees.clamp(-180.0, 180.0);
    }
}
