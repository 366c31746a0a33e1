//! Batch-code marking simulation over product photos.

use serde::{Deserialize, Serialize};

use labelkit_core::{px_to_percent, Point, Size};
use labelkit_settings::OverlaySettings;

use super::image::refresh_aspect_ratio;

/// Colour used to imitate a laser-etched mark.
pub const LASER_COLOR: &str = "rgba(255,255,255,0.85)";

/// Default ink colour.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// One simulated view: a photo with a batch code printed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSimulationItem {
    pub id: String,
    pub name: String,
    pub base_image_url: Option<String>,
    pub aspect_ratio: Option<f64>,
    pub batch_code: String,
    pub legal_text: String,
    /// Anchor position in percent of the photo.
    pub position_x: f64,
    pub position_y: f64,
    /// Font size in percent of the photo width.
    pub font_size: f64,
    pub rotation: f64,
    pub text_color: String,
    pub is_laser: bool,
}

impl BatchSimulationItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        batch_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_image_url: None,
            aspect_ratio: Some(4.0 / 3.0),
            batch_code: batch_code.into(),
            legal_text: String::new(),
            position_x: 50.0,
            position_y: 50.0,
            font_size: 5.0,
            rotation: 0.0,
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            is_laser: false,
        }
    }

    /// Colour the mark is drawn in.
    pub fn display_color(&self) -> &str {
        if self.is_laser {
            LASER_COLOR
        } else {
            &self.text_color
        }
    }

    /// Font size in pixels for a photo `container_width` wide.
    pub fn font_px(&self, container_width: f64) -> f64 {
        self.font_size * container_width / 100.0
    }

    /// Mark anchor in container pixels.
    pub fn anchor(&self, container: Size) -> Point {
        Point::new(
            self.position_x / 100.0 * container.width,
            self.position_y / 100.0 * container.height,
        )
    }
}

/// Up to a configured number of batch-mark views, at least one of which
/// always exists and one of which is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSimulation {
    views: Vec<BatchSimulationItem>,
    active_id: String,
    #[serde(skip)]
    limits: OverlaySettings,
}

impl Default for BatchSimulation {
    fn default() -> Self {
        Self::new(OverlaySettings::default())
    }
}

impl BatchSimulation {
    /// Starts with the single main view.
    pub fn new(limits: OverlaySettings) -> Self {
        let main = BatchSimulationItem::new("1", "Vista Principal", "");
        Self {
            active_id: main.id.clone(),
            views: vec![main],
            limits,
        }
    }

    pub fn set_limits(&mut self, limits: OverlaySettings) {
        self.limits = limits;
    }

    pub fn views(&self) -> &[BatchSimulationItem] {
        &self.views
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    /// The active view, or the first one if the active id went stale.
    pub fn active(&self) -> Option<&BatchSimulationItem> {
        self.views
            .iter()
            .find(|v| v.id == self.active_id)
            .or_else(|| self.views.first())
    }

    pub fn active_mut(&mut self) -> Option<&mut BatchSimulationItem> {
        let index = self
            .views
            .iter()
            .position(|v| v.id == self.active_id)
            .unwrap_or(0);
        self.views.get_mut(index)
    }

    pub fn set_active(&mut self, id: &str) -> bool {
        if self.views.iter().any(|v| v.id == id) {
            self.active_id = id.to_string();
            true
        } else {
            false
        }
    }

    /// Adds a view and makes it active. Returns `None` once the view limit
    /// is reached.
    pub fn add_view(&mut self) -> Option<&str> {
        if self.views.len() >= self.limits.max_views {
            return None;
        }
        let view = BatchSimulationItem::new(
            uuid::Uuid::new_v4().to_string(),
            format!("Vista {}", self.views.len() + 1),
            "LOTE 12345",
        );
        self.active_id = view.id.clone();
        self.views.push(view);
        Some(&self.active_id)
    }

    /// Removes a view unless it is the last one. The first remaining view
    /// becomes active when the active one is removed.
    pub fn remove_view(&mut self, id: &str) -> bool {
        if self.views.len() <= 1 {
            return false;
        }
        let Some(index) = self.views.iter().position(|v| v.id == id) else {
            return false;
        };
        self.views.remove(index);
        if self.active_id == id {
            if let Some(first) = self.views.first() {
                self.active_id = first.id.clone();
            }
        }
        true
    }

    /// Moves the active mark to the pointer, clamped to the photo.
    pub fn drag_to(&mut self, pointer: Point, container: Size) {
        let x = px_to_percent(pointer.x, container.width).clamp(0.0, 100.0);
        let y = px_to_percent(pointer.y, container.height).clamp(0.0, 100.0);
        if let Some(view) = self.active_mut() {
            view.position_x = x;
            view.position_y = y;
        }
    }

    pub fn rotate_left(&mut self) {
        if let Some(view) = self.active_mut() {
            view.rotation -= 90.0;
        }
    }

    pub fn rotate_right(&mut self) {
        if let Some(view) = self.active_mut() {
            view.rotation += 90.0;
        }
    }

    /// Slider rotation, limited to [-180, 180].
    pub fn set_rotation(&mut self, degrees: f64) {
        if let Some(view) = self.active_mut() {
            view.rotation = degrees.clamp(-180.0, 180.0);
        }
    }

    pub fn set_font_size(&mut self, percent: f64) {
        let (min, max) = (self.limits.batch_font_min, self.limits.batch_font_max);
        if let Some(view) = self.active_mut() {
            view.font_size = percent.clamp(min, max);
        }
    }

    /// Picking an ink colour turns laser mode off.
    pub fn set_text_color(&mut self, color: impl Into<String>) {
        if let Some(view) = self.active_mut() {
            view.text_color = color.into();
            view.is_laser = false;
        }
    }

    pub fn set_laser(&mut self, enabled: bool) {
        if let Some(view) = self.active_mut() {
            view.is_laser = enabled;
        }
    }

    pub fn set_image(&mut self, uri: Option<String>) {
        if let Some(view) = self.active_mut() {
            view.base_image_url = uri;
        }
    }

    /// Records the natural size of the active view's photo.
    pub fn on_image_loaded(&mut self, natural: Size) -> bool {
        self.active_mut()
            .map(|view| refresh_aspect_ratio(&mut view.aspect_ratio, natural))
            .unwrap_or(false)
    }
}
