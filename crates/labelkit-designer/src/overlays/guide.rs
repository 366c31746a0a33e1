//! Positioning guide: a horizontal reference line over a product photo
//! showing where the label goes.

use serde::{Deserialize, Serialize};

use labelkit_core::{px_to_percent, Size};
use labelkit_settings::OverlaySettings;

use super::image::refresh_aspect_ratio;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositioningGuide {
    pub image_url: Option<String>,
    pub aspect_ratio: Option<f64>,
    /// Line position in percent of the photo height.
    pub guide_y: f64,
    pub instruction: String,
    pub measurement: String,
    pub show_guide: bool,
    #[serde(skip)]
    default_y: f64,
}

impl Default for PositioningGuide {
    fn default() -> Self {
        Self::new(&OverlaySettings::default())
    }
}

impl PositioningGuide {
    pub fn new(settings: &OverlaySettings) -> Self {
        Self {
            image_url: None,
            aspect_ratio: Some(3.0 / 4.0),
            guide_y: settings.guide_default_y,
            instruction: "Altura etiqueta".to_string(),
            measurement: "12mm +-1 desde la base".to_string(),
            show_guide: true,
            default_y: settings.guide_default_y,
        }
    }

    /// A new photo puts the line back at its default height.
    pub fn set_image(&mut self, uri: impl Into<String>) {
        self.image_url = Some(uri.into());
        self.guide_y = self.default_y;
    }

    pub fn clear_image(&mut self) {
        self.image_url = None;
    }

    pub fn on_image_loaded(&mut self, natural: Size) -> bool {
        refresh_aspect_ratio(&mut self.aspect_ratio, natural)
    }

    /// Moves the line to the pointer row, clamped to the photo.
    pub fn drag_to(&mut self, pointer_y: f64, container_height: f64) {
        if container_height <= 0.0 {
            return;
        }
        self.guide_y = px_to_percent(pointer_y, container_height).clamp(0.0, 100.0);
    }

    pub fn caption(&self) -> String {
        format!("{}: {}", self.instruction, self.measurement)
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", self.guide_y.round())
    }
}
