use serde::{Deserialize, Serialize};

use labelkit_core::constants::{BARCODE_MAX_HEIGHT_MM, BARCODE_MAX_WIDTH_MM};
use labelkit_settings::BarcodeSettings;

use super::element::{ElementKind, ElementType, LabelElement};
use super::patch::ElementPatch;

/// Absolute caps on barcode size, before the label's own size is taken
/// into account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarcodeLimits {
    pub max_width_mm: f64,
    pub max_height_mm: f64,
}

impl Default for BarcodeLimits {
    fn default() -> Self {
        Self {
            max_width_mm: BARCODE_MAX_WIDTH_MM,
            max_height_mm: BARCODE_MAX_HEIGHT_MM,
        }
    }
}

impl From<&BarcodeSettings> for BarcodeLimits {
    fn from(settings: &BarcodeSettings) -> Self {
        Self {
            max_width_mm: settings.max_width_mm,
            max_height_mm: settings.max_height_mm,
        }
    }
}

/// The complete design for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelConfig {
    pub width_mm: f64,
    pub height_mm: f64,
    /// Paint order: later elements are drawn on top.
    #[serde(default)]
    pub elements: Vec<LabelElement>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

impl LabelConfig {
    /// Creates an empty label of the given size.
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            elements: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: &str) -> Option<&LabelElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut LabelElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    /// Largest barcode width and height this label accepts.
    pub fn barcode_bounds(&self, limits: &BarcodeLimits) -> (f64, f64) {
        (
            self.width_mm.min(limits.max_width_mm),
            self.height_mm.min(limits.max_height_mm),
        )
    }

    /// Creates an element with the creation defaults, appends it on top of
    /// the paint order and returns its id.
    pub fn create_element(&mut self, element_type: ElementType, text: impl Into<String>) -> String {
        let element = LabelElement::with_defaults(element_type, text);
        let id = element.id.clone();
        self.push(element);
        id
    }

    /// Appends an element, applying the barcode size limits.
    pub fn push(&mut self, element: LabelElement) {
        self.push_within(element, &BarcodeLimits::default());
    }

    pub fn push_within(&mut self, mut element: LabelElement, limits: &BarcodeLimits) {
        self.clamp_barcode(&mut element, limits);
        self.elements.push(element);
    }

    /// Applies `patch` to the element with `id`. Returns `false` when no
    /// such element exists.
    pub fn update_element(&mut self, id: &str, patch: &ElementPatch) -> bool {
        self.update_element_within(id, patch, &BarcodeLimits::default())
    }

    /// [`update_element`](Self::update_element) with explicit barcode caps.
    pub fn update_element_within(
        &mut self,
        id: &str,
        patch: &ElementPatch,
        limits: &BarcodeLimits,
    ) -> bool {
        let bounds = self.barcode_bounds(limits);
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        patch.apply_to(element);
        clamp_to(element, bounds);
        true
    }

    /// Removes and returns the element with `id`.
    pub fn remove_element(&mut self, id: &str) -> Option<LabelElement> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Changes the label's physical size. Element positions are left as they
    /// are even when they fall outside the new bounds.
    pub fn set_label_size(&mut self, width_mm: f64, height_mm: f64) {
        self.width_mm = width_mm;
        self.height_mm = height_mm;
    }

    fn clamp_barcode(&self, element: &mut LabelElement, limits: &BarcodeLimits) {
        clamp_to(element, self.barcode_bounds(limits));
    }
}

fn clamp_to(element: &mut LabelElement, (max_width, max_height): (f64, f64)) {
    if let ElementKind::Barcode(spec) = &mut element.kind {
        if spec.width > max_width {
            spec.width = max_width;
        }
        if spec.height > max_height {
            spec.height = max_height;
        }
    }
}
