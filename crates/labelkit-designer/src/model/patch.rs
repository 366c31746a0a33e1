use super::element::{BarcodeFormat, ElementKind, LabelElement, TextAlign};

/// Smallest and largest accepted frame border, in pixels.
pub const BORDER_RANGE: (f64, f64) = (1.0, 10.0);

/// Partial changes to a [`LabelElement`].
///
/// Fields that do not apply to the element's kind are ignored, e.g. a width
/// on a text element or a symbology on a frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub text: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub font_size: Option<f64>,
    pub is_bold: Option<bool>,
    pub border_thickness: Option<f64>,
    pub rotation: Option<f64>,
    pub barcode_format: Option<BarcodeFormat>,
    pub show_text: Option<bool>,
    pub text_align: Option<TextAlign>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn bold(mut self, is_bold: bool) -> Self {
        self.is_bold = Some(is_bold);
        self
    }

    pub fn border_thickness(mut self, border: f64) -> Self {
        self.border_thickness = Some(border);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn barcode_format(mut self, format: BarcodeFormat) -> Self {
        self.barcode_format = Some(format);
        self
    }

    pub fn show_text(mut self, show: bool) -> Self {
        self.show_text = Some(show);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Copies every set field onto `element`. No size limits are applied
    /// here, see [`LabelConfig::update_element`](super::LabelConfig::update_element).
    pub fn apply_to(&self, element: &mut LabelElement) {
        if let Some(text) = &self.text {
            element.text = text.clone();
        }
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(font_size) = self.font_size {
            element.font_size = font_size;
        }
        if let Some(is_bold) = self.is_bold {
            element.is_bold = is_bold;
        }
        if let Some(rotation) = self.rotation {
            element.rotation = rotation;
        }
        if let Some(align) = self.text_align {
            element.text_align = align;
        }
        element.set_size(self.width, self.height);

        match &mut element.kind {
            ElementKind::Barcode(spec) => {
                if let Some(format) = self.barcode_format {
                    spec.barcode_format = format;
                }
                if let Some(show) = self.show_text {
                    spec.show_text = show;
                }
            }
            ElementKind::Box(spec) => {
                if let Some(border) = self.border_thickness {
                    spec.border_thickness = border.clamp(BORDER_RANGE.0, BORDER_RANGE.1);
                }
            }
            ElementKind::Text | ElementKind::Field => {}
        }
    }
}
