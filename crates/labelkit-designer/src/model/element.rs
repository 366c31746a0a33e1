use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use labelkit_core::Size;

/// Barcode symbology selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BarcodeFormat {
    #[default]
    #[serde(rename = "CODE128")]
    Code128,
    #[serde(rename = "CODE39")]
    Code39,
    #[serde(rename = "EAN13")]
    Ean13,
    #[serde(rename = "UPC")]
    Upc,
}

impl BarcodeFormat {
    pub const ALL: [BarcodeFormat; 4] = [Self::Code128, Self::Code39, Self::Ean13, Self::Upc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code128 => "CODE128",
            Self::Code39 => "CODE39",
            Self::Ean13 => "EAN13",
            Self::Upc => "UPC",
        }
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarcodeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown barcode format: {s}"))
    }
}

/// Horizontal alignment of an element's content around its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Fraction of the element's own width it is shifted left so that the
    /// stored `x` names its left edge, centre or right edge.
    pub fn anchor_shift(&self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }
}

/// Variant tag used when creating elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Field,
    Barcode,
    Box,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Field => write!(f, "field"),
            Self::Barcode => write!(f, "barcode"),
            Self::Box => write!(f, "box"),
        }
    }
}

fn default_show_text() -> bool {
    true
}

fn default_border() -> f64 {
    1.0
}

/// Geometry and symbology of a barcode element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeSpec {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub barcode_format: BarcodeFormat,
    #[serde(default = "default_show_text")]
    pub show_text: bool,
}

/// Geometry of a rectangular frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSpec {
    pub width: f64,
    pub height: f64,
    /// Stroke width in pixels at the reference scale.
    #[serde(default = "default_border")]
    pub border_thickness: f64,
}

/// Kind-specific data of a [`LabelElement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// Literal text.
    Text,
    /// Text resolved from project metadata by symbolic name.
    Field,
    Barcode(BarcodeSpec),
    Box(FrameSpec),
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Text => ElementType::Text,
            Self::Field => ElementType::Field,
            Self::Barcode(_) => ElementType::Barcode,
            Self::Box(_) => ElementType::Box,
        }
    }
}

/// One placed visual primitive on a label.
///
/// Positions and sizes are millimetres. The meaning of `x` depends on
/// `text_align`, see [`TextAlign::anchor_shift`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelElement {
    pub id: String,
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(default)]
    pub text: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub font_size: f64,
    #[serde(default)]
    pub is_bold: bool,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub text_align: TextAlign,
}

impl LabelElement {
    /// Builds an element of the given type with the editor's creation
    /// defaults and a fresh id.
    pub fn with_defaults(element_type: ElementType, text: impl Into<String>) -> Self {
        let kind = match element_type {
            ElementType::Text => ElementKind::Text,
            ElementType::Field => ElementKind::Field,
            ElementType::Barcode => ElementKind::Barcode(BarcodeSpec {
                width: 80.0,
                height: 40.0,
                barcode_format: BarcodeFormat::Code128,
                show_text: true,
            }),
            ElementType::Box => ElementKind::Box(FrameSpec {
                width: 50.0,
                height: 20.0,
                border_thickness: 2.0,
            }),
        };
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            text: text.into(),
            x: 5.0,
            y: 5.0,
            font_size: if element_type == ElementType::Barcode {
                12.0
            } else {
                15.0
            },
            is_bold: true,
            rotation: 0.0,
            text_align: TextAlign::Left,
        }
    }

    /// Text element at a fixed position, used by the template generators.
    pub fn text(id: &str, text: impl Into<String>, x: f64, y: f64, align: TextAlign) -> Self {
        Self {
            id: id.to_string(),
            kind: ElementKind::Text,
            text: text.into(),
            x,
            y,
            font_size: 15.0,
            is_bold: true,
            rotation: 0.0,
            text_align: align,
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// Whether the element shows content resolved or typed as text.
    pub fn is_textual(&self) -> bool {
        matches!(self.kind, ElementKind::Text | ElementKind::Field)
    }

    /// Only barcodes and frames carry a stored size and a resize handle.
    pub fn is_resizable(&self) -> bool {
        matches!(self.kind, ElementKind::Barcode(_) | ElementKind::Box(_))
    }

    /// Stored size in millimetres, `None` for text-like elements whose size
    /// is intrinsic to their rendered content.
    pub fn size(&self) -> Option<Size> {
        match &self.kind {
            ElementKind::Barcode(spec) => Some(Size::new(spec.width, spec.height)),
            ElementKind::Box(spec) => Some(Size::new(spec.width, spec.height)),
            ElementKind::Text | ElementKind::Field => None,
        }
    }

    /// Sets the stored size. Ignored for text-like elements.
    pub fn set_size(&mut self, width: Option<f64>, height: Option<f64>) {
        let (w, h) = match &mut self.kind {
            ElementKind::Barcode(spec) => (&mut spec.width, &mut spec.height),
            ElementKind::Box(spec) => (&mut spec.width, &mut spec.height),
            ElementKind::Text | ElementKind::Field => return,
        };
        if let Some(width) = width {
            *w = width;
        }
        if let Some(height) = height {
            *h = height;
        }
    }

    pub fn barcode(&self) -> Option<&BarcodeSpec> {
        match &self.kind {
            ElementKind::Barcode(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn frame(&self) -> Option<&FrameSpec> {
        match &self.kind {
            ElementKind::Box(spec) => Some(spec),
            _ => None,
        }
    }
}
