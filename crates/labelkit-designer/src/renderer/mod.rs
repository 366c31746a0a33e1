//! Dual-surface label renderer.
//!
//! [`LabelRenderer::render`] turns a [`LabelConfig`] into a [`LabelScene`] of
//! positioned nodes at a given pixels-per-millimetre scale. The same scene
//! feeds the interactive editor, the flat document preview and the photo
//! overlay; only the scale and the outer composite transform differ.
//!
//! Per element the transform is: place at `(x, y) * scale`, rotate about
//! the element's own centre, then shift left by the anchor correction of its
//! `text_align`.

pub mod svg;

use std::collections::{HashMap, HashSet};

use lyon::math::{point, vector, Angle, Transform};

use labelkit_core::{surface_factor, Point, Rect, Size};
use labelkit_settings::EditorSettings;

use crate::barcode::{BarcodeGraphic, BarcodeRequest, BarcodeSymbol, SymbolRenderer};
use crate::font_manager::TextMetrics;
use crate::measure::ElementMeasurer;
use crate::metadata::{resolve_field, MetadataResolver};
use crate::model::{ElementKind, ElementType, LabelConfig, LabelElement};

/// Where a scene is going to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Interactive editing canvas.
    Editor,
    /// Flat label in the printable preview.
    Preview,
    /// Label composited onto a product photograph.
    Overlay,
}

impl Surface {
    pub fn pixels_per_mm(&self, settings: &EditorSettings) -> f64 {
        match self {
            Self::Editor | Self::Preview => settings.pixels_per_mm,
            Self::Overlay => settings.overlay_pixels_per_mm,
        }
    }
}

/// Visual form of a scene node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    /// Monospace text, single line.
    Text {
        value: String,
        font_px: f64,
        bold: bool,
        /// Baseline offset from the top of the node.
        ascent: f64,
    },
    Barcode(BarcodeGraphic),
    /// Unfilled rectangle; the border sits outside the content box.
    Frame { border_px: f64 },
}

/// One element placed on the scene, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: String,
    pub element_type: ElementType,
    /// Anchor position before the anchor correction.
    pub left: f64,
    pub top: f64,
    /// Rendered box size.
    pub size: Size,
    pub rotation: f64,
    /// Fraction of the width the node is shifted left.
    pub anchor_shift: f64,
    pub content: NodeContent,
}

impl SceneNode {
    /// Maps node-local coordinates (origin at the box's top-left corner)
    /// onto the scene.
    pub fn transform(&self) -> Transform {
        let cx = self.size.width / 2.0;
        let cy = self.size.height / 2.0;
        Transform::translation(
            (-self.anchor_shift * self.size.width - cx) as f32,
            -cy as f32,
        )
        .then_rotate(Angle::degrees(self.rotation as f32))
        .then_translate(vector((self.left + cx) as f32, (self.top + cy) as f32))
    }

    /// Unrotated footprint after the anchor correction.
    pub fn footprint(&self) -> Rect {
        Rect::new(
            self.left - self.anchor_shift * self.size.width,
            self.top,
            self.size.width,
            self.size.height,
        )
    }

    /// Where a node-local point lands on the scene.
    pub fn map_point(&self, local: Point) -> Point {
        let p = self
            .transform()
            .transform_point(point(local.x as f32, local.y as f32));
        Point::new(p.x as f64, p.y as f64)
    }

    pub fn is_resizable(&self) -> bool {
        matches!(self.element_type, ElementType::Barcode | ElementType::Box)
    }
}

/// A rendered label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScene {
    pub width_px: f64,
    pub height_px: f64,
    pub pixels_per_mm: f64,
    /// Paint order, last on top.
    pub nodes: Vec<SceneNode>,
}

impl LabelScene {
    pub fn size(&self) -> Size {
        Size::new(self.width_px, self.height_px)
    }

    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Topmost node whose unrotated footprint contains `pointer`.
    pub fn hit_test(&self, pointer: Point) -> Option<&SceneNode> {
        self.nodes
            .iter()
            .rev()
            .find(|n| n.footprint().contains(pointer))
    }
}

impl ElementMeasurer for LabelScene {
    fn measure(&self, id: &str) -> Option<Size> {
        self.node(id).map(|n| n.size)
    }
}

/// Renders labels, keeping one cached barcode symbol per element so that
/// symbols regenerate only when their inputs change.
pub struct LabelRenderer<'m> {
    metrics: &'m dyn TextMetrics,
    symbols: SymbolRenderer,
    cache: HashMap<String, BarcodeSymbol>,
}

impl<'m> LabelRenderer<'m> {
    pub fn new(metrics: &'m dyn TextMetrics) -> Self {
        Self::with_symbol_renderer(metrics, SymbolRenderer::default())
    }

    pub fn with_symbol_renderer(metrics: &'m dyn TextMetrics, symbols: SymbolRenderer) -> Self {
        Self {
            metrics,
            symbols,
            cache: HashMap::new(),
        }
    }

    /// Renders `config` at `pixels_per_mm`, resolving field elements
    /// through `resolver`.
    pub fn render(
        &mut self,
        config: &LabelConfig,
        resolver: &dyn MetadataResolver,
        pixels_per_mm: f64,
    ) -> LabelScene {
        let live: HashSet<&str> = config.elements.iter().map(|e| e.id.as_str()).collect();
        self.cache.retain(|id, _| live.contains(id.as_str()));

        let nodes = config
            .elements
            .iter()
            .map(|element| self.render_element(element, resolver, pixels_per_mm))
            .collect();

        LabelScene {
            width_px: config.width_mm * pixels_per_mm,
            height_px: config.height_mm * pixels_per_mm,
            pixels_per_mm,
            nodes,
        }
    }

    /// How many times the symbol for `id` has been generated.
    pub fn symbol_generations(&self, id: &str) -> Option<usize> {
        self.cache.get(id).map(|s| s.generations())
    }

    fn render_element(
        &mut self,
        element: &LabelElement,
        resolver: &dyn MetadataResolver,
        pixels_per_mm: f64,
    ) -> SceneNode {
        let factor = surface_factor(pixels_per_mm);
        let (size, content) = match &element.kind {
            ElementKind::Text | ElementKind::Field => {
                let value = if element.kind == ElementKind::Field {
                    resolve_field(resolver, &element.text)
                } else {
                    element.text.clone()
                };
                let font_px = element.font_size * factor;
                let (width, height) = self.metrics.text_size(&value, font_px, element.is_bold);
                let ascent = self.metrics.ascent(font_px);
                (
                    Size::new(width, height),
                    NodeContent::Text {
                        value,
                        font_px,
                        bold: element.is_bold,
                        ascent,
                    },
                )
            }
            ElementKind::Barcode(spec) => {
                let request = BarcodeRequest {
                    value: element.text.clone(),
                    format: spec.barcode_format,
                    show_text: spec.show_text,
                    font_size: element.font_size,
                    width_px: spec.width * pixels_per_mm,
                    height_px: spec.height * pixels_per_mm,
                };
                let graphic = self
                    .cache
                    .entry(element.id.clone())
                    .or_default()
                    .update(&self.symbols, &request)
                    .clone();
                (
                    Size::new(request.width_px, request.height_px),
                    NodeContent::Barcode(graphic),
                )
            }
            ElementKind::Box(spec) => {
                let border_px = spec.border_thickness * factor;
                (
                    Size::new(
                        spec.width * pixels_per_mm + 2.0 * border_px,
                        spec.height * pixels_per_mm + 2.0 * border_px,
                    ),
                    NodeContent::Frame { border_px },
                )
            }
        };

        SceneNode {
            id: element.id.clone(),
            element_type: element.element_type(),
            left: element.x * pixels_per_mm,
            top: element.y * pixels_per_mm,
            size,
            rotation: element.rotation,
            anchor_shift: element.text_align.anchor_shift(),
            content,
        }
    }
}

/// Renders without a symbol cache.
pub fn render(
    config: &LabelConfig,
    resolver: &dyn MetadataResolver,
    pixels_per_mm: f64,
    metrics: &dyn TextMetrics,
) -> LabelScene {
    LabelRenderer::new(metrics).render(config, resolver, pixels_per_mm)
}
