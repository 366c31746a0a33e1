//! # LabelKit Designer
//!
//! Label layout and rendering engine: a millimetre-accurate document model
//! of typed elements, an interactive editor with snapping, alignment and
//! undo/redo, template generators, barcode symbols, and a renderer that
//! draws the same label on the editor canvas, the flat preview and a photo
//! overlay.
//!
//! ## Architecture
//!
//! ```text
//! Templates ──┐
//!             ├──> LabelConfig (model) ──> LabelRenderer ──> LabelScene ──> SVG
//! LabelEditor ┘        │                        │
//!   ├── EditorSession  └── HistoryStack         ├── SymbolRenderer (barcodes)
//!   ├── snapping                                └── TextMetrics (fonts)
//!   └── alignment ──> ElementMeasurer
//!
//! Overlays (batch marks, positioning guide, box simulation)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use labelkit_designer::{LabelConfig, LabelEditor, ElementType};
//!
//! let mut label = LabelConfig::new(100.0, 100.0);
//! let mut editor = LabelEditor::default();
//! let id = editor.add_element(&mut label, ElementType::Barcode, "12345678");
//! editor.undo(&mut label);
//! ```

pub mod barcode;
pub mod editor;
pub mod font_manager;
pub mod history;
pub mod measure;
pub mod metadata;
pub mod model;
pub mod overlays;
pub mod renderer;
pub mod serialization;
pub mod templates;

pub use barcode::{render_barcode, BarcodeGraphic, BarcodeRequest, BarcodeSymbol, SymbolRenderer};
pub use editor::{
    Alignment, EditorSession, InteractionMode, KeyPress, LabelEditor, ShortcutAction, SnapGuides,
};
pub use font_manager::{default_metrics, FontMetrics, MonospaceMetrics, TextMetrics};
pub use history::HistoryStack;
pub use measure::ElementMeasurer;
pub use metadata::{resolve_field, FieldBinding, MetadataResolver, ProjectMetadata};
pub use model::{
    BarcodeFormat, BarcodeLimits, BarcodeSpec, ElementKind, ElementPatch, ElementType, FrameSpec,
    LabelConfig, LabelElement, TextAlign,
};
pub use overlays::{
    BatchSimulation, BatchSimulationItem, BoxLabelSimulation, ImageError, PositioningGuide,
};
pub use renderer::svg::{
    batch_mark_svg, box_composite_svg, guide_svg, scene_to_svg, EditorDecorations,
};
pub use renderer::{render, LabelRenderer, LabelScene, NodeContent, SceneNode, Surface};
pub use serialization::{load_label, save_label, LabelFile};
pub use templates::{generate_wizard_label, standard_layout, WizardInput};
