//! Fixed label layouts: the wizard label built from business inputs and the
//! standard reference layout built on metadata fields.
//!
//! Both produce a 100×100 mm label with a framed top half holding four text
//! rows and a CODE128 barcode centred on the bottom half.

use serde::{Deserialize, Serialize};

use labelkit_settings::WizardSettings;

use crate::metadata::ProjectMetadata;
use crate::model::{
    BarcodeFormat, BarcodeSpec, ElementKind, FrameSpec, LabelConfig, LabelElement, TextAlign,
};

const LABEL_MM: f64 = 100.0;
const MID_Y: f64 = LABEL_MM / 2.0;
const LEFT_X: f64 = 3.0;
const RIGHT_X: f64 = LABEL_MM - 3.0;

/// Inputs collected by the label wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardInput {
    pub units: String,
    pub reference: String,
    pub article: String,
    pub batch: String,
    pub client: String,
    pub destination: String,
    pub ean: String,
}

impl WizardInput {
    /// Empty inputs with the configured client and destination.
    pub fn new(settings: &WizardSettings) -> Self {
        Self {
            client: settings.default_client.clone(),
            destination: settings.default_destination.clone(),
            ..Default::default()
        }
    }

    /// Fills blank inputs from the project metadata. Inputs the user has
    /// already typed are kept.
    pub fn prefill(&mut self, metadata: &ProjectMetadata) {
        fill_blank(&mut self.reference, &metadata.order_number);
        fill_blank(&mut self.article, &metadata.product_name);
        fill_blank(&mut self.batch, &metadata.batch_code);
        fill_blank(&mut self.ean, &metadata.batch_code);
    }
}

fn fill_blank(slot: &mut String, value: &str) {
    if slot.trim().is_empty() && !value.trim().is_empty() {
        *slot = value.to_string();
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

fn frame(id: &str) -> LabelElement {
    LabelElement {
        id: id.to_string(),
        kind: ElementKind::Box(FrameSpec {
            width: LABEL_MM - 2.0,
            height: MID_Y - 2.0,
            border_thickness: 2.0,
        }),
        text: String::new(),
        x: 1.0,
        y: 1.0,
        font_size: 0.0,
        is_bold: false,
        rotation: 0.0,
        text_align: TextAlign::Left,
    }
}

/// Barcode centred on the bottom half, spanning 10 to 90 mm.
fn bottom_barcode(id: &str, value: &str) -> LabelElement {
    LabelElement {
        id: id.to_string(),
        kind: ElementKind::Barcode(BarcodeSpec {
            width: 80.0,
            height: 40.0,
            barcode_format: BarcodeFormat::Code128,
            show_text: true,
        }),
        text: value.to_string(),
        x: LABEL_MM / 2.0,
        y: MID_Y + 5.0,
        font_size: 12.0,
        is_bold: false,
        rotation: 0.0,
        text_align: TextAlign::Center,
    }
}

fn field(id: &str, name: &str, y: f64) -> LabelElement {
    LabelElement {
        kind: ElementKind::Field,
        ..LabelElement::text(id, name, LEFT_X, y, TextAlign::Left)
    }
}

/// Builds the wizard label. Blank inputs are shown as placeholders so the
/// layout is always visible.
pub fn generate_wizard_label(input: &WizardInput) -> LabelConfig {
    let mut config = LabelConfig::new(LABEL_MM, LABEL_MM);
    config.elements = vec![
        frame("wiz-frame"),
        LabelElement::text(
            "wiz-units",
            format!("{} PZ", or_placeholder(&input.units, "XXX")),
            LEFT_X,
            4.0,
            TextAlign::Left,
        ),
        LabelElement::text(
            "wiz-ref",
            format!("REF: {}", or_placeholder(&input.reference, "000000")),
            RIGHT_X,
            4.0,
            TextAlign::Right,
        ),
        LabelElement::text(
            "wiz-art",
            or_placeholder(&input.article, "ARTICULO"),
            LEFT_X,
            16.0,
            TextAlign::Left,
        ),
        LabelElement::text(
            "wiz-batch",
            format!("LOTE: {}", or_placeholder(&input.batch, "00000")),
            LEFT_X,
            24.0,
            TextAlign::Left,
        ),
        LabelElement::text(
            "wiz-client",
            or_placeholder(&input.client, "CLIENTE"),
            LEFT_X,
            42.0,
            TextAlign::Left,
        ),
        LabelElement::text(
            "wiz-dest",
            or_placeholder(&input.destination, "DESTINO"),
            RIGHT_X,
            42.0,
            TextAlign::Right,
        ),
        bottom_barcode("wiz-ean", or_placeholder(&input.ean, "12345678")),
    ];
    config
}

/// Builds the standard reference layout. Product and client are metadata
/// fields; the batch code is written in literally.
pub fn standard_layout(metadata: &ProjectMetadata) -> LabelConfig {
    let batch = metadata.batch_code.as_str();
    let mut config = LabelConfig::new(LABEL_MM, LABEL_MM);
    config.elements = vec![
        frame("std-frame"),
        LabelElement::text("std-units", "100 PZA", LEFT_X, 4.0, TextAlign::Left),
        LabelElement::text("std-lbl-ref", "REF: 000000", RIGHT_X, 4.0, TextAlign::Right),
        field("std-field-product", "Producto", 16.0),
        LabelElement::text(
            "std-batch",
            format!("LOTE: {}", or_placeholder(batch, "00000")),
            LEFT_X,
            24.0,
            TextAlign::Left,
        ),
        field("std-field-client", "Cliente", 42.0),
        LabelElement::text("std-barcelona", "BARCELONA", RIGHT_X, 42.0, TextAlign::Right),
        bottom_barcode("std-barcode", or_placeholder(batch, "12345678")),
    ];
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementType;

    fn text_of<'a>(config: &'a LabelConfig, id: &str) -> &'a str {
        &config.element(id).unwrap().text
    }

    #[test]
    fn test_blank_units_placeholder() {
        let label = generate_wizard_label(&WizardInput::default());
        assert_eq!(text_of(&label, "wiz-units"), "XXX PZ");
        assert_eq!(text_of(&label, "wiz-ref"), "REF: 000000");
        assert_eq!(text_of(&label, "wiz-art"), "ARTICULO");
        assert_eq!(text_of(&label, "wiz-ean"), "12345678");
    }

    #[test]
    fn test_values_substituted() {
        let mut input = WizardInput::new(&WizardSettings::default());
        input.units = "250".into();
        input.batch = "L2407".into();
        let label = generate_wizard_label(&input);
        assert_eq!(label.len(), 8);
        assert_eq!(text_of(&label, "wiz-units"), "250 PZ");
        assert_eq!(text_of(&label, "wiz-batch"), "LOTE: L2407");
        assert_eq!(text_of(&label, "wiz-client"), "ANTONIO PUIG S.A.");
        assert_eq!(text_of(&label, "wiz-dest"), "BARCELONA");
    }

    #[test]
    fn test_prefill_keeps_typed_inputs() {
        let metadata = ProjectMetadata {
            order_number: "PO-77".into(),
            product_name: "Crema".into(),
            batch_code: "B1".into(),
            ..Default::default()
        };
        let mut input = WizardInput {
            article: "Typed".into(),
            ..Default::default()
        };
        input.prefill(&metadata);
        assert_eq!(input.reference, "PO-77");
        assert_eq!(input.article, "Typed");
        assert_eq!(input.batch, "B1");
        assert_eq!(input.ean, "B1");
    }

    #[test]
    fn test_standard_layout_fields() {
        let label = standard_layout(&ProjectMetadata::default());
        let product = label.element("std-field-product").unwrap();
        assert_eq!(product.element_type(), ElementType::Field);
        assert_eq!(text_of(&label, "std-batch"), "LOTE: 00000");
        assert_eq!(text_of(&label, "std-barcode"), "12345678");

        let frame = label.element("std-frame").unwrap().frame().unwrap();
        assert_eq!((frame.width, frame.height), (98.0, 48.0));
    }

    #[test]
    fn test_barcode_spans_bottom_half() {
        let label = standard_layout(&ProjectMetadata::default());
        let barcode = label.element("std-barcode").unwrap();
        let left = barcode.x - barcode.text_align.anchor_shift() * 80.0;
        assert_eq!(left, 10.0);
        assert_eq!(barcode.y, 55.0);
    }
}
