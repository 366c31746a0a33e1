use labelkit_designer::{
    generate_wizard_label, standard_layout, BarcodeFormat, ElementType, ProjectMetadata, TextAlign,
    WizardInput,
};
use labelkit_settings::WizardSettings;

#[test]
fn test_wizard_topology() {
    let label = generate_wizard_label(&WizardInput::new(&WizardSettings::default()));
    assert_eq!((label.width_mm, label.height_mm), (100.0, 100.0));

    let types: Vec<ElementType> = label.elements.iter().map(|e| e.element_type()).collect();
    assert_eq!(types.first(), Some(&ElementType::Box));
    assert_eq!(types.last(), Some(&ElementType::Barcode));
    assert_eq!(types.iter().filter(|t| **t == ElementType::Text).count(), 6);

    let reference = label.element("wiz-ref").unwrap();
    assert_eq!(reference.text_align, TextAlign::Right);
    assert_eq!((reference.x, reference.y), (97.0, 4.0));
}

#[test]
fn test_wizard_barcode() {
    let input = WizardInput {
        ean: "8412345678905".into(),
        ..Default::default()
    };
    let label = generate_wizard_label(&input);
    let barcode = label.element("wiz-ean").unwrap();
    assert_eq!(barcode.text, "8412345678905");
    assert!(!barcode.is_bold);
    let spec = barcode.barcode().unwrap();
    assert_eq!(spec.barcode_format, BarcodeFormat::Code128);
    assert!(spec.show_text);
    assert_eq!((spec.width, spec.height), (80.0, 40.0));
}

#[test]
fn test_whitespace_counts_as_blank() {
    let input = WizardInput {
        units: "   ".into(),
        ..Default::default()
    };
    let label = generate_wizard_label(&input);
    assert_eq!(label.element("wiz-units").unwrap().text, "XXX PZ");
    assert_eq!(label.element("wiz-client").unwrap().text, "CLIENTE");
}

#[test]
fn test_standard_layout_uses_batch_code() {
    let metadata = ProjectMetadata {
        batch_code: "L-2024-07".into(),
        ..Default::default()
    };
    let label = standard_layout(&metadata);
    assert_eq!(label.element("std-batch").unwrap().text, "LOTE: L-2024-07");
    assert_eq!(label.element("std-barcode").unwrap().text, "L-2024-07");
    assert_eq!(label.element("std-barcelona").unwrap().text, "BARCELONA");
    assert_eq!(
        label.element("std-field-client").unwrap().element_type(),
        ElementType::Field
    );
}
