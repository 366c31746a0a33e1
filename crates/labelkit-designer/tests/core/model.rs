use labelkit_designer::{
    BarcodeFormat, BarcodeLimits, ElementPatch, ElementType, LabelConfig, LabelElement, TextAlign,
};
use labelkit_settings::BarcodeSettings;

#[test]
fn test_barcode_update_is_clamped() {
    let mut label = LabelConfig::new(60.0, 40.0);
    let id = label.create_element(ElementType::Barcode, "123");
    label.update_element(&id, &ElementPatch::new().size(200.0, 200.0));
    let spec = label.element(&id).unwrap().barcode().unwrap();
    assert_eq!((spec.width, spec.height), (60.0, 40.0));
}

#[test]
fn test_barcode_caps_on_large_label() {
    let mut label = LabelConfig::new(300.0, 300.0);
    let id = label.create_element(ElementType::Barcode, "123");
    label.update_element(&id, &ElementPatch::new().size(120.0, 90.0));
    assert_eq!(
        label.element(&id).unwrap().size().map(|s| (s.width, s.height)),
        Some((80.0, 50.0))
    );
}

#[test]
fn test_configured_limits() {
    let settings = BarcodeSettings {
        max_width_mm: 40.0,
        max_height_mm: 20.0,
        ..Default::default()
    };
    let limits = BarcodeLimits::from(&settings);
    let mut label = LabelConfig::default();
    let id = label.create_element(ElementType::Barcode, "123");
    label.update_element_within(&id, &ElementPatch::new().size(80.0, 40.0), &limits);
    let spec = label.element(&id).unwrap().barcode().unwrap();
    assert_eq!((spec.width, spec.height), (40.0, 20.0));
}

#[test]
fn test_frame_is_not_clamped() {
    let mut label = LabelConfig::new(60.0, 40.0);
    let id = label.create_element(ElementType::Box, "");
    label.update_element(&id, &ElementPatch::new().size(200.0, 200.0));
    let frame = label.element(&id).unwrap().frame().unwrap();
    assert_eq!((frame.width, frame.height), (200.0, 200.0));
}

#[test]
fn test_update_unknown_id() {
    let mut label = LabelConfig::default();
    assert!(!label.update_element("ghost", &ElementPatch::new().x(3.0)));
    assert!(label.remove_element("ghost").is_none());
}

#[test]
fn test_patch_fields() {
    let mut label = LabelConfig::default();
    let id = label.create_element(ElementType::Barcode, "123");
    label.update_element(
        &id,
        &ElementPatch::new()
            .text("999")
            .barcode_format(BarcodeFormat::Code39)
            .show_text(false)
            .text_align(TextAlign::Right)
            .bold(false),
    );
    let element = label.element(&id).unwrap();
    assert_eq!(element.text, "999");
    assert_eq!(element.text_align, TextAlign::Right);
    assert!(!element.is_bold);
    let spec = element.barcode().unwrap();
    assert_eq!(spec.barcode_format, BarcodeFormat::Code39);
    assert!(!spec.show_text);
}

#[test]
fn test_paint_order_is_insertion_order() {
    let mut label = LabelConfig::default();
    label.push(LabelElement::text("a", "A", 0.0, 0.0, TextAlign::Left));
    label.push(LabelElement::text("b", "B", 0.0, 0.0, TextAlign::Left));
    let ids: Vec<&str> = label.elements.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn test_label_resize_keeps_positions() {
    let mut label = LabelConfig::default();
    label.push(LabelElement::text("a", "A", 90.0, 90.0, TextAlign::Left));
    label.set_label_size(50.0, 30.0);
    assert_eq!(label.element("a").unwrap().x, 90.0);
    assert_eq!((label.width_mm, label.height_mm), (50.0, 30.0));
}
