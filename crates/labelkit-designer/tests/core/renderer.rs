use labelkit_core::{Point, Size};
use labelkit_designer::{
    render, ElementPatch, ElementType, LabelConfig, LabelRenderer, MonospaceMetrics, NodeContent,
    ProjectMetadata, Surface, TextAlign,
};
use labelkit_settings::EditorSettings;

fn metrics() -> MonospaceMetrics {
    MonospaceMetrics::default()
}

#[test]
fn test_surfaces_share_geometry() {
    let mut label = LabelConfig::default();
    let id = label.create_element(ElementType::Text, "LOTE");
    label.update_element(
        &id,
        &ElementPatch::new().text_align(TextAlign::Right).position(97.0, 4.0),
    );
    let settings = EditorSettings::default();
    let metadata = ProjectMetadata::default();

    let editor_ppm = Surface::Editor.pixels_per_mm(&settings);
    let preview_ppm = Surface::Preview.pixels_per_mm(&settings);
    let editor = render(&label, &metadata, editor_ppm, &metrics());
    let preview = render(&label, &metadata, preview_ppm, &metrics());
    assert_eq!(editor, preview);
}

#[test]
fn test_doubled_scale_doubles_everything() {
    let mut label = LabelConfig::default();
    let text = label.create_element(ElementType::Text, "ABC");
    let frame = label.create_element(ElementType::Box, "");
    let base = render(&label, &ProjectMetadata::default(), 4.0, &metrics());
    let large = render(&label, &ProjectMetadata::default(), 8.0, &metrics());

    for id in [&text, &frame] {
        let a = base.node(id).unwrap();
        let b = large.node(id).unwrap();
        assert_eq!(b.size, a.size.scaled(2.0));
        assert_eq!((b.left, b.top), (a.left * 2.0, a.top * 2.0));
    }
}

#[test]
fn test_field_resolution() {
    let mut label = LabelConfig::default();
    let client = label.create_element(ElementType::Field, "Cliente");
    let unknown = label.create_element(ElementType::Field, "Turno");
    let metadata = ProjectMetadata {
        client_name: "ACME".into(),
        ..Default::default()
    };

    let scene = render(&label, &metadata, 4.0, &metrics());
    let text = |id: &str| match &scene.node(id).unwrap().content {
        NodeContent::Text { value, .. } => value.clone(),
        other => panic!("unexpected content {other:?}"),
    };
    assert_eq!(text(&client), "ACME");
    assert_eq!(text(&unknown), "Turno");

    let blank = render(&label, &ProjectMetadata::default(), 4.0, &metrics());
    match &blank.node(&client).unwrap().content {
        NodeContent::Text { value, .. } => assert_eq!(value, "[Cliente]"),
        other => panic!("unexpected content {other:?}"),
    }
}

#[test]
fn test_barcode_box_matches_stored_size() {
    let mut label = LabelConfig::default();
    let id = label.create_element(ElementType::Barcode, "12345678");
    let scene = render(&label, &ProjectMetadata::default(), 4.0, &metrics());
    let node = scene.node(&id).unwrap();
    assert_eq!(node.size, Size::new(320.0, 160.0));
    match &node.content {
        NodeContent::Barcode(graphic) => assert_eq!(graphic.font_size, 12.0),
        other => panic!("unexpected content {other:?}"),
    }
}

#[test]
fn test_renderer_cache_follows_elements() {
    let mut label = LabelConfig::default();
    let id = label.create_element(ElementType::Barcode, "12345678");
    let metrics = metrics();
    let mut renderer = LabelRenderer::new(&metrics);

    renderer.render(&label, &ProjectMetadata::default(), 4.0);
    renderer.render(&label, &ProjectMetadata::default(), 4.0);
    assert_eq!(renderer.symbol_generations(&id), Some(1));

    label.remove_element(&id);
    renderer.render(&label, &ProjectMetadata::default(), 4.0);
    assert_eq!(renderer.symbol_generations(&id), None);
}

#[test]
fn test_hit_test_prefers_topmost() {
    let mut label = LabelConfig::default();
    let below = label.create_element(ElementType::Box, "");
    let above = label.create_element(ElementType::Box, "");
    let scene = render(&label, &ProjectMetadata::default(), 4.0, &metrics());
    assert_eq!(scene.hit_test(Point::new(40.0, 40.0)).map(|n| n.id.as_str()), Some(above.as_str()));
    assert_ne!(below, above);
    assert!(scene.hit_test(Point::new(390.0, 390.0)).is_none());
}
