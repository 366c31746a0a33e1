use labelkit_core::Size;
use labelkit_designer::{
    box_composite_svg, generate_wizard_label, guide_svg, render, scene_to_svg, BoxLabelSimulation,
    EditorDecorations, MonospaceMetrics, PositioningGuide, ProjectMetadata, SnapGuides,
    WizardInput,
};

#[test]
fn test_wizard_label_svg() {
    let label = generate_wizard_label(&WizardInput::default());
    let scene = render(&label, &ProjectMetadata::default(), 4.0, &MonospaceMetrics::default());
    let svg = scene_to_svg(&scene, None);

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("XXX PZ"));
    assert!(svg.contains(r#"preserveAspectRatio="none""#));
    assert_eq!(svg.matches("<g data-id=").count(), label.len());
}

#[test]
fn test_guides_drawn_for_both_axes() {
    let label = generate_wizard_label(&WizardInput::default());
    let scene = render(&label, &ProjectMetadata::default(), 4.0, &MonospaceMetrics::default());
    let decorations = EditorDecorations {
        selected_id: Some("wiz-ean".into()),
        show_handle: true,
        guides: SnapGuides {
            x: Some(0.0),
            y: Some(200.0),
        },
    };
    let svg = scene_to_svg(&scene, Some(&decorations));
    assert_eq!(svg.matches(r#"class="guide""#).count(), 2);
    assert_eq!(svg.matches("resize-handle").count(), 1);
}

#[test]
fn test_box_composite() {
    let label = generate_wizard_label(&WizardInput::default());
    let scene = render(&label, &ProjectMetadata::default(), 4.0, &MonospaceMetrics::default());
    let mut sim = BoxLabelSimulation::default();
    sim.set_image(Some("box.jpg".into()));
    sim.set_scale(50.0);

    let svg = box_composite_svg(&sim, &scene, Size::new(600.0, 450.0));
    assert!(svg.contains(r#"<image href="box.jpg""#));
    // 400 px label at half scale, centred on (300, 225)
    assert!(svg.contains("matrix(0.5 0 0 0.5 200 125)"));
}

#[test]
fn test_guide_caption() {
    let svg = guide_svg(&PositioningGuide::default(), Size::new(300.0, 400.0));
    assert!(svg.contains("Altura etiqueta: 12mm +-1 desde la base"));
    assert!(svg.contains(r#"y1="340""#));
    assert!(svg.contains(">85%<"));
}
