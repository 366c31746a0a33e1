use std::collections::HashMap;

use labelkit_core::{Point, Size};
use labelkit_designer::{
    default_metrics, render, Alignment, ElementPatch, ElementType, InteractionMode, KeyPress,
    LabelConfig, LabelEditor, ProjectMetadata, WizardInput,
};
use labelkit_settings::Config;

fn editor_with_text(text: &str) -> (LabelEditor, LabelConfig, String) {
    let mut editor = LabelEditor::default();
    let mut label = LabelConfig::default();
    let id = editor.add_element(&mut label, ElementType::Text, text);
    (editor, label, id)
}

#[test]
fn test_drag_snaps_to_right_edge() {
    let (mut editor, mut label, id) = editor_with_text("A");
    assert!(editor.begin_drag(&label, &id));
    editor.drag_to(&mut label, Point::new(398.0, 60.0));
    assert_eq!(label.element(&id).unwrap().x, 100.0);
    assert_eq!(editor.session().guides.x, Some(400.0));

    editor.drag_to(&mut label, Point::new(385.0, 60.0));
    assert_eq!(label.element(&id).unwrap().x, 385.0 / 4.0);
    assert_eq!(editor.session().guides.x, None);
}

#[test]
fn test_drag_sets_selection_and_mode() {
    let mut editor = LabelEditor::default();
    let mut label = LabelConfig::default();
    let first = editor.add_element(&mut label, ElementType::Text, "A");
    let second = editor.add_element(&mut label, ElementType::Box, "");
    assert_eq!(editor.selected_id(), Some(second.as_str()));

    editor.begin_drag(&label, &first);
    assert_eq!(editor.selected_id(), Some(first.as_str()));
    assert_eq!(editor.session().mode, InteractionMode::Dragging);
    editor.end_interaction();
    assert_eq!(editor.session().mode, InteractionMode::Idle);
    editor.end_interaction();
}

#[test]
fn test_resize_ignores_drag_mode() {
    let mut editor = LabelEditor::default();
    let mut label = LabelConfig::default();
    let id = editor.add_element(&mut label, ElementType::Box, "");
    editor.begin_drag(&label, &id);
    assert!(!editor.resize_to(&mut label, Point::new(300.0, 300.0)));
}

#[test]
fn test_frame_resize_follows_pointer() {
    let mut editor = LabelEditor::default();
    let mut label = LabelConfig::default();
    let id = editor.add_element(&mut label, ElementType::Box, "");
    editor.begin_resize(&label, &id);
    editor.resize_to(&mut label, Point::new(220.0, 100.0));
    editor.end_interaction();
    assert_eq!(label.element(&id).unwrap().size(), Some(Size::new(50.0, 20.0)));
    assert_eq!(editor.history().undo_len(), 2);
}

#[test]
fn test_align_with_rendered_scene() {
    let (mut editor, mut label, id) = editor_with_text("REF: 000000");
    let scene = render(&label, &ProjectMetadata::default(), 4.0, default_metrics());
    let width_px = scene.node(&id).unwrap().size.width;

    assert!(editor.align_element(&mut label, &id, Alignment::Right, &scene));
    let x = label.element(&id).unwrap().x;
    assert!((x - (100.0 - width_px / 4.0 - 3.0)).abs() < 1e-9);

    assert!(editor.align_element(&mut label, &id, Alignment::Top, &scene));
    assert_eq!(label.element(&id).unwrap().y, 3.0);
}

#[test]
fn test_align_center_y_with_fake_measurer() {
    let (mut editor, mut label, id) = editor_with_text("A");
    let measurer = HashMap::from([(id.clone(), Size::new(40.0, 20.0))]);
    editor.align_element(&mut label, &id, Alignment::CenterVertical, &measurer);
    assert_eq!(label.element(&id).unwrap().y, 47.5);
}

#[test]
fn test_transient_updates_skip_history() {
    let (mut editor, mut label, id) = editor_with_text("A");
    let before = editor.history().undo_len();
    editor.update_element(&mut label, &id, &ElementPatch::new().text("AB"));
    editor.set_rotation(&mut label, &id, 45.0);
    assert_eq!(editor.history().undo_len(), before);

    editor.update_element_with_history(&mut label, &id, &ElementPatch::new().font_size(20.0));
    assert_eq!(editor.history().undo_len(), before + 1);
    assert!(!editor.update_element_with_history(&mut label, "ghost", &ElementPatch::new()));
    assert_eq!(editor.history().undo_len(), before + 1);
}

#[test]
fn test_shift_z_redoes() {
    let (mut editor, mut label, _) = editor_with_text("A");
    editor.undo(&mut label);
    assert!(label.is_empty());
    editor.handle_shortcut(&mut label, &KeyPress::new("Z").with_meta().with_shift());
    assert_eq!(label.len(), 1);
}

#[test]
fn test_undo_clears_stale_selection() {
    let (mut editor, mut label, _) = editor_with_text("A");
    assert!(editor.selected_id().is_some());
    editor.undo(&mut label);
    assert_eq!(editor.selected_id(), None);
}

#[test]
fn test_standard_layout_then_undo() {
    let (mut editor, mut label, _) = editor_with_text("A");
    editor.apply_standard_layout(&mut label, &ProjectMetadata::default());
    assert!(label.contains("std-barcode"));
    editor.undo(&mut label);
    assert!(!label.contains("std-barcode"));
    editor.redo(&mut label);
    assert!(label.contains("std-barcode"));
}

#[test]
fn test_config_driven_threshold() {
    let mut config = Config::default();
    config.editor.snap_threshold_px = 20.0;
    let mut editor = LabelEditor::from_config(&config);
    let mut label = LabelConfig::default();
    let id = editor.add_element(&mut label, ElementType::Text, "A");
    editor.begin_drag(&label, &id);
    editor.drag_to(&mut label, Point::new(385.0, 60.0));
    assert_eq!(label.element(&id).unwrap().x, 100.0);
}

#[test]
fn test_wizard_through_editor() {
    let mut editor = LabelEditor::default();
    let mut label = LabelConfig::default();
    let mut input = WizardInput::default();
    input.units = String::new();
    editor.apply_wizard(&mut label, &input);
    assert_eq!(label.element("wiz-units").unwrap().text, "XXX PZ");
    assert_eq!(editor.history().undo_len(), 1);
}

#[test]
fn test_long_edit_session_fully_undoes() {
    let mut editor = LabelEditor::default();
    let mut label = LabelConfig::default();
    let before = label.clone();
    for i in 0..60 {
        editor.add_element(&mut label, ElementType::Text, format!("row {i}"));
    }
    let after = label.clone();

    let mut undone = 0;
    while editor.undo(&mut label) {
        undone += 1;
    }
    assert_eq!(undone, 60);
    assert_eq!(label, before);

    while editor.redo(&mut label) {}
    assert_eq!(label, after);
}

#[test]
fn test_configured_history_limit() {
    let mut config = Config::default();
    config.editor.history_limit = Some(5);
    let mut editor = LabelEditor::from_config(&config);
    let mut label = LabelConfig::default();
    for _ in 0..8 {
        editor.add_element(&mut label, ElementType::Box, "");
    }
    assert_eq!(editor.history().undo_len(), 5);
}
