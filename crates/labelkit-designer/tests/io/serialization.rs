use labelkit_designer::{load_label, save_label, ElementPatch, ElementType, LabelConfig, LabelFile};

#[test]
fn test_label_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("caja-a.json");

    let mut label = LabelConfig::new(80.0, 60.0);
    let id = label.create_element(ElementType::Barcode, "8412345678905");
    label.update_element(&id, &ElementPatch::new().rotation(90.0));
    label.create_element(ElementType::Field, "Cliente");

    save_label(&label, &path).unwrap();
    let file = LabelFile::load_from_file(&path).unwrap();
    assert_eq!(file.name, "caja-a");
    assert_eq!(file.label, label);
    assert_eq!(load_label(&path).unwrap(), label);
}

#[test]
fn test_missing_file_has_context() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_label(dir.path().join("none.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read label file"));
}

#[test]
fn test_invalid_json_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_label(&path).is_err());
}
