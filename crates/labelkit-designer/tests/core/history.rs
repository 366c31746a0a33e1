use labelkit_designer::history::HistoryStack;
use labelkit_designer::{ElementType, LabelConfig};

#[test]
fn test_history_creation() {
    let history = HistoryStack::new(Some(50));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.limit(), Some(50));
    assert_eq!(HistoryStack::default().limit(), None);
}

#[test]
fn test_undo_restores_snapshot() {
    let mut history = HistoryStack::default();
    let mut label = LabelConfig::default();

    history.checkpoint(&label);
    label.create_element(ElementType::Text, "A");
    assert!(history.undo(&mut label));
    assert!(label.is_empty());
    assert!(history.can_redo());
}

#[test]
fn test_new_edit_discards_redo() {
    let mut history = HistoryStack::default();
    let mut label = LabelConfig::default();

    history.checkpoint(&label);
    label.create_element(ElementType::Text, "A");
    history.undo(&mut label);
    assert_eq!(history.redo_len(), 1);

    history.checkpoint(&label);
    label.create_element(ElementType::Box, "");
    assert!(!history.can_redo());
    assert!(!history.redo(&mut label));
}

#[test]
fn test_undo_on_empty_is_noop() {
    let mut history = HistoryStack::default();
    let mut label = LabelConfig::new(60.0, 40.0);
    assert!(!history.undo(&mut label));
    assert_eq!(label, LabelConfig::new(60.0, 40.0));
}

#[test]
fn test_limit_drops_oldest() {
    let mut history = HistoryStack::new(Some(3));
    let mut label = LabelConfig::default();
    for i in 0..5 {
        history.checkpoint(&label);
        label.create_element(ElementType::Text, format!("{i}"));
    }
    assert_eq!(history.undo_len(), 3);
    while history.undo(&mut label) {}
    assert_eq!(label.len(), 2);
}
