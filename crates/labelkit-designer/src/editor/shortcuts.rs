//! Keyboard shortcuts for history navigation.

/// A key press as reported by the host view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    /// Command key on macOS.
    pub meta: bool,
    pub shift: bool,
    /// A text field owns the keyboard and keeps its native undo.
    pub text_input_focused: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn in_text_input(mut self) -> Self {
        self.text_input_focused = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
}

/// Maps a key press to a history action.
pub fn action_for(key: &KeyPress) -> Option<ShortcutAction> {
    if key.text_input_focused || !(key.ctrl || key.meta) {
        return None;
    }
    match key.key.to_ascii_lowercase().as_str() {
        "z" if key.shift => Some(ShortcutAction::Redo),
        "z" => Some(ShortcutAction::Undo),
        "y" => Some(ShortcutAction::Redo),
        _ => None,
    }
}
