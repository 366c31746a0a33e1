use serde::{Deserialize, Serialize};

/// What the pointer is currently doing to the selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

/// Snap guide lines in canvas pixels, one per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapGuides {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl SnapGuides {
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Per-canvas interaction state, owned by the view hosting the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSession {
    pub selected_id: Option<String>,
    pub mode: InteractionMode,
    pub guides: SnapGuides,
}

impl EditorSession {
    pub fn is_interacting(&self) -> bool {
        self.mode != InteractionMode::Idle
    }

    /// Back to idle with no guides shown.
    pub fn reset_interaction(&mut self) {
        self.mode = InteractionMode::Idle;
        self.guides = SnapGuides::default();
    }
}
