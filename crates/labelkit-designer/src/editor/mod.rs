//! Interactive label editor.
//!
//! [`LabelEditor`] owns the selection, the pointer interaction state and the
//! undo history for one canvas. The [`LabelConfig`] itself belongs to the
//! hosting view and is passed into every operation.
//!
//! This module is split into submodules:
//! - `session`: selection, interaction mode, snap guides
//! - `snapping`: snap-to-guide while dragging
//! - `alignment`: edge and centre alignment against the label
//! - `shortcuts`: undo/redo key bindings

mod alignment;
mod session;
mod shortcuts;
mod snapping;

pub use alignment::{aligned_patch, Alignment};
pub use session::{EditorSession, InteractionMode, SnapGuides};
pub use shortcuts::{action_for, KeyPress, ShortcutAction};
pub use snapping::{snap_position, SnapOutcome};

use labelkit_core::constants::ROTATION_RANGE_DEG;
use labelkit_core::units::format_mm;
use labelkit_core::{px_to_mm, Point};
use labelkit_settings::{Config, EditorSettings};

use crate::history::HistoryStack;
use crate::measure::ElementMeasurer;
use crate::metadata::ProjectMetadata;
use crate::model::{BarcodeLimits, ElementPatch, ElementType, LabelConfig, LabelElement};
use crate::templates::{generate_wizard_label, standard_layout, WizardInput};

/// Editor for a single label canvas.
#[derive(Debug, Clone)]
pub struct LabelEditor {
    session: EditorSession,
    history: HistoryStack,
    settings: EditorSettings,
    limits: BarcodeLimits,
}

impl Default for LabelEditor {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl LabelEditor {
    pub fn new(settings: EditorSettings, limits: BarcodeLimits) -> Self {
        Self {
            session: EditorSession::default(),
            history: HistoryStack::new(settings.history_limit),
            settings,
            limits,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.editor.clone(), BarcodeLimits::from(&config.barcode))
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn pixels_per_mm(&self) -> f64 {
        self.settings.pixels_per_mm
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.session.selected_id.as_deref()
    }

    /// Selects `id`, or clears the selection with `None`.
    pub fn select(&mut self, id: Option<&str>) {
        self.session.selected_id = id.map(str::to_string);
    }

    /// Records the current state before a mutation.
    pub fn checkpoint(&mut self, config: &LabelConfig) {
        self.history.checkpoint(config);
    }

    /// Creates an element with the creation defaults and selects it.
    pub fn add_element(
        &mut self,
        config: &mut LabelConfig,
        element_type: ElementType,
        text: impl Into<String>,
    ) -> String {
        self.checkpoint(config);
        let element = LabelElement::with_defaults(element_type, text);
        let id = element.id.clone();
        config.push_within(element, &self.limits);
        self.session.selected_id = Some(id.clone());
        tracing::debug!("Added {} element {}", element_type, id);
        id
    }

    pub fn remove_element(&mut self, config: &mut LabelConfig, id: &str) -> bool {
        if !config.contains(id) {
            return false;
        }
        self.checkpoint(config);
        config.remove_element(id);
        if self.selected_id() == Some(id) {
            self.session.selected_id = None;
            self.session.reset_interaction();
        }
        tracing::debug!("Removed element {}", id);
        true
    }

    /// Transient edit without a checkpoint, for continuous gestures that
    /// checkpointed when they began.
    pub fn update_element(
        &mut self,
        config: &mut LabelConfig,
        id: &str,
        patch: &ElementPatch,
    ) -> bool {
        config.update_element_within(id, patch, &self.limits)
    }

    /// Discrete edit preceded by its own checkpoint.
    pub fn update_element_with_history(
        &mut self,
        config: &mut LabelConfig,
        id: &str,
        patch: &ElementPatch,
    ) -> bool {
        if !config.contains(id) {
            return false;
        }
        self.checkpoint(config);
        config.update_element_within(id, patch, &self.limits)
    }

    /// Starts dragging `id`. Takes the single checkpoint for the whole drag.
    /// Refused while another drag or resize is in progress.
    pub fn begin_drag(&mut self, config: &LabelConfig, id: &str) -> bool {
        if self.session.is_interacting() || !config.contains(id) {
            return false;
        }
        self.checkpoint(config);
        self.session.selected_id = Some(id.to_string());
        self.session.mode = InteractionMode::Dragging;
        tracing::debug!("Drag started on {}", id);
        true
    }

    /// Starts resizing `id` from its handle. Only barcodes and frames resize.
    /// Refused while another drag or resize is in progress.
    pub fn begin_resize(&mut self, config: &LabelConfig, id: &str) -> bool {
        if self.session.is_interacting() {
            return false;
        }
        let Some(element) = config.element(id) else {
            return false;
        };
        if !element.is_resizable() {
            return false;
        }
        self.checkpoint(config);
        self.session.selected_id = Some(id.to_string());
        self.session.mode = InteractionMode::Resizing;
        tracing::debug!("Resize started on {}", id);
        true
    }

    /// Moves the dragged element to the pointer (canvas pixels), snapping to
    /// guides.
    pub fn drag_to(&mut self, config: &mut LabelConfig, pointer: Point) -> bool {
        if self.session.mode != InteractionMode::Dragging {
            return false;
        }
        let Some(id) = self.session.selected_id.clone() else {
            return false;
        };
        let outcome = snap_position(
            config,
            &id,
            pointer,
            self.settings.pixels_per_mm,
            self.settings.snap_threshold_px,
        );
        self.session.guides = outcome.guides;
        tracing::trace!("Drag {} to ({:.2}, {:.2}) mm", id, outcome.x_mm, outcome.y_mm);
        config.update_element_within(
            &id,
            &ElementPatch::new().position(outcome.x_mm, outcome.y_mm),
            &self.limits,
        )
    }

    /// Sizes the resized element so its bottom-right corner follows the
    /// pointer (canvas pixels). Rotation is not taken into account.
    pub fn resize_to(&mut self, config: &mut LabelConfig, pointer: Point) -> bool {
        if self.session.mode != InteractionMode::Resizing {
            return false;
        }
        let Some(id) = self.session.selected_id.clone() else {
            return false;
        };
        let Some(element) = config.element(&id) else {
            return false;
        };

        let ppm = self.settings.pixels_per_mm;
        let min = self.settings.min_element_mm;
        let mut width = (px_to_mm(pointer.x, ppm) - element.x).max(min);
        let mut height = (px_to_mm(pointer.y, ppm) - element.y).max(min);
        if element.element_type() == ElementType::Barcode {
            width = width.min(self.limits.max_width_mm);
            height = height.min(self.limits.max_height_mm);
        }
        tracing::trace!("Resize {} to {} x {} mm", id, format_mm(width), format_mm(height));
        config.update_element_within(&id, &ElementPatch::new().size(width, height), &self.limits)
    }

    /// Ends any drag or resize and clears the snap guides. Safe to call when
    /// idle, e.g. on every pointer release.
    pub fn end_interaction(&mut self) {
        if self.session.is_interacting() {
            tracing::debug!("Interaction {:?} ended", self.session.mode);
        }
        self.session.reset_interaction();
    }

    /// Transient rotation update, clamped to the rotation control's range.
    pub fn set_rotation(&mut self, config: &mut LabelConfig, id: &str, degrees: f64) -> bool {
        let (min, max) = ROTATION_RANGE_DEG;
        self.update_element(config, id, &ElementPatch::new().rotation(degrees.clamp(min, max)))
    }

    /// Turns `id` by `steps` increments of the rotation control, as arrow
    /// keys do on the slider. The value lands on a multiple of the step.
    pub fn step_rotation(&mut self, config: &mut LabelConfig, id: &str, steps: i32) -> bool {
        let Some(element) = config.element(id) else {
            return false;
        };
        let step = self.settings.rotation_step_deg;
        let current = (element.rotation / step).round() * step;
        let (min, max) = ROTATION_RANGE_DEG;
        let target = (current + f64::from(steps) * step).clamp(min, max);
        self.update_element_with_history(config, id, &ElementPatch::new().rotation(target))
    }

    /// Aligns `id` against the label using its rendered size from `measurer`.
    /// Unmeasured elements are left untouched.
    pub fn align_element(
        &mut self,
        config: &mut LabelConfig,
        id: &str,
        alignment: Alignment,
        measurer: &dyn ElementMeasurer,
    ) -> bool {
        let Some(element) = config.element(id) else {
            return false;
        };
        let Some(measured) = measurer.measure(id) else {
            tracing::debug!("Cannot align {}: not rendered", id);
            return false;
        };
        let patch = aligned_patch(
            alignment,
            element,
            measured,
            config,
            self.settings.pixels_per_mm,
            self.settings.align_margin_mm,
        );
        self.checkpoint(config);
        tracing::debug!("Aligned {} {}", id, alignment);
        config.update_element_within(id, &patch, &self.limits)
    }

    pub fn undo(&mut self, config: &mut LabelConfig) -> bool {
        let undone = self.history.undo(config);
        if undone {
            self.drop_stale_selection(config);
            tracing::debug!("Undo ({} left)", self.history.undo_len());
        }
        undone
    }

    pub fn redo(&mut self, config: &mut LabelConfig) -> bool {
        let redone = self.history.redo(config);
        if redone {
            self.drop_stale_selection(config);
            tracing::debug!("Redo ({} left)", self.history.redo_len());
        }
        redone
    }

    fn drop_stale_selection(&mut self, config: &LabelConfig) {
        if let Some(id) = self.selected_id() {
            if !config.contains(id) {
                self.session.selected_id = None;
            }
        }
        self.session.reset_interaction();
    }

    /// Runs the history action bound to `key`, if any. Returns the action
    /// that was recognised.
    pub fn handle_shortcut(
        &mut self,
        config: &mut LabelConfig,
        key: &KeyPress,
    ) -> Option<ShortcutAction> {
        let action = action_for(key)?;
        match action {
            ShortcutAction::Undo => self.undo(config),
            ShortcutAction::Redo => self.redo(config),
        };
        Some(action)
    }

    /// Replaces the whole label after one checkpoint.
    pub fn apply_template(&mut self, config: &mut LabelConfig, template: LabelConfig) {
        self.checkpoint(config);
        *config = template;
        self.session.selected_id = None;
        self.session.reset_interaction();
        tracing::debug!("Applied template with {} elements", config.len());
    }

    pub fn apply_wizard(&mut self, config: &mut LabelConfig, input: &WizardInput) {
        self.apply_template(config, generate_wizard_label(input));
    }

    pub fn apply_standard_layout(&mut self, config: &mut LabelConfig, metadata: &ProjectMetadata) {
        self.apply_template(config, standard_layout(metadata));
    }
}
