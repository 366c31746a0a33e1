//! Snapshot-based undo/redo history.
//!
//! Every checkpoint is a full copy of the [`LabelConfig`]. Labels hold tens
//! of elements, so no diffing is attempted. The history is unbounded unless
//! a limit is configured, so any run of edits can be undone back to its
//! starting state.

use crate::model::LabelConfig;

/// Undo and redo stacks of label snapshots.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    past: Vec<LabelConfig>,
    future: Vec<LabelConfig>,
    limit: Option<usize>,
}

impl HistoryStack {
    /// Creates a history keeping at most `limit` undo snapshots, or every
    /// snapshot when `limit` is `None`.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            limit: limit.map(|l| l.max(1)),
        }
    }

    /// Records `current` before a mutation and drops the redo branch.
    pub fn checkpoint(&mut self, current: &LabelConfig) {
        self.push_past(current.clone());
        self.future.clear();
    }

    /// Restores the most recent snapshot. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self, current: &mut LabelConfig) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        self.future.push(std::mem::replace(current, previous));
        true
    }

    /// Re-applies the most recently undone snapshot. Returns `false` when
    /// there is nothing to redo.
    pub fn redo(&mut self, current: &mut LabelConfig) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        let replaced = std::mem::replace(current, next);
        self.push_past(replaced);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn push_past(&mut self, snapshot: LabelConfig) {
        self.past.push(snapshot);
        if let Some(limit) = self.limit {
            if self.past.len() > limit {
                let excess = self.past.len() - limit;
                self.past.drain(..excess);
            }
        }
    }
}
