//! EditBuffer - a live editing session combining a text store with
//! selection state, revision tracking, and undo history.

use std::ops::Range;

use crate::history::{EditHistory, EditOp};
use crate::selection::Selection;
use crate::store::TextStore;

/// A live editing session over a text store.
///
/// Generic over the store type S (PlainStore for single-line inputs,
/// RopeStore for documents). Every change that modifies the text bumps
/// `revision` and records one undoable operation.
#[derive(Debug, Clone)]
pub struct EditBuffer<S: TextStore> {
    store: S,
    selection: Selection,
    /// Bumped once per applied text change, for cheap change detection
    revision: u64,
    history: EditHistory,
}

impl<S: TextStore> EditBuffer<S> {
    /// Create a session seeded with the given text. The caret starts at offset 0.
    pub fn from_text(text: &str, undo_limit: usize) -> Self {
        Self {
            store: S::from_text(text),
            selection: Selection::caret(0),
            revision: 0,
            history: EditHistory::with_max_size(undo_limit),
        }
    }

    /// Get the full text content
    pub fn text(&self) -> String {
        self.store.text()
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.store.len_chars()
    }

    /// Revision counter (0 for a fresh session)
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Get the current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Move the selection without touching text. Clamped to the text length.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamp_to(self.store.len_chars());
    }

    /// Select the entire document
    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.store.len_chars());
    }

    /// Get the selected text (empty string when the selection is a caret)
    pub fn selected_text(&self) -> String {
        self.store
            .slice(self.selection.start()..self.selection.end())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // === Edits ===

    /// Replace a character range with new text. The selection collapses to a
    /// caret at the end of the inserted text. Returns false when the text is
    /// left unchanged (no revision bump, no history entry).
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) -> bool {
        let len = self.store.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);

        if start == end && text.is_empty() {
            return false;
        }

        let deleted = self.store.slice(start..end);
        let caret_after = Selection::caret(start + text.chars().count());
        if deleted == text {
            // Text is unchanged; the edit degenerates to a caret move
            self.selection = caret_after;
            return false;
        }

        let selection_before = self.selection;
        self.store.replace(start..end, text);
        self.selection = caret_after;
        self.revision += 1;
        self.history.push(EditOp::replace(
            start,
            deleted,
            text.to_string(),
            selection_before,
            caret_after,
        ));
        true
    }

    /// Replace the entire content as one replace operation and one undo step.
    /// The selection survives, clamped to the new length. Returns false when
    /// the content is already equal.
    pub fn replace_all(&mut self, text: &str) -> bool {
        let current = self.store.text();
        if current == text {
            return false;
        }

        let selection_before = self.selection;
        let len = self.store.len_chars();
        self.store.replace(0..len, text);
        self.selection = selection_before.clamp_to(self.store.len_chars());
        self.revision += 1;
        self.history.push(EditOp::replace(
            0,
            current,
            text.to_string(),
            selection_before,
            self.selection,
        ));
        true
    }

    /// Undo the most recent edit. Returns true if an operation was undone.
    pub fn undo(&mut self) -> bool {
        let op = match self.history.pop_undo() {
            Some(op) => op,
            None => return false,
        };
        self.apply_inverse(&op);
        true
    }

    /// Redo the most recently undone edit. Returns true if an operation was reapplied.
    pub fn redo(&mut self) -> bool {
        let op = match self.history.pop_redo() {
            Some(op) => op,
            None => return false,
        };
        self.apply_inverse(&op);
        true
    }

    /// Apply the inverse of a recorded operation without re-recording it
    fn apply_inverse(&mut self, op: &EditOp) {
        let end = op.offset + op.inserted_text.chars().count();
        self.store.replace(op.offset..end, &op.deleted_text);
        self.selection = op.selection_before.clamp_to(self.store.len_chars());
        self.revision += 1;
    }
}
