//! The document bridge: keeps the externally visible value and the
//! internal editable buffer consistent without feedback loops.
//!
//! The bridge owns the buffer session and the session configuration. Every
//! text mutation funnels through it, so `last_known_value` always matches
//! the buffer at rest and divergence can be detected with one comparison.

use crate::buffer::EditBuffer;
use crate::config::{EditorOptions, SessionConfig, SlotValue};
use crate::store::TextStore;

/// Outcome of a user-path insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The edit was not accepted (empty text, no live session, or read-only)
    Rejected,
    /// The edit was accepted. `value_changed` reports whether the document
    /// text actually moved.
    Applied { value_changed: bool },
}

/// Arbitrates between the external string value and the internal buffer.
#[derive(Debug)]
pub struct DocumentBridge<S: TextStore> {
    /// Live session, None while unmounted
    buffer: Option<EditBuffer<S>>,
    /// Last value both sides agreed on; doubles as the mount seed
    last_known_value: String,
    config: SessionConfig,
}

impl<S: TextStore> DocumentBridge<S> {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            buffer: None,
            last_known_value: String::new(),
            config: SessionConfig::new(options),
        }
    }

    /// The externally visible document value
    pub fn value(&self) -> &str {
        &self.last_known_value
    }

    /// Check if a live session exists
    pub fn is_mounted(&self) -> bool {
        self.buffer.is_some()
    }

    /// Read access to the live session
    pub fn buffer(&self) -> Option<&EditBuffer<S>> {
        self.buffer.as_ref()
    }

    /// Session access for selection and focus plumbing. Text mutations must
    /// go through the bridge so the value stays synchronized.
    pub(crate) fn buffer_mut(&mut self) -> Option<&mut EditBuffer<S>> {
        self.buffer.as_mut()
    }

    /// Session configuration (base options plus slot overrides)
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Create a live session seeded from the last known value, replacing
    /// any previous session. The caret starts at offset 0.
    pub fn mount(&mut self) {
        let undo_limit = self.config.base().undo_limit;
        self.buffer = Some(EditBuffer::from_text(&self.last_known_value, undo_limit));
        tracing::debug!(
            "Mounted session with {} chars",
            self.last_known_value.chars().count()
        );
    }

    /// Drop the live session. The last known value remains as the seed for
    /// a future mount.
    pub fn unmount(&mut self) {
        self.buffer = None;
        tracing::debug!("Unmounted session");
    }

    /// Adopt an externally assigned value. Returns true when the document
    /// changed (callers notify on true).
    ///
    /// Equality with the buffer text is the re-entrancy guard: an echoed
    /// assignment of text the buffer already holds is a no-op, which breaks
    /// update feedback loops. Read-only does not apply here; this is a host
    /// property assignment, not a user edit.
    pub fn set_value(&mut self, value: &str) -> bool {
        match self.buffer.as_mut() {
            Some(buffer) => {
                if !buffer.replace_all(value) {
                    return false;
                }
                self.sync_from_buffer()
            }
            None => {
                // No live session yet; hold the value as the mount seed
                if self.last_known_value != value {
                    tracing::trace!("Holding assigned value as pending mount seed");
                    self.last_known_value = value.to_string();
                }
                false
            }
        }
    }

    /// Replace the current selection with text (insert at the caret when
    /// collapsed). The selection collapses to the end of the insertion.
    /// Empty text is a complete no-op; it never deletes the selection.
    pub fn insert_at_selection(&mut self, text: &str) -> InsertOutcome {
        if text.is_empty() {
            tracing::trace!("Insert of empty text, ignoring");
            return InsertOutcome::Rejected;
        }
        if self.config.is_read_only() {
            tracing::debug!("Insert rejected: session is read-only");
            return InsertOutcome::Rejected;
        }
        let Some(buffer) = self.buffer.as_mut() else {
            tracing::debug!("Insert with no live session, ignoring");
            return InsertOutcome::Rejected;
        };

        let selection = buffer.selection();
        buffer.replace_range(selection.start()..selection.end(), text);
        let value_changed = self.sync_from_buffer();
        InsertOutcome::Applied { value_changed }
    }

    /// Undo the most recent edit (a user path, so read-only blocks it).
    /// Returns true when the document changed.
    pub fn undo(&mut self) -> bool {
        if self.config.is_read_only() {
            return false;
        }
        let Some(buffer) = self.buffer.as_mut() else {
            tracing::debug!("Undo with no live session, ignoring");
            return false;
        };
        if !buffer.undo() {
            return false;
        }
        self.sync_from_buffer()
    }

    /// Redo the most recently undone edit. Returns true when the document
    /// changed.
    pub fn redo(&mut self) -> bool {
        if self.config.is_read_only() {
            return false;
        }
        let Some(buffer) = self.buffer.as_mut() else {
            tracing::debug!("Redo with no live session, ignoring");
            return false;
        };
        if !buffer.redo() {
            return false;
        }
        self.sync_from_buffer()
    }

    /// Swap one configuration slot. Buffer content, selection, and undo
    /// history are untouched. Returns true when the effective
    /// configuration changed.
    pub fn reconfigure(&mut self, value: SlotValue) -> bool {
        self.config.reconfigure(value)
    }

    /// Fold the buffer's current text back into the externally visible
    /// value. Returns true when the value actually moved.
    fn sync_from_buffer(&mut self) -> bool {
        let Some(buffer) = self.buffer.as_ref() else {
            return false;
        };
        let text = buffer.text();
        let changed = text != self.last_known_value;
        self.last_known_value = text;
        changed
    }
}
