//! The widget shell: lifecycle, focus tracking, and the public operation
//! surface hosts embed.
//!
//! Owns the document bridge, the selection preserver, and the listener
//! registry. All operations run synchronously inside the caller except the
//! clipboard write during copy, which is fire-and-forget.

use crate::bridge::{DocumentBridge, InsertOutcome};
use crate::clipboard;
use crate::config::{EditorOptions, EffectiveConfig, SlotValue};
use crate::convert::{convert_payload, ClipboardPayload};
use crate::events::{EditorEvent, EventListeners};
use crate::preserver::SelectionPreserver;
use crate::selection::Selection;
use crate::store::{RopeStore, TextStore};

/// The default document surface: a rope-backed Markdown editor.
pub type MarkdownEditor = EditorSurface<RopeStore>;

/// An embeddable editing surface.
///
/// Hosts drive it through the lifecycle pair `mount`/`unmount` and the
/// property setters and host-level events (`set_value`, `paste`, `focus`,
/// `blur`). Document changes come back as [`EditorEvent`]s through
/// listeners registered with `on_event`.
#[derive(Debug)]
pub struct EditorSurface<S: TextStore = RopeStore> {
    bridge: DocumentBridge<S>,
    preserver: SelectionPreserver,
    listeners: EventListeners,
    focused: bool,
}

impl<S: TextStore> EditorSurface<S> {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            bridge: DocumentBridge::new(options),
            preserver: SelectionPreserver::new(),
            listeners: EventListeners::new(),
            focused: false,
        }
    }

    /// Register an event listener. Dispatch is synchronous, in
    /// registration order.
    pub fn on_event(&mut self, listener: impl FnMut(&EditorEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Lifecycle ===

    /// Create the live editing session, seeded from the current value.
    /// A selection snapshot held from before an unmount stays parked until
    /// the next focus gain.
    pub fn mount(&mut self) {
        self.bridge.mount();
    }

    /// Tear the live session down. A focused surface blurs first; an
    /// unfocused one with no parked snapshot captures its selection, so
    /// the selection survives teardown/recreate cycles either way. The
    /// value remains readable and assignable while unmounted.
    pub fn unmount(&mut self) {
        if !self.bridge.is_mounted() {
            return;
        }
        if self.focused {
            self.blur();
        } else if self.preserver.is_idle() {
            if let Some(buffer) = self.bridge.buffer() {
                self.preserver.capture(buffer.selection());
            }
        }
        self.bridge.unmount();
    }

    /// Check if a live session exists
    pub fn is_mounted(&self) -> bool {
        self.bridge.is_mounted()
    }

    // === Focus ===

    /// Focus gain: restore a parked selection snapshot (clamped to the
    /// current text), then notify. The snapshot is consumed; a second
    /// focus gain finds nothing to restore.
    pub fn focus(&mut self) {
        if self.focused {
            return;
        }
        if !self.bridge.is_mounted() {
            tracing::debug!("Focus with no live session, ignoring");
            return;
        }
        self.focused = true;
        if let Some(snapshot) = self.preserver.take() {
            tracing::trace!(
                "Restoring selection {}..{} on focus",
                snapshot.anchor,
                snapshot.head
            );
            if let Some(buffer) = self.bridge.buffer_mut() {
                buffer.set_selection(snapshot);
            }
        }
        self.emit(EditorEvent::Focus);
    }

    /// Focus loss: park the current selection for the next focus gain,
    /// then notify.
    pub fn blur(&mut self) {
        if !self.focused {
            if !self.bridge.is_mounted() {
                tracing::debug!("Blur with no live session, ignoring");
            }
            return;
        }
        self.focused = false;
        if let Some(buffer) = self.bridge.buffer() {
            self.preserver.capture(buffer.selection());
        }
        self.emit(EditorEvent::Blur);
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    // === Value ===

    /// The current document value
    pub fn value(&self) -> &str {
        self.bridge.value()
    }

    /// Assign the document value. Notifies `Input` when the document
    /// actually changed; assigning the value the document already holds is
    /// a guaranteed no-op. Before mount the value is held as the seed for
    /// the next mount, without notification.
    pub fn set_value(&mut self, value: &str) {
        if self.bridge.set_value(value) {
            self.emit_input();
        }
    }

    /// Buffer revision counter, 0 while unmounted
    pub fn revision(&self) -> u64 {
        self.bridge.buffer().map(|b| b.revision()).unwrap_or(0)
    }

    // === Editing ===

    /// Insert text at the current selection with paste semantics: the
    /// selection is replaced and the caret lands after the insertion.
    /// Notifies `Input` (when the document changed) then `Change`.
    /// Inserting the empty string is a complete no-op, with no
    /// notifications.
    pub fn insert_text(&mut self, text: &str) {
        match self.bridge.insert_at_selection(text) {
            InsertOutcome::Rejected => {}
            InsertOutcome::Applied { value_changed } => {
                if value_changed {
                    self.emit_input();
                }
                self.emit_change();
            }
        }
    }

    /// Paste a clipboard payload. The HTML alternative is converted to
    /// Markdown when present; otherwise the plain text is used as-is. A
    /// payload with no convertible content is a complete no-op.
    pub fn paste(&mut self, payload: &ClipboardPayload) {
        let converted = convert_payload(payload);
        if converted.is_empty() {
            tracing::trace!("Paste with no convertible content, ignoring");
            return;
        }
        self.insert_text(&converted);
    }

    /// Paste the system clipboard's plain text
    pub fn paste_from_clipboard(&mut self) {
        let Some(text) = clipboard::read_text() else {
            return;
        };
        self.paste(&ClipboardPayload::with_text(text));
    }

    /// Undo the most recent edit, notifying `Input` when the document moved
    pub fn undo(&mut self) {
        if self.bridge.undo() {
            self.emit_input();
        }
    }

    /// Redo the most recently undone edit, notifying `Input` when the
    /// document moved
    pub fn redo(&mut self) {
        if self.bridge.redo() {
            self.emit_input();
        }
    }

    // === Selection and clipboard ===

    /// The current selection. While unmounted this reports the parked
    /// snapshot, or a caret at 0 when there is none.
    pub fn selection(&self) -> Selection {
        if let Some(buffer) = self.bridge.buffer() {
            return buffer.selection();
        }
        self.preserver.snapshot().unwrap_or_default()
    }

    /// Move the selection, clamped to the text length
    pub fn set_selection(&mut self, selection: Selection) {
        let Some(buffer) = self.bridge.buffer_mut() else {
            tracing::debug!("Set selection with no live session, ignoring");
            return;
        };
        buffer.set_selection(selection);
    }

    /// The selected text, empty while unmounted or when the selection is
    /// a caret
    pub fn selected_text(&self) -> String {
        self.bridge
            .buffer()
            .map(|b| b.selected_text())
            .unwrap_or_default()
    }

    /// Focus the surface and select the entire document
    pub fn select(&mut self) {
        if !self.bridge.is_mounted() {
            tracing::debug!("Select with no live session, ignoring");
            return;
        }
        self.focus();
        if let Some(buffer) = self.bridge.buffer_mut() {
            buffer.select_all();
        }
    }

    /// Copy the selected text to the system clipboard, fire-and-forget.
    /// An empty selection copies nothing.
    pub fn copy(&self) {
        let Some(buffer) = self.bridge.buffer() else {
            tracing::debug!("Copy with no live session, ignoring");
            return;
        };
        let text = buffer.selected_text();
        if text.is_empty() {
            tracing::trace!("Copy with empty selection, ignoring");
            return;
        }
        clipboard::spawn_copy(text);
    }

    // === Configuration ===

    /// The effective placeholder text
    pub fn placeholder(&self) -> &str {
        self.bridge.config().placeholder()
    }

    /// Swap the placeholder slot. No notification; buffer content,
    /// selection, and history are untouched.
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.bridge.reconfigure(SlotValue::Placeholder(text.into()));
    }

    /// The effective read-only flag
    pub fn is_read_only(&self) -> bool {
        self.bridge.config().is_read_only()
    }

    /// Swap the read-only slot. While read-only, user edits (insert,
    /// paste, undo, redo) are rejected; `set_value` still applies.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.bridge.reconfigure(SlotValue::ReadOnly(read_only));
    }

    /// Base options the surface was created with
    pub fn options(&self) -> &EditorOptions {
        self.bridge.config().base()
    }

    /// The resolved configuration for renderers
    pub fn effective_config(&self) -> EffectiveConfig {
        self.bridge.config().effective()
    }

    // === Event plumbing ===

    fn emit_input(&mut self) {
        let event = EditorEvent::Input {
            value: self.bridge.value().to_string(),
        };
        self.emit(event);
    }

    fn emit_change(&mut self) {
        let event = EditorEvent::Change {
            value: self.bridge.value().to_string(),
        };
        self.emit(event);
    }

    fn emit(&mut self, event: EditorEvent) {
        self.listeners.emit(&event);
    }
}
