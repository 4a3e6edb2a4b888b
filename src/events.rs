//! Notification types dispatched by the editing surface.

use std::fmt;

/// Notification dispatched to registered listeners.
///
/// `Input` fires on every document change regardless of origin; `Change`
/// additionally marks the completion of a paste or programmatic insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The document text changed. Carries the new full value.
    Input { value: String },
    /// A paste or programmatic insertion completed. Carries the new full value.
    Change { value: String },
    /// The surface gained focus
    Focus,
    /// The surface lost focus
    Blur,
}

impl EditorEvent {
    /// Check if this event carries a document value
    pub fn is_content(&self) -> bool {
        matches!(self, EditorEvent::Input { .. } | EditorEvent::Change { .. })
    }

    /// The carried document value, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            EditorEvent::Input { value } | EditorEvent::Change { value } => Some(value),
            _ => None,
        }
    }
}

/// Registry of event listeners. Dispatch is synchronous and in
/// registration order.
#[derive(Default)]
pub struct EventListeners {
    listeners: Vec<Box<dyn FnMut(&EditorEvent)>>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener. Listeners cannot be removed individually.
    pub fn push(&mut self, listener: Box<dyn FnMut(&EditorEvent)>) {
        self.listeners.push(listener);
    }

    /// Dispatch an event to every registered listener
    pub fn emit(&mut self, event: &EditorEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
