//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use markpad::{EditorEvent, EditorOptions, MarkdownEditor};

/// Shared log of dispatched events
pub type EventLog = Rc<RefCell<Vec<EditorEvent>>>;

/// Create a mounted editor holding the given text
pub fn mounted_editor(text: &str) -> MarkdownEditor {
    let mut editor = MarkdownEditor::new(EditorOptions::default());
    editor.set_value(text);
    editor.mount();
    editor
}

/// Attach a recording listener to an editor
pub fn attach_recorder(editor: &mut MarkdownEditor) -> EventLog {
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    editor.on_event(move |event| sink.borrow_mut().push(event.clone()));
    events
}

/// Create a mounted editor that records every dispatched event
pub fn recording_editor(text: &str) -> (MarkdownEditor, EventLog) {
    let mut editor = mounted_editor(text);
    let events = attach_recorder(&mut editor);
    (editor, events)
}

/// Event labels in dispatch order, for compact assertions
pub fn event_names(events: &EventLog) -> Vec<&'static str> {
    events
        .borrow()
        .iter()
        .map(|event| match event {
            EditorEvent::Input { .. } => "input",
            EditorEvent::Change { .. } => "change",
            EditorEvent::Focus => "focus",
            EditorEvent::Blur => "blur",
        })
        .collect()
}

/// Count events carrying a document value
pub fn content_event_count(events: &EventLog) -> usize {
    events.borrow().iter().filter(|e| e.is_content()).count()
}
