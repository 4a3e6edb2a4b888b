//! Embeddable, headless Markdown editing surface.
//!
//! markpad keeps an externally observable string value consistent with an
//! internally mutable, incrementally edited document buffer, without
//! feedback loops. Around that core it carries what an embedding host
//! needs from a text widget but does not want to build: selection
//! preservation across focus and teardown cycles, plus clipboard HTML to
//! Markdown conversion with a plain-text fallback. Session configuration
//! is immutable apart from two named reconfiguration slots. Rendering and
//! layout are the host's job.
//!
//! # Architecture
//!
//! - [`EditorSurface`] / [`MarkdownEditor`]: the widget shell hosts embed
//! - [`DocumentBridge`]: value/buffer synchronization with the re-entrancy
//!   guard against update feedback loops
//! - [`SelectionPreserver`]: one-shot selection snapshots across focus cycles
//! - [`ClipboardPayload`] / [`convert_payload`]: the paste conversion pipeline
//! - [`SessionConfig`]: immutable base options plus reconfigurable slots
//! - [`EditBuffer`] over [`TextStore`]: the live session ([`RopeStore`] for
//!   documents, [`PlainStore`] for single-line inputs)
//!
//! # Example
//!
//! ```
//! use markpad::{ClipboardPayload, EditorOptions, MarkdownEditor};
//!
//! let mut editor = MarkdownEditor::new(EditorOptions::default());
//! editor.mount();
//! editor.focus();
//!
//! // Rich clipboard content becomes Markdown on paste
//! editor.paste(&ClipboardPayload::with_html("<strong>bold</strong>", "bold"));
//! assert_eq!(editor.value(), "**bold**");
//!
//! // Assigning the value the editor already holds is a no-op
//! editor.set_value("**bold**");
//! assert_eq!(editor.revision(), 1);
//! ```

mod bridge;
mod buffer;
mod clipboard;
mod config;
mod convert;
mod events;
mod history;
mod preserver;
mod selection;
mod store;
mod surface;

pub mod tracing;

// Re-export main types
pub use bridge::{DocumentBridge, InsertOutcome};
pub use buffer::EditBuffer;
pub use config::{ConfigSlot, EditorOptions, EffectiveConfig, SessionConfig, SlotValue};
pub use convert::{convert_payload, ClipboardPayload};
pub use events::{EditorEvent, EventListeners};
pub use history::{EditHistory, EditOp};
pub use preserver::SelectionPreserver;
pub use selection::Selection;
pub use store::{PlainStore, RopeStore, TextStore};
pub use surface::{EditorSurface, MarkdownEditor};
