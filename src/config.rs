//! Session configuration: immutable base options plus named
//! reconfiguration slots.
//!
//! Base options are fixed for the life of a session. The two slots
//! (placeholder text, read-only flag) can be swapped independently at any
//! time; swapping one recomputes the effective configuration without
//! rebuilding the session or touching buffer history.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base session options, fixed at session creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Placeholder text shown by renderers while the document is empty
    #[serde(default)]
    pub placeholder: String,
    /// Start in read-only mode
    #[serde(default)]
    pub read_only: bool,
    /// Soft-wrap long lines in renderers
    #[serde(default = "default_line_wrapping")]
    pub line_wrapping: bool,
    /// Maximum number of undo steps kept
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,
}

fn default_line_wrapping() -> bool {
    true
}

fn default_undo_limit() -> usize {
    1000
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            read_only: false,
            line_wrapping: default_line_wrapping(),
            undo_limit: default_undo_limit(),
        }
    }
}

/// Names of the independently reconfigurable slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigSlot {
    /// Placeholder text shown while the document is empty
    Placeholder,
    /// Whether user edits are rejected
    ReadOnly,
}

/// A replacement value for one slot. The slot name is part of the value,
/// so a value can never land in the wrong slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotValue {
    Placeholder(String),
    ReadOnly(bool),
}

impl SlotValue {
    /// The slot this value belongs to
    pub fn slot(&self) -> ConfigSlot {
        match self {
            SlotValue::Placeholder(_) => ConfigSlot::Placeholder,
            SlotValue::ReadOnly(_) => ConfigSlot::ReadOnly,
        }
    }
}

/// The resolved configuration renderers and the bridge consume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub placeholder: String,
    pub read_only: bool,
    pub line_wrapping: bool,
}

/// Session configuration: an immutable base plus a per-slot override table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    base: EditorOptions,
    overrides: HashMap<ConfigSlot, SlotValue>,
}

impl SessionConfig {
    pub fn new(base: EditorOptions) -> Self {
        Self {
            base,
            overrides: HashMap::new(),
        }
    }

    /// Base options the session was created with
    pub fn base(&self) -> &EditorOptions {
        &self.base
    }

    /// Effective placeholder text (override wins over base)
    pub fn placeholder(&self) -> &str {
        match self.overrides.get(&ConfigSlot::Placeholder) {
            Some(SlotValue::Placeholder(text)) => text,
            _ => &self.base.placeholder,
        }
    }

    /// Effective read-only flag (override wins over base)
    pub fn is_read_only(&self) -> bool {
        match self.overrides.get(&ConfigSlot::ReadOnly) {
            Some(SlotValue::ReadOnly(flag)) => *flag,
            _ => self.base.read_only,
        }
    }

    /// Replace one slot's value, leaving every other slot and the base
    /// untouched. Returns true when the effective configuration changed;
    /// swapping in the current value is a no-op.
    pub fn reconfigure(&mut self, value: SlotValue) -> bool {
        let slot = value.slot();
        let before = self.effective();
        self.overrides.insert(slot, value);
        let changed = self.effective() != before;
        if changed {
            tracing::debug!("Reconfigured {:?} slot", slot);
        }
        changed
    }

    /// Compute the effective configuration from the base and the override table
    pub fn effective(&self) -> EffectiveConfig {
        EffectiveConfig {
            placeholder: self.placeholder().to_string(),
            read_only: self.is_read_only(),
            line_wrapping: self.base.line_wrapping,
        }
    }
}
