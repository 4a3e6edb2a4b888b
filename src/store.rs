//! Text storage backends for the editing surface.
//!
//! Provides the `TextStore` trait that abstracts over different backends
//! (String for small plain inputs, Rope for multi-line documents).

use ropey::Rope;
use std::ops::Range;

/// Backing store for document text, addressed by character offsets.
///
/// All ranges are clamped to the current length, so callers may pass stale
/// offsets safely (e.g. a selection captured before the text shrank).
pub trait TextStore {
    /// Create a store holding the given text
    fn from_text(text: &str) -> Self;

    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if the store is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get full content as String (may be expensive for large buffers)
    fn text(&self) -> String;

    /// Get slice of text as String (by character indices)
    fn slice(&self, range: Range<usize>) -> String;

    /// Replace text in a character range with new text (atomic operation)
    fn replace(&mut self, range: Range<usize>, text: &str);
}

// =============================================================================
// PlainStore - for single-line plain inputs
// =============================================================================

/// TextStore implementation wrapping String. Used for small plain inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainStore {
    text: String,
}

impl PlainStore {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextStore for PlainStore {
    fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.text.chars().skip(start).take(end - start).collect()
    }

    fn replace(&mut self, range: Range<usize>, text: &str) {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        let start_byte = self.char_to_byte(start);
        let end_byte = self.char_to_byte(end);
        self.text.replace_range(start_byte..end_byte, text);
    }
}

// =============================================================================
// RopeStore - for multi-line document editing
// =============================================================================

/// TextStore implementation wrapping ropey::Rope.
/// Used for multi-line Markdown documents with efficient incremental edits.
#[derive(Debug, Clone)]
pub struct RopeStore {
    rope: Rope,
}

impl RopeStore {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }
}

impl Default for RopeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStore for RopeStore {
    fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn replace(&mut self, range: Range<usize>, text: &str) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // PlainStore tests
    #[test]
    fn test_plain_store_empty() {
        let store = PlainStore::new();
        assert!(store.is_empty());
        assert_eq!(store.text(), "");
        assert_eq!(store.slice(0..10), "");
    }

    #[test]
    fn test_plain_store_basic() {
        let store = PlainStore::from_text("hello");
        assert_eq!(store.len_chars(), 5);
        assert!(!store.is_empty());
        assert_eq!(store.text(), "hello");
    }

    #[test]
    fn test_plain_store_utf8() {
        let store = PlainStore::from_text("héllo");
        assert_eq!(store.len_chars(), 5);
        assert_eq!(store.slice(1..2), "é");
    }

    #[test]
    fn test_plain_store_replace_insert() {
        let mut store = PlainStore::from_text("hello");
        store.replace(5..5, " world");
        assert_eq!(store.text(), "hello world");
    }

    #[test]
    fn test_plain_store_replace_utf8() {
        let mut store = PlainStore::from_text("héllo");
        store.replace(2..2, "X"); // After é
        assert_eq!(store.text(), "héXllo");
    }

    #[test]
    fn test_plain_store_replace_delete() {
        let mut store = PlainStore::from_text("hello world");
        store.replace(5..11, "");
        assert_eq!(store.text(), "hello");
    }

    #[test]
    fn test_plain_store_replace_swap() {
        let mut store = PlainStore::from_text("hello world");
        store.replace(6..11, "there");
        assert_eq!(store.text(), "hello there");
    }

    #[test]
    fn test_plain_store_slice() {
        let store = PlainStore::from_text("hello world");
        assert_eq!(store.slice(0..5), "hello");
        assert_eq!(store.slice(6..11), "world");
        assert_eq!(store.slice(6..6), "");
    }

    #[test]
    fn test_plain_store_clamps_out_of_range() {
        let mut store = PlainStore::from_text("abc");
        assert_eq!(store.slice(2..99), "c");
        store.replace(10..20, "x");
        assert_eq!(store.text(), "abcx");
        assert_eq!(store.slice(2..99), "cx");
    }

    // RopeStore tests
    #[test]
    fn test_rope_store_multiline() {
        let store = RopeStore::from_text("line1\nline2\nline3");
        assert_eq!(store.len_chars(), 17);
        assert_eq!(store.slice(6..11), "line2");
    }

    #[test]
    fn test_rope_store_replace_insert() {
        let mut store = RopeStore::from_text("hello\nworld");
        store.replace(6..6, "beautiful ");
        assert_eq!(store.text(), "hello\nbeautiful world");
    }

    #[test]
    fn test_rope_store_replace_across_lines() {
        let mut store = RopeStore::from_text("hello\nworld");
        store.replace(3..8, "");
        assert_eq!(store.text(), "helrld");
    }

    #[test]
    fn test_rope_store_replace_all() {
        let mut store = RopeStore::from_text("old content");
        let len = store.len_chars();
        store.replace(0..len, "new");
        assert_eq!(store.text(), "new");
    }

    #[test]
    fn test_rope_store_clamps_out_of_range() {
        let mut store = RopeStore::from_text("abc");
        store.replace(10..20, "x");
        assert_eq!(store.text(), "abcx");
    }

    #[test]
    fn test_rope_store_empty() {
        let store = RopeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.text(), "");
        assert_eq!(store.slice(0..10), "");
    }
}
