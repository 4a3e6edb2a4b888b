//! Selection preservation tests - blur/focus cycles and teardown survival

mod common;

use common::{attach_recorder, event_names, mounted_editor};
use markpad::Selection;

// ========================================================================
// Round trips
// ========================================================================

#[test]
fn test_selection_round_trip_across_blur() {
    let mut editor = mounted_editor("hello world");
    editor.focus();
    editor.set_selection(Selection::new(2, 7));

    editor.blur();
    editor.focus();
    assert_eq!(editor.selection(), Selection::new(2, 7));
}

#[test]
fn test_reversed_selection_round_trip() {
    let mut editor = mounted_editor("hello world");
    editor.focus();
    editor.set_selection(Selection::new(7, 2));

    editor.blur();
    editor.focus();
    let restored = editor.selection();
    assert_eq!(restored, Selection::new(7, 2));
    assert!(restored.is_reversed());
}

#[test]
fn test_restore_clamps_after_truncation() {
    let mut editor = mounted_editor("hello world");
    editor.focus();
    editor.set_selection(Selection::new(4, 9));

    editor.blur();
    editor.set_value("hello");
    editor.focus();
    assert_eq!(editor.selection(), Selection::new(4, 5));
}

// ========================================================================
// One-shot semantics
// ========================================================================

#[test]
fn test_snapshot_not_reused_across_cycles() {
    let mut editor = mounted_editor("abcdef");
    editor.focus();
    editor.set_selection(Selection::new(1, 4));
    editor.blur();
    editor.focus();
    assert_eq!(editor.selection(), Selection::new(1, 4));

    editor.set_selection(Selection::caret(0));
    editor.blur();
    editor.focus();

    // The earlier snapshot is gone; only the latest capture applies
    assert_eq!(editor.selection(), Selection::caret(0));
}

#[test]
fn test_first_focus_leaves_selection_alone() {
    let mut editor = mounted_editor("abcdef");
    editor.set_selection(Selection::new(2, 3));

    editor.focus();
    assert_eq!(editor.selection(), Selection::new(2, 3));
}

// ========================================================================
// Teardown survival
// ========================================================================

#[test]
fn test_selection_survives_unmount_remount() {
    let mut editor = mounted_editor("hello world");
    editor.focus();
    editor.set_selection(Selection::new(3, 8));

    editor.unmount();
    editor.mount();
    editor.focus();
    assert_eq!(editor.selection(), Selection::new(3, 8));
}

#[test]
fn test_unfocused_unmount_captures_live_selection() {
    let mut editor = mounted_editor("hello world");
    editor.set_selection(Selection::new(1, 5));

    editor.unmount();
    editor.mount();
    editor.focus();
    assert_eq!(editor.selection(), Selection::new(1, 5));
}

#[test]
fn test_unmount_after_blur_keeps_blur_snapshot() {
    let mut editor = mounted_editor("hello world");
    editor.focus();
    editor.set_selection(Selection::new(2, 4));
    editor.blur();

    // Selection moved after blur; the blur-time snapshot still wins
    editor.set_selection(Selection::caret(0));
    editor.unmount();
    editor.mount();
    editor.focus();
    assert_eq!(editor.selection(), Selection::new(2, 4));
}

#[test]
fn test_snapshot_clamped_against_remount_text() {
    let mut editor = mounted_editor("hello world");
    editor.focus();
    editor.set_selection(Selection::new(4, 9));
    editor.unmount();

    editor.set_value("hey");
    editor.mount();
    editor.focus();
    assert_eq!(editor.selection(), Selection::caret(3));
}

// ========================================================================
// Focus notifications
// ========================================================================

#[test]
fn test_focus_and_blur_notify() {
    let mut editor = mounted_editor("abc");
    let events = attach_recorder(&mut editor);

    editor.focus();
    editor.blur();
    assert_eq!(event_names(&events), vec!["focus", "blur"]);
}

#[test]
fn test_redundant_focus_is_silent() {
    let mut editor = mounted_editor("abc");
    let events = attach_recorder(&mut editor);

    editor.focus();
    editor.focus();
    assert_eq!(event_names(&events), vec!["focus"]);
}

#[test]
fn test_blur_without_focus_is_silent() {
    let mut editor = mounted_editor("abc");
    let events = attach_recorder(&mut editor);

    editor.blur();
    assert!(events.borrow().is_empty());
}
