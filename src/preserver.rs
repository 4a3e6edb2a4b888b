//! Selection preservation across focus loss and session teardown.

use crate::selection::Selection;

/// One-shot snapshot of the selection across a focus cycle.
///
/// Focus loss with a live session captures the selection; the next focus
/// gain takes the snapshot (clamping is the caller's job, against the text
/// at restore time) and the preserver returns to idle. A snapshot is never
/// applied twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionPreserver {
    snapshot: Option<Selection>,
}

impl SelectionPreserver {
    pub fn new() -> Self {
        Self { snapshot: None }
    }

    /// Check if no snapshot is held
    pub fn is_idle(&self) -> bool {
        self.snapshot.is_none()
    }

    /// Capture a selection, replacing any previously held snapshot
    pub fn capture(&mut self, selection: Selection) {
        self.snapshot = Some(selection);
    }

    /// Take the snapshot, returning the preserver to idle. None when idle.
    pub fn take(&mut self) -> Option<Selection> {
        self.snapshot.take()
    }

    /// Peek at the held snapshot without consuming it
    pub fn snapshot(&self) -> Option<Selection> {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let preserver = SelectionPreserver::new();
        assert!(preserver.is_idle());
        assert_eq!(preserver.snapshot(), None);
    }

    #[test]
    fn test_capture_then_take() {
        let mut preserver = SelectionPreserver::new();
        preserver.capture(Selection::new(2, 7));
        assert!(!preserver.is_idle());

        assert_eq!(preserver.take(), Some(Selection::new(2, 7)));
        assert!(preserver.is_idle());
    }

    #[test]
    fn test_take_is_one_shot() {
        let mut preserver = SelectionPreserver::new();
        preserver.capture(Selection::caret(4));
        preserver.take();
        assert_eq!(preserver.take(), None);
    }

    #[test]
    fn test_take_when_idle() {
        let mut preserver = SelectionPreserver::new();
        assert_eq!(preserver.take(), None);
    }

    #[test]
    fn test_recapture_replaces_snapshot() {
        let mut preserver = SelectionPreserver::new();
        preserver.capture(Selection::new(0, 3));
        preserver.capture(Selection::new(5, 8));
        assert_eq!(preserver.take(), Some(Selection::new(5, 8)));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut preserver = SelectionPreserver::new();
        preserver.capture(Selection::caret(1));
        assert_eq!(preserver.snapshot(), Some(Selection::caret(1)));
        assert!(!preserver.is_idle());
    }
}
