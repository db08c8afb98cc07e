//! Cursor compensation across save-triggered edits
//!
//! Inserting a header above line 0 pushes the caret down by the header's
//! height. A snapshot taken before the edit carries that height, so the
//! post-save hook can put the caret back where the user left it.

use dashmap::DashMap;
use lsp_types::Position;

/// Caret state captured when a save begins, consumed when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Caret position before the save edit was applied.
    pub position: Position,
    /// Lines inserted above the caret by the edit. Zero on the update
    /// path, the rendered header's line count on the insert path.
    pub line_delta: u32,
}

impl CursorSnapshot {
    pub fn restored_position(&self) -> Position {
        Position::new(self.position.line + self.line_delta, self.position.character)
    }
}

/// Live snapshots keyed by document URI.
///
/// At most one snapshot per document; a second capture for the same URI
/// overwrites the first. Saves of different documents may overlap, so the
/// map is shared-access safe.
#[derive(Debug, Default)]
pub struct CursorTracker {
    snapshots: DashMap<String, CursorSnapshot>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(&self, uri: &str, position: Position, line_delta: u32) {
        self.snapshots
            .insert(uri.to_string(), CursorSnapshot { position, line_delta });
    }

    /// Remove and return the snapshot for `uri`, if one is live.
    pub fn take(&self, uri: &str) -> Option<CursorSnapshot> {
        self.snapshots.remove(uri).map(|(_, snapshot)| snapshot)
    }

    /// Drop a snapshot that will never be restored (ineligible document,
    /// cancelled save).
    pub fn discard(&self, uri: &str) {
        self.snapshots.remove(uri);
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_consumes_the_snapshot() {
        let tracker = CursorTracker::new();
        tracker.capture("file:///a.cls", Position::new(14, 3), 11);

        let snapshot = tracker.take("file:///a.cls").unwrap();
        assert_eq!(snapshot.restored_position(), Position::new(25, 3));
        assert_eq!(tracker.take("file:///a.cls"), None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_update_path_keeps_the_caret_line() {
        let snapshot = CursorSnapshot {
            position: Position::new(14, 7),
            line_delta: 0,
        };
        assert_eq!(snapshot.restored_position(), Position::new(14, 7));
    }

    #[test]
    fn test_second_capture_wins() {
        let tracker = CursorTracker::new();
        tracker.capture("file:///a.cls", Position::new(1, 0), 11);
        tracker.capture("file:///a.cls", Position::new(9, 2), 0);

        let snapshot = tracker.take("file:///a.cls").unwrap();
        assert_eq!(snapshot.position, Position::new(9, 2));
        assert_eq!(snapshot.line_delta, 0);
    }

    #[test]
    fn test_documents_do_not_share_snapshots() {
        let tracker = CursorTracker::new();
        tracker.capture("file:///a.cls", Position::new(1, 0), 11);
        tracker.capture("file:///b.page", Position::new(2, 0), 9);

        tracker.discard("file:///a.cls");
        assert_eq!(tracker.take("file:///a.cls"), None);

        let kept = tracker.take("file:///b.page").unwrap();
        assert_eq!(kept.line_delta, 9);
    }
}
