//! Editor surface for scripted runs
//!
//! The CLI stands in for an editor: the caret the user passed on the
//! command line plays the role of the active caret, and restored
//! positions are parked per document so the commands can report them.

use dashmap::DashMap;
use lsp_types::Position;
use sfdoc_foundation::EditorSurface;

/// An [`EditorSurface`] driven by command-line arguments.
pub struct ScriptedEditor {
    caret: Option<Position>,
    restored: DashMap<String, Position>,
}

impl ScriptedEditor {
    /// A surface whose active caret is `caret` for every document.
    pub fn new(caret: Option<Position>) -> Self {
        Self {
            caret,
            restored: DashMap::new(),
        }
    }

    /// The position the engine moved the caret to for `uri`, if any.
    pub fn restored(&self, uri: &str) -> Option<Position> {
        self.restored.get(uri).map(|entry| *entry)
    }
}

impl EditorSurface for ScriptedEditor {
    fn active_caret(&self, _uri: &str) -> Option<Position> {
        self.caret
    }

    fn set_caret(&self, uri: &str, position: Position) {
        self.restored.insert(uri.to_string(), position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restored_positions_are_tracked_per_uri() {
        let editor = ScriptedEditor::new(Some(Position::new(4, 2)));
        assert_eq!(editor.active_caret("file:///a.cls"), Some(Position::new(4, 2)));
        assert_eq!(editor.restored("file:///a.cls"), None);

        editor.set_caret("file:///a.cls", Position::new(15, 2));
        assert_eq!(editor.restored("file:///a.cls"), Some(Position::new(15, 2)));
        assert_eq!(editor.restored("file:///b.cls"), None);
    }

    #[test]
    fn test_background_surface_has_no_caret() {
        let editor = ScriptedEditor::new(None);
        assert_eq!(editor.active_caret("file:///a.cls"), None);
    }
}
