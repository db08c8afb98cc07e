//! Host protocol traits
//!
//! The engine never talks to an editor directly. Hosts (an editor adapter,
//! the CLI, test harnesses) implement these traits and hand the engine
//! trait objects, so every save-path decision stays testable in isolation.

use lsp_types::Position;

/// A read-only view of one open document.
///
/// Identity is the URI string; `path()` is the filesystem-style path used
/// by the component-bundle heuristic and the `$filename` placeholder.
pub trait Document: Send + Sync {
    /// Document URI, used as the key for cursor snapshots.
    fn uri(&self) -> &str;

    /// The editor's language identifier (e.g. `apex`, `html`).
    fn language_id(&self) -> &str;

    /// Full document text.
    fn text(&self) -> &str;

    /// Whether the document has unsaved changes.
    fn is_dirty(&self) -> bool;

    /// Filesystem-style path. Defaults to the URI with any `file://`
    /// scheme stripped.
    fn path(&self) -> &str {
        let uri = self.uri();
        uri.strip_prefix("file://").unwrap_or(uri)
    }

    /// Number of lines, counting a trailing empty line after a final
    /// newline (an empty document has one line).
    fn line_count(&self) -> u32 {
        self.text().split('\n').count() as u32
    }

    /// Text of one line without its line terminator, `None` past the end.
    fn line_text(&self, line: u32) -> Option<&str> {
        self.text()
            .split('\n')
            .nth(line as usize)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }
}

/// The caret surface of the hosting editor.
pub trait EditorSurface: Send + Sync {
    /// Caret position of the active editor, when the active editor shows
    /// `uri`. `None` for background saves (save-all, scripted saves).
    fn active_caret(&self, uri: &str) -> Option<Position>;

    /// Move the caret in every visible editor showing `uri`.
    fn set_caret(&self, uri: &str, position: Position);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixtureDoc {
        text: &'static str,
    }

    impl Document for FixtureDoc {
        fn uri(&self) -> &str {
            "file:///force-app/main/default/classes/Fixture.cls"
        }
        fn language_id(&self) -> &str {
            "apex"
        }
        fn text(&self) -> &str {
            self.text
        }
        fn is_dirty(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_line_count_matches_editor_semantics() {
        assert_eq!(FixtureDoc { text: "" }.line_count(), 1);
        assert_eq!(FixtureDoc { text: "a" }.line_count(), 1);
        assert_eq!(FixtureDoc { text: "a\n" }.line_count(), 2);
        assert_eq!(FixtureDoc { text: "a\nb" }.line_count(), 2);
    }

    #[test]
    fn test_line_text_strips_carriage_returns() {
        let doc = FixtureDoc { text: "one\r\ntwo\r\n" };
        assert_eq!(doc.line_text(0), Some("one"));
        assert_eq!(doc.line_text(1), Some("two"));
        assert_eq!(doc.line_text(2), Some(""));
        assert_eq!(doc.line_text(3), None);
    }

    #[test]
    fn test_default_path_strips_file_scheme() {
        let doc = FixtureDoc { text: "" };
        assert_eq!(doc.path(), "/force-app/main/default/classes/Fixture.cls");
    }
}
