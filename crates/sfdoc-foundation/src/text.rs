//! Text position and edit utilities
//!
//! Hosts that hold documents as plain strings (the CLI, tests) use these
//! to resolve LSP positions and apply the engine's edits.

use lsp_types::{Position, Range, TextEdit};
use tracing::warn;

/// Convert a line/character position to a byte offset.
///
/// Character offsets are clamped to the end of their line; positions past
/// the last line resolve to the end of the text.
pub fn position_to_offset(text: &str, line: u32, character: u32) -> usize {
    let mut offset = 0;
    for (i, line_content) in text.lines().enumerate() {
        if i == line as usize {
            let char_offset = line_content
                .char_indices()
                .take(character as usize)
                .last()
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);
            return offset + char_offset;
        }
        offset += line_content.len() + 1; // +1 for newline
    }
    text.len()
}

/// Apply text edits to an in-memory document.
///
/// Edits are sorted in reverse document order so earlier edits do not
/// invalidate the ranges of later ones. Edits whose range does not resolve
/// are skipped.
pub fn apply_text_edits(text: &str, edits: &[TextEdit]) -> String {
    let mut sorted: Vec<&TextEdit> = edits.iter().collect();
    sorted.sort_by(|a, b| match b.range.end.line.cmp(&a.range.end.line) {
        std::cmp::Ordering::Equal => b.range.end.character.cmp(&a.range.end.character),
        other => other,
    });

    let mut result = text.to_string();
    for edit in sorted {
        let start_offset =
            position_to_offset(&result, edit.range.start.line, edit.range.start.character);
        let end_offset = position_to_offset(&result, edit.range.end.line, edit.range.end.character);

        if start_offset <= end_offset && end_offset <= result.len() {
            result.replace_range(start_offset..end_offset, &edit.new_text);
        } else {
            warn!(
                start_line = edit.range.start.line,
                start_char = edit.range.start.character,
                end_line = edit.range.end.line,
                end_char = edit.range.end.character,
                "Invalid edit range, skipping"
            );
        }
    }
    result
}

/// Range covering the entire document, for whole-text replacement edits.
///
/// The end position sits one line past the last, which `position_to_offset`
/// resolves to the end of the text.
pub fn full_document_range(text: &str) -> Range {
    Range {
        start: Position::new(0, 0),
        end: Position::new(text.lines().count() as u32, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edit(start: (u32, u32), end: (u32, u32), new_text: &str) -> TextEdit {
        TextEdit {
            range: Range {
                start: Position::new(start.0, start.1),
                end: Position::new(end.0, end.1),
            },
            new_text: new_text.to_string(),
        }
    }

    #[test]
    fn test_position_to_offset_basic() {
        let text = "hello\nworld\n";
        assert_eq!(position_to_offset(text, 0, 0), 0);
        assert_eq!(position_to_offset(text, 0, 5), 5);
        assert_eq!(position_to_offset(text, 1, 0), 6);
        assert_eq!(position_to_offset(text, 1, 3), 9);
    }

    #[test]
    fn test_position_to_offset_clamps() {
        let text = "ab\ncd";
        // Past end of line clamps to the line end.
        assert_eq!(position_to_offset(text, 0, 99), 2);
        // Past the last line resolves to the end of the text.
        assert_eq!(position_to_offset(text, 7, 0), 5);
        assert_eq!(position_to_offset("", 0, 0), 0);
    }

    #[test]
    fn test_insert_at_document_start() {
        let edits = vec![edit((0, 0), (0, 0), "/**\n **/\n")];
        assert_eq!(apply_text_edits("class A {}\n", &edits), "/**\n **/\nclass A {}\n");
    }

    #[test]
    fn test_edits_apply_in_reverse_order() {
        let text = "one\ntwo\nthree\n";
        let edits = vec![
            edit((0, 0), (0, 3), "ONE"),
            edit((2, 0), (2, 5), "THREE"),
        ];
        assert_eq!(apply_text_edits(text, &edits), "ONE\ntwo\nTHREE\n");
    }

    #[test]
    fn test_full_document_replacement() {
        let text = "old\ncontent\n";
        let range = full_document_range(text);
        let edits = vec![TextEdit {
            range,
            new_text: "fresh\n".to_string(),
        }];
        assert_eq!(apply_text_edits(text, &edits), "fresh\n");
    }

    #[test]
    fn test_full_document_range_on_empty_text() {
        let range = full_document_range("");
        assert_eq!(range.start, Position::new(0, 0));
        assert_eq!(range.end, Position::new(0, 0));
    }
}
