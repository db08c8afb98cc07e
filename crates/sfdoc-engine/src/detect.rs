//! First-line header presence detection

use sfdoc_foundation::Document;

/// Whether a file header already sits on the document's first line.
///
/// Only the first line counts: it must open a block (`/*`) or markup
/// (`<!--`) comment after optional leading whitespace. Comments further
/// down are ordinary code documentation, not file headers.
pub fn header_present(document: &dyn Document) -> bool {
    match document.line_text(0) {
        Some(line) => {
            let trimmed = line.trim_start();
            trimmed.starts_with("/*") || trimmed.starts_with("<!--")
        }
        None => false,
    }
}
