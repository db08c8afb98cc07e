//! In-memory host harness

use dashmap::DashMap;
use lsp_types::Position;
use sfdoc_engine::HeaderPipeline;
use sfdoc_foundation::text::apply_text_edits;
use sfdoc_foundation::{Document, EditorSurface};

/// A document held as a plain string, playing the role of an editor buffer.
pub struct FixtureDocument {
    pub uri: String,
    pub language_id: String,
    pub text: String,
    pub dirty: bool,
}

impl FixtureDocument {
    pub fn new(path: &str, language_id: &str, text: &str) -> Self {
        Self {
            uri: format!("file://{path}"),
            language_id: language_id.to_string(),
            text: text.to_string(),
            dirty: true,
        }
    }

    /// An Apex class under the standard source layout.
    pub fn apex(file_name: &str, text: &str) -> Self {
        Self::new(
            &format!("/force-app/main/default/classes/{file_name}"),
            "apex",
            text,
        )
    }
}

impl Document for FixtureDocument {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// An editor surface with a fixed active caret that records every caret
/// move the engine makes.
pub struct RecordingEditor {
    caret: Option<Position>,
    restored: DashMap<String, Position>,
}

impl RecordingEditor {
    /// A surface whose active editor sits at `caret` for every document.
    pub fn with_caret(caret: Position) -> Self {
        Self {
            caret: Some(caret),
            restored: DashMap::new(),
        }
    }

    /// A surface with no active editor, as in save-all or scripted runs.
    pub fn background() -> Self {
        Self {
            caret: None,
            restored: DashMap::new(),
        }
    }

    /// The last position the engine moved the caret to for `uri`.
    pub fn restored(&self, uri: &str) -> Option<Position> {
        self.restored.get(uri).map(|entry| *entry)
    }
}

impl EditorSurface for RecordingEditor {
    fn active_caret(&self, _uri: &str) -> Option<Position> {
        self.caret
    }

    fn set_caret(&self, uri: &str, position: Position) {
        self.restored.insert(uri.to_string(), position);
    }
}

/// Play one full save: will-save edits, apply them to the buffer, then
/// the did-save hook. Returns whether the save produced edits.
pub fn run_save(pipeline: &HeaderPipeline, document: &mut FixtureDocument) -> bool {
    let edits = pipeline.will_save(&*document);
    let stamped = !edits.is_empty();
    if stamped {
        document.text = apply_text_edits(&document.text, &edits);
    }
    pipeline.did_save(&document.uri);
    stamped
}
