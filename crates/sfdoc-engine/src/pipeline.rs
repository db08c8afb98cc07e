//! Save-path orchestration
//!
//! Ties the eligibility filter, presence detector, template engine, field
//! updater, and cursor tracker together. The host owns the hooks: it calls
//! [`HeaderPipeline::will_save`] before persisting a document, applies the
//! returned edits, then calls [`HeaderPipeline::did_save`] once the save
//! lands. The explicit insert commands bypass the save gates.

use std::sync::Arc;

use lsp_types::{Position, Range, TextEdit};
use tracing::{debug, info};

use chrono::Local;
use sfdoc_config::DocumenterConfig;
use sfdoc_foundation::model::LanguageKind;
use sfdoc_foundation::text::full_document_range;
use sfdoc_foundation::{Document, EditorSurface};

use crate::cursor::CursorTracker;
use crate::detect::header_present;
use crate::eligibility::is_eligible;
use crate::error::CommandError;
use crate::method;
use crate::template::{render_file_header, StampContext};
use crate::update::update_dynamic_fields;

/// One long-lived pipeline instance per host session.
pub struct HeaderPipeline {
    config: DocumenterConfig,
    editor: Arc<dyn EditorSurface>,
    cursor: CursorTracker,
}

impl HeaderPipeline {
    pub fn new(config: DocumenterConfig, editor: Arc<dyn EditorSurface>) -> Self {
        Self {
            config,
            editor,
            cursor: CursorTracker::new(),
        }
    }

    /// Pre-save hook. Returns the edits the host must apply before the
    /// document is persisted; an empty list means the save proceeds
    /// untouched.
    ///
    /// A clean, unmanaged, or ineligible document also drops any stale
    /// snapshot left behind by an aborted earlier save.
    pub fn will_save(&self, document: &dyn Document) -> Vec<TextEdit> {
        let uri = document.uri();

        if !document.is_dirty() {
            self.cursor.discard(uri);
            return Vec::new();
        }

        let Some(kind) = LanguageKind::from_language_id(document.language_id()) else {
            debug!(uri, language = document.language_id(), "Language not managed");
            self.cursor.discard(uri);
            return Vec::new();
        };

        if !is_eligible(kind, document, &self.config.languages) {
            self.cursor.discard(uri);
            return Vec::new();
        }

        let ctx = self.stamp_context(document);
        let text = document.text();

        let (edit, line_delta) = if header_present(document) {
            let updated = update_dynamic_fields(text, &self.config.file_header.properties, &ctx);
            let edit = TextEdit {
                range: full_document_range(text),
                new_text: updated,
            };
            (edit, 0)
        } else {
            let header = render_file_header(&self.config.file_header, kind.comment_style(), &ctx);
            info!(uri, ?kind, "Inserting file header");
            let line_delta = header.lines().count() as u32;
            let edit = TextEdit {
                range: Range {
                    start: Position::new(0, 0),
                    end: Position::new(0, 0),
                },
                new_text: header,
            };
            (edit, line_delta)
        };

        // No active caret means a scripted save; nothing to restore later.
        if let Some(position) = self.editor.active_caret(uri) {
            self.cursor.capture(uri, position, line_delta);
        }

        vec![edit]
    }

    /// Post-save hook. Puts the caret back where [`Self::will_save`]
    /// captured it, compensated for inserted header lines. Documents
    /// without a live snapshot are left alone.
    pub fn did_save(&self, uri: &str) {
        if let Some(snapshot) = self.cursor.take(uri) {
            self.editor.set_caret(uri, snapshot.restored_position());
        }
    }

    /// The host aborted a save after `will_save`; the snapshot must not
    /// replay on a later, unrelated save.
    pub fn cancel_save(&self, uri: &str) {
        self.cursor.discard(uri);
    }

    /// Explicit "insert file header" command. Gated on the language id
    /// alone; the per-language enable toggles only govern the save path.
    pub fn insert_file_header(&self, document: &dyn Document) -> Result<TextEdit, CommandError> {
        let Some(kind) = LanguageKind::from_language_id(document.language_id()) else {
            return Err(CommandError::UnsupportedLanguage);
        };

        if header_present(document) {
            return Err(CommandError::HeaderAlreadyPresent);
        }

        let ctx = self.stamp_context(document);
        let header = render_file_header(&self.config.file_header, kind.comment_style(), &ctx);

        Ok(TextEdit {
            range: Range {
                start: Position::new(0, 0),
                end: Position::new(0, 0),
            },
            new_text: header,
        })
    }

    /// Explicit "insert method header at caret" command.
    pub fn insert_method_header(
        &self,
        document: &dyn Document,
        selection: Range,
    ) -> Result<TextEdit, CommandError> {
        let ctx = self.stamp_context(document);
        method::insert_method_header(document, selection, &self.config.method_header, &ctx)
    }

    fn stamp_context<'a>(&'a self, document: &'a dyn Document) -> StampContext<'a> {
        let path = document.path();
        let file_name = path.rsplit('/').next().unwrap_or(path);
        StampContext::new(&self.config, file_name, Local::now().date_naive())
    }
}
