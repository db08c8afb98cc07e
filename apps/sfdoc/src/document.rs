//! Filesystem-backed documents
//!
//! The CLI has no live editor buffer, so a document is a file read into
//! memory. The language id is inferred from the extension unless the user
//! overrides it on the command line.

use std::path::Path;

use anyhow::{Context, Result};
use sfdoc_foundation::{Document, DocumenterError};

/// One file loaded for stamping.
pub struct FileDocument {
    uri: String,
    language_id: String,
    text: String,
}

impl FileDocument {
    /// Read `path` and classify it, honoring an explicit language override.
    pub async fn load(path: &Path, language_override: Option<&str>) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(DocumenterError::Io)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let language_id = match language_override {
            Some(id) => id.to_string(),
            None => language_from_extension(path)
                .ok_or_else(|| {
                    DocumenterError::invalid_input(format!(
                        "Cannot infer a language for {}; pass --language",
                        path.display()
                    ))
                })?
                .to_string(),
        };

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let uri = format!("file://{}", canonical.display().to_string().replace('\\', "/"));

        Ok(Self {
            uri,
            language_id,
            text,
        })
    }
}

impl Document for FileDocument {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn text(&self) -> &str {
        &self.text
    }

    /// A file loaded for an explicit stamp run always counts as dirty.
    fn is_dirty(&self) -> bool {
        true
    }
}

/// Map a Salesforce source extension to its editor language id.
fn language_from_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "cls" | "trigger" | "apex" => Some("apex"),
        "page" | "component" => Some("visualforce"),
        "html" | "htm" => Some("html"),
        "js" => Some("javascript"),
        "xml" | "cmp" => Some("xml"),
        _ => None,
    }
}
