//! One-shot visibility into legacy `[autoheader]` settings.
//!
//! Earlier releases stored their settings under an `[autoheader]` table.
//! Values found there still apply, below the current `[documenter]` table
//! in the layering order, and emit a deprecation warning so users know to
//! move them.

use figment::providers::{Format, Toml};
use figment::Figment;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
struct LegacyTable {
    username: Option<String>,
    enable_for_apex: Option<bool>,
    enable_for_visualforce: Option<bool>,
    enable_for_lightning_markup: Option<bool>,
    enable_for_lightning_javascript: Option<bool>,
    enable_for_all_web_files: Option<bool>,
}

/// Read legacy values from `[autoheader]` mapped onto the `[documenter]`
/// layout. Returns `None` when the table is absent or carries no
/// recognized keys.
pub(crate) fn legacy_documenter_values(config_path: &Path) -> Option<Value> {
    // A missing file or missing table both extract to the empty default.
    let legacy: LegacyTable = Figment::new()
        .merge(Toml::file(config_path))
        .extract_inner("autoheader")
        .unwrap_or_default();

    let mut documenter = Map::new();
    if let Some(username) = legacy.username {
        documenter.insert("username".to_string(), json!(username));
    }

    let toggles = [
        ("apex", legacy.enable_for_apex),
        ("visualforce", legacy.enable_for_visualforce),
        ("lightning_markup", legacy.enable_for_lightning_markup),
        ("lightning_javascript", legacy.enable_for_lightning_javascript),
        ("all_web_files", legacy.enable_for_all_web_files),
    ];
    let mut languages = Map::new();
    for (key, value) in toggles {
        if let Some(value) = value {
            languages.insert(key.to_string(), json!(value));
        }
    }
    if !languages.is_empty() {
        documenter.insert("languages".to_string(), Value::Object(languages));
    }

    if documenter.is_empty() {
        return None;
    }

    warn!(
        path = %config_path.display(),
        "Legacy [autoheader] settings detected, move them to [documenter]"
    );
    Some(Value::Object(documenter))
}
