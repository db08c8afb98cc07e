//! Save-path eligibility
//!
//! Apex and Visualforce are gated by their toggles alone. Web documents
//! (`html`, `xml`, `javascript`) are stamped when `all_web_files` is set,
//! or when their per-kind toggle is set and the file sits in a component
//! bundle (`.../aura/<name>/<name>.<ext>` or `.../lwc/<name>/<name>.<ext>`).

use once_cell::sync::Lazy;
use regex::Regex;
use sfdoc_config::LanguageToggles;
use sfdoc_foundation::{Document, LanguageKind};
use tracing::debug;

const MARKUP_BUNDLE_EXTENSIONS: [&str; 3] = ["htm", "html", "cmp"];
const SCRIPT_BUNDLE_EXTENSIONS: [&str; 1] = ["js"];
const BUNDLE_CONTAINER_FOLDERS: [&str; 2] = ["aura", "lwc"];

/// Script bundles name their files `<component>Controller.js` and
/// `<component>Helper.js`; the suffixes drop out before folder matching.
static SCRIPT_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Controller|Helper").unwrap());

/// Decide whether a document of a recognized kind is stamped on save.
pub fn is_eligible(kind: LanguageKind, document: &dyn Document, toggles: &LanguageToggles) -> bool {
    let eligible = match kind {
        LanguageKind::Apex => toggles.apex,
        LanguageKind::Visualforce => toggles.visualforce,
        LanguageKind::Html | LanguageKind::Xml => {
            toggles.all_web_files
                || (toggles.lightning_markup && in_component_bundle(document.path(), kind))
        }
        LanguageKind::Javascript => {
            toggles.all_web_files
                || (toggles.lightning_javascript && in_component_bundle(document.path(), kind))
        }
    };

    debug!(
        language = %document.language_id(),
        path = %document.path(),
        eligible,
        "Save eligibility"
    );
    eligible
}

/// Component bundle heuristic over a slash-separated path.
///
/// The file's name (split from its extension at the final dot) must match
/// its containing folder exactly, the extension must belong to the kind,
/// and the folder's parent must be `aura` or `lwc`.
pub fn in_component_bundle(path: &str, kind: LanguageKind) -> bool {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 3 {
        return false;
    }

    let file = segments[segments.len() - 1];
    let folder = segments[segments.len() - 2];
    let parent = segments[segments.len() - 3];

    let (name, extension) = match file.rsplit_once('.') {
        Some((name, extension)) => (name, extension),
        None => (file, ""),
    };

    let valid_extensions: &[&str] = match kind {
        LanguageKind::Javascript => &SCRIPT_BUNDLE_EXTENSIONS,
        _ => &MARKUP_BUNDLE_EXTENSIONS,
    };

    let name = if kind == LanguageKind::Javascript {
        SCRIPT_SUFFIX_RE.replace_all(name, "").into_owned()
    } else {
        name.to_string()
    };

    name == folder
        && valid_extensions.contains(&extension)
        && BUNDLE_CONTAINER_FOLDERS.contains(&parent)
}
