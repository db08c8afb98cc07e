//! Documenter settings: identity, per-language toggles, and header schemas.

use serde::{Deserialize, Serialize};
use sfdoc_foundation::model::HeaderProperty;

/// Root settings for the header lifecycle engine.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DocumenterConfig {
    /// Name stamped into username-backed header fields.
    pub username: String,
    /// Date pattern built from `DD`, `MM`, and `YYYY` tokens.
    pub date_format: String,
    /// Per-language enablement for the save path.
    pub languages: LanguageToggles,
    /// File header schema.
    pub file_header: FileHeaderConfig,
    /// Method header schema.
    pub method_header: MethodHeaderConfig,
}

/// Which language kinds are stamped on save.
///
/// `html`, `xml`, and `javascript` documents additionally pass the
/// component-bundle heuristic unless `all_web_files` is set.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LanguageToggles {
    pub apex: bool,
    pub visualforce: bool,
    /// Component bundle markup (`html`/`xml` documents inside `aura`/`lwc`).
    pub lightning_markup: bool,
    /// Component bundle scripts (`javascript` documents inside `aura`/`lwc`).
    pub lightning_javascript: bool,
    /// Stamp every `html`/`xml`/`javascript` document regardless of bundle
    /// layout.
    pub all_web_files: bool,
}

/// File header schema.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FileHeaderConfig {
    /// Ordered properties rendered between the block delimiters.
    pub properties: Vec<HeaderProperty>,
    /// Append the modification log scaffold below the properties.
    pub modification_log: bool,
}

/// Method header schema.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MethodHeaderConfig {
    /// Ordered properties rendered above the `@param` lines.
    pub properties: Vec<HeaderProperty>,
    /// Render `@param` entries as `type name` rather than `name` alone.
    pub parameter_types: bool,
}

impl Default for DocumenterConfig {
    fn default() -> Self {
        Self {
            username: "phUser@phDomain.com".to_string(),
            date_format: "DD-MM-YYYY".to_string(),
            languages: LanguageToggles::default(),
            file_header: FileHeaderConfig::default(),
            method_header: MethodHeaderConfig::default(),
        }
    }
}

impl Default for LanguageToggles {
    fn default() -> Self {
        Self {
            apex: true,
            visualforce: true,
            lightning_markup: true,
            lightning_javascript: false,
            all_web_files: false,
        }
    }
}

impl Default for FileHeaderConfig {
    fn default() -> Self {
        Self {
            // The exact `$username`/`$date` values mark the last-modified
            // fields as the ones rewritten on save.
            properties: vec![
                HeaderProperty::new("File Name", "$filename"),
                HeaderProperty::new("Description", ""),
                HeaderProperty::new("Author", ""),
                HeaderProperty::new("Group", ""),
                HeaderProperty::new("Last Modified By", "$username"),
                HeaderProperty::new("Last Modified On", "$date"),
                HeaderProperty::new("Modification Log", ""),
            ],
            modification_log: true,
        }
    }
}

impl Default for MethodHeaderConfig {
    fn default() -> Self {
        Self {
            properties: vec![
                HeaderProperty::new("Description", ""),
                HeaderProperty::new("Author", "$username"),
            ],
            parameter_types: true,
        }
    }
}
