//! Language classification for the supported source kinds

use serde::{Deserialize, Serialize};

/// The file kinds the documenter knows how to stamp.
///
/// Classification is driven by the editor's language identifier, not the
/// file extension; hosts that have no language table can derive an
/// identifier from the extension before calling in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageKind {
    Apex,
    Visualforce,
    Html,
    Javascript,
    Xml,
}

impl LanguageKind {
    /// Classify an editor language identifier.
    ///
    /// Unknown identifiers return `None` and are never stamped.
    pub fn from_language_id(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "apex" => Some(Self::Apex),
            "visualforce" => Some(Self::Visualforce),
            "html" => Some(Self::Html),
            "javascript" => Some(Self::Javascript),
            "xml" => Some(Self::Xml),
            _ => None,
        }
    }

    /// The comment delimiters used by file headers for this kind.
    pub fn comment_style(self) -> CommentStyle {
        match self {
            Self::Apex | Self::Javascript => CommentStyle::BLOCK,
            Self::Visualforce | Self::Html | Self::Xml => CommentStyle::MARKUP,
        }
    }
}

/// Comment delimiters for a rendered header block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    pub block_start: &'static str,
    pub line_start: &'static str,
    pub block_end: &'static str,
}

impl CommentStyle {
    /// Block comment style used by Apex and JavaScript sources.
    pub const BLOCK: CommentStyle = CommentStyle {
        block_start: "/**",
        line_start: " *",
        block_end: "**/",
    };

    /// Markup comment style used by Visualforce, HTML, and XML sources.
    pub const MARKUP: CommentStyle = CommentStyle {
        block_start: "<!--",
        line_start: " ",
        block_end: "-->",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_known_language_ids() {
        assert_eq!(LanguageKind::from_language_id("apex"), Some(LanguageKind::Apex));
        assert_eq!(
            LanguageKind::from_language_id("visualforce"),
            Some(LanguageKind::Visualforce)
        );
        assert_eq!(LanguageKind::from_language_id("html"), Some(LanguageKind::Html));
        assert_eq!(
            LanguageKind::from_language_id("javascript"),
            Some(LanguageKind::Javascript)
        );
        assert_eq!(LanguageKind::from_language_id("xml"), Some(LanguageKind::Xml));
    }

    #[test]
    fn test_unknown_language_ids_are_not_classified() {
        assert_eq!(LanguageKind::from_language_id("rust"), None);
        assert_eq!(LanguageKind::from_language_id(""), None);
        assert_eq!(LanguageKind::from_language_id("plaintext"), None);
    }

    #[test]
    fn test_comment_styles_by_kind() {
        assert_eq!(LanguageKind::Apex.comment_style().block_start, "/**");
        assert_eq!(LanguageKind::Javascript.comment_style().block_end, "**/");
        assert_eq!(LanguageKind::Visualforce.comment_style().block_start, "<!--");
        assert_eq!(LanguageKind::Html.comment_style().block_end, "-->");
        assert_eq!(LanguageKind::Xml.comment_style().line_start, " ");
    }
}
