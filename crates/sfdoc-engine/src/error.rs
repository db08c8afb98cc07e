//! User-facing command errors

use thiserror::Error;

/// Recoverable failures of the explicit insert commands.
///
/// Hosts surface these as notifications (prefixed with the product name);
/// they never abort a save and never become edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unsupported file type and/or language")]
    UnsupportedLanguage,

    #[error("Header already present on file's first line")]
    HeaderAlreadyPresent,

    #[error("Method comment already present.")]
    MethodCommentPresent,

    #[error("Multiline selection is not supported. Set the cursor's position on the first line of the method's declaration.")]
    MultilineSelection,

    #[error("Cannot insert method header on empty line.")]
    EmptyLine,

    #[error("Apex method's signature not recognized on selected line.")]
    SignatureNotRecognized,
}
