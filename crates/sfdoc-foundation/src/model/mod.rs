//! Shared model types for header rendering and maintenance

mod header;
mod language;

pub use header::{HeaderProperty, DATE_TOKEN, FILENAME_TOKEN, USERNAME_TOKEN};
pub use language::{CommentStyle, LanguageKind};
