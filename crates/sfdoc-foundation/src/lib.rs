//! Foundation Layer - Core types, host protocol traits, and text utilities
//!
//! This crate provides the foundational building blocks for sfdoc:
//! - Header model types (language kinds, comment styles, header properties)
//! - Host protocol traits (`Document`, `EditorSurface`) implemented by
//!   editor adapters and the CLI host
//! - Text edit utilities shared by hosts and tests

pub mod error;
pub mod model;
pub mod protocol;
pub mod text;

// Re-export commonly used types for convenience
pub use error::{DocumenterError, DocumenterResult};
pub use model::*;
pub use protocol::{Document, EditorSurface};
