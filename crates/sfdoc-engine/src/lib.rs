//! Header lifecycle engine
//!
//! Keeps structured comment headers at the top of supported Salesforce
//! sources: inserts one on a file's first save, rewrites the last-modified
//! fields on every save after that, restores the caret the insertion
//! displaced, and generates method documentation blocks on request.
//!
//! The engine is host-agnostic. It consumes [`sfdoc_foundation::Document`]
//! and [`sfdoc_foundation::EditorSurface`] trait objects and produces
//! [`lsp_types::TextEdit`]s; applying them is the host's job.

pub mod cursor;
pub mod detect;
pub mod eligibility;
pub mod error;
pub mod method;
pub mod pipeline;
pub mod template;
pub mod update;

pub use error::CommandError;
pub use pipeline::HeaderPipeline;
