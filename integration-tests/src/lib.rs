//! Test support for cross-crate sfdoc flows
//!
//! The harness stands in for an editor host: documents are plain strings,
//! the editor surface records caret movements, and `run_save` plays the
//! will-save / apply / did-save sequence a host runs on every save.

pub mod harness;
