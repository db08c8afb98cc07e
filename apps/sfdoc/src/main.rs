//! sfdoc - header maintenance for Salesforce sources
//!
//! Thin binary entry point. All command handling lives in the `cli` module.

mod cli;
mod document;
mod editor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}
