//! CLI command handling for the sfdoc binary
//!
//! Each subcommand drives the engine the same way an editor host would:
//! `stamp` plays the save pipeline, `insert-header` and `method-header`
//! are the explicit commands, and edits are applied to the file in place.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lsp_types::{Position, Range};
use sfdoc_config::AppConfig;
use sfdoc_engine::{CommandError, HeaderPipeline};
use sfdoc_foundation::text::apply_text_edits;
use sfdoc_foundation::{Document, DocumenterError, DocumenterResult};
use tracing::debug;

use crate::document::FileDocument;
use crate::editor::ScriptedEditor;

/// Parse a 1-based `LINE:COL` pair into a zero-based position.
fn parse_caret(value: &str) -> DocumenterResult<Position> {
    let (line, column) = value
        .split_once(':')
        .ok_or_else(|| DocumenterError::invalid_input(format!("expected LINE:COL, got `{value}`")))?;
    let line: u32 = line
        .trim()
        .parse()
        .map_err(|_| DocumenterError::invalid_input(format!("invalid line `{line}`")))?;
    let column: u32 = column
        .trim()
        .parse()
        .map_err(|_| DocumenterError::invalid_input(format!("invalid column `{column}`")))?;
    if line == 0 || column == 0 {
        return Err(DocumenterError::invalid_input("line and column are 1-based"));
    }
    Ok(Position::new(line - 1, column - 1))
}

#[derive(Parser)]
#[command(name = "sfdoc")]
#[command(about = "Inserts and maintains file and method headers in Salesforce sources")]
#[command(version)]
pub struct Cli {
    /// Configuration file to read (TOML)
    #[arg(long, global = true, default_value = AppConfig::FILE_NAME)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stamp files the way an editor save would: insert a header on the
    /// first save, refresh the last-modified fields afterwards
    Stamp {
        /// Files to stamp
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Caret position before the save, as 1-based LINE:COL
        #[arg(long, value_parser = parse_caret)]
        caret: Option<Position>,
        /// Override the language inferred from the file extension
        #[arg(long)]
        language: Option<String>,
    },
    /// Insert a file header even when saves would not stamp the file
    InsertHeader {
        /// File to document
        file: PathBuf,
        /// Override the language inferred from the file extension
        #[arg(long)]
        language: Option<String>,
    },
    /// Insert a method documentation header above a declaration
    MethodHeader {
        /// File containing the method
        file: PathBuf,
        /// 1-based line of the method declaration
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        line: u32,
        /// Override the language inferred from the file extension
        #[arg(long)]
        language: Option<String>,
    },
    /// Print the effective configuration
    ShowConfig,
}

/// Main CLI entry point
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)?;
    sfdoc_config::logging::initialize(&config.logging);
    debug!(path = %cli.config.display(), "Configuration loaded");

    match cli.command {
        Commands::Stamp {
            files,
            caret,
            language,
        } => stamp(config, &files, caret, language.as_deref()).await,
        Commands::InsertHeader { file, language } => {
            insert_header(config, &file, language.as_deref()).await
        }
        Commands::MethodHeader {
            file,
            line,
            language,
        } => method_header(config, &file, line, language.as_deref()).await,
        Commands::ShowConfig => show_config(&config),
    }
}

/// Report a rejected command the way an editor notification would, then exit.
fn command_failure(error: CommandError) -> ! {
    eprintln!("sfdoc: {error}");
    process::exit(1);
}

async fn stamp(
    config: AppConfig,
    files: &[PathBuf],
    caret: Option<Position>,
    language: Option<&str>,
) -> Result<()> {
    let editor = Arc::new(ScriptedEditor::new(caret));
    let pipeline = HeaderPipeline::new(config.documenter, editor.clone());

    for path in files {
        let document = FileDocument::load(path, language).await?;
        let edits = pipeline.will_save(&document);

        if edits.is_empty() {
            println!("{}: skipped", path.display());
            continue;
        }

        // A zero-width range at the top means a fresh header went in;
        // anything else is the whole-document refresh.
        let inserted = edits.iter().any(|edit| edit.range.start == edit.range.end);

        let stamped = apply_text_edits(document.text(), &edits);
        if let Err(error) = tokio::fs::write(path, &stamped).await {
            pipeline.cancel_save(document.uri());
            return Err(error).with_context(|| format!("Failed to write {}", path.display()));
        }
        pipeline.did_save(document.uri());

        let action = if inserted {
            "header inserted"
        } else {
            "header refreshed"
        };
        match editor.restored(document.uri()) {
            Some(position) => println!(
                "{}: {action}, caret restored to {}:{}",
                path.display(),
                position.line + 1,
                position.character + 1
            ),
            None => println!("{}: {action}", path.display()),
        }
    }

    Ok(())
}

async fn insert_header(config: AppConfig, path: &Path, language: Option<&str>) -> Result<()> {
    let editor = Arc::new(ScriptedEditor::new(None));
    let pipeline = HeaderPipeline::new(config.documenter, editor);
    let document = FileDocument::load(path, language).await?;

    let edit = match pipeline.insert_file_header(&document) {
        Ok(edit) => edit,
        Err(error) => command_failure(error),
    };

    let documented = apply_text_edits(document.text(), &[edit]);
    tokio::fs::write(path, &documented)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{}: header inserted", path.display());
    Ok(())
}

async fn method_header(
    config: AppConfig,
    path: &Path,
    line: u32,
    language: Option<&str>,
) -> Result<()> {
    let editor = Arc::new(ScriptedEditor::new(None));
    let pipeline = HeaderPipeline::new(config.documenter, editor);
    let document = FileDocument::load(path, language).await?;

    let caret = Position::new(line - 1, 0);
    let edit = match pipeline.insert_method_header(&document, Range::new(caret, caret)) {
        Ok(edit) => edit,
        Err(error) => command_failure(error),
    };

    let documented = apply_text_edits(document.text(), &[edit]);
    tokio::fs::write(path, &documented)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{}: method header inserted", path.display());
    Ok(())
}

fn show_config(config: &AppConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;
    print!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_parsing_converts_to_zero_based() {
        assert_eq!(parse_caret("15:4").unwrap(), Position::new(14, 3));
        assert_eq!(parse_caret("1:1").unwrap(), Position::new(0, 0));
    }

    #[test]
    fn test_caret_parsing_rejects_malformed_input() {
        assert!(parse_caret("15").is_err());
        assert!(parse_caret("a:b").is_err());
        assert!(parse_caret("0:4").is_err());
        assert!(parse_caret("4:0").is_err());
    }

    #[test]
    fn test_cli_parses_stamp_arguments() {
        let cli = Cli::try_parse_from([
            "sfdoc",
            "stamp",
            "Example.cls",
            "--caret",
            "15:4",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        match cli.command {
            Commands::Stamp { files, caret, .. } => {
                assert_eq!(files, vec![PathBuf::from("Example.cls")]);
                assert_eq!(caret, Some(Position::new(14, 3)));
            }
            _ => panic!("expected stamp command"),
        }
    }

    #[test]
    fn test_cli_rejects_zero_method_line() {
        let result = Cli::try_parse_from(["sfdoc", "method-header", "A.cls", "--line", "0"]);
        assert!(result.is_err());
    }
}
