//! Method documentation headers, generated on request
//!
//! The caret marks the first line of a declaration. The generator scans
//! down to the end of the parameter list, parses the signature, and
//! returns an insertion edit for a documentation block above the
//! declaration (above its annotations, when present), indented like the
//! declaration itself.

mod signature;

pub use signature::{MethodParameter, ParsedMethod};

use lsp_types::{Position, Range, TextEdit};
use once_cell::sync::Lazy;
use regex::Regex;
use sfdoc_config::MethodHeaderConfig;
use sfdoc_foundation::Document;

use crate::error::CommandError;
use crate::template::{render_property_lines, StampContext};

/// Comment marker on the line directly above the insertion point.
static COMMENT_ABOVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"//|\*/").unwrap());
/// Line that ends a signature scan without a parameter list in sight.
static SCAN_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\*/|/\*|\bclass\b|\}").unwrap());
/// Annotation line above a declaration (`@IsTest`, `@AuraEnabled(...)`).
static ANNOTATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*@\D").unwrap());
/// Type declaration line, scanned upward to recognize constructors.
static TYPE_DECLARATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:class|interface|enum)\s+(\w+)").unwrap());

/// Generate a method header edit for the caret in `selection`.
pub fn insert_method_header(
    document: &dyn Document,
    selection: Range,
    config: &MethodHeaderConfig,
    ctx: &StampContext<'_>,
) -> Result<TextEdit, CommandError> {
    let caret_line = selection.start.line;
    let insert_line = annotation_block_start(document, caret_line);

    if insert_line > 0 {
        if let Some(above) = document.line_text(insert_line - 1) {
            if COMMENT_ABOVE_RE.is_match(above) {
                return Err(CommandError::MethodCommentPresent);
            }
        }
    }

    if selection.end.line != caret_line {
        return Err(CommandError::MultilineSelection);
    }

    let caret_text = document
        .line_text(caret_line)
        .ok_or(CommandError::EmptyLine)?;
    if caret_text.trim().is_empty() {
        return Err(CommandError::EmptyLine);
    }

    let declaration = scan_declaration(document, caret_line)?;
    let enclosing = enclosing_type_name(document, caret_line);
    let method = signature::analyze(&declaration, enclosing.as_deref())
        .ok_or(CommandError::SignatureNotRecognized)?;

    let indentation: String = caret_text.chars().take_while(|c| c.is_whitespace()).collect();

    Ok(TextEdit {
        range: Range {
            start: Position::new(insert_line, 0),
            end: Position::new(insert_line, 0),
        },
        new_text: render_method_header(&method, config, ctx, &indentation),
    })
}

/// Accumulate declaration text from the caret line until a line contains
/// the parameter list's closing parenthesis.
fn scan_declaration(document: &dyn Document, start_line: u32) -> Result<String, CommandError> {
    let mut text = document
        .line_text(start_line)
        .ok_or(CommandError::SignatureNotRecognized)?
        .to_string();

    let mut line = start_line + 1;
    while !text.contains(')') {
        let Some(current) = document.line_text(line) else {
            return Err(CommandError::SignatureNotRecognized);
        };
        if SCAN_BOUNDARY_RE.is_match(current) {
            return Err(CommandError::SignatureNotRecognized);
        }
        text.push_str(current);
        line += 1;
    }
    Ok(text)
}

/// Walk upward past annotation lines to the first line of the declaration
/// block, where the header belongs.
fn annotation_block_start(document: &dyn Document, caret_line: u32) -> u32 {
    let mut line = caret_line;
    while line > 0 {
        match document.line_text(line - 1) {
            Some(text) if ANNOTATION_RE.is_match(text) => line -= 1,
            _ => break,
        }
    }
    line
}

/// Name of the nearest type declared above the caret.
fn enclosing_type_name(document: &dyn Document, caret_line: u32) -> Option<String> {
    (0..caret_line).rev().find_map(|line| {
        document.line_text(line).and_then(|text| {
            TYPE_DECLARATION_RE
                .captures(text)
                .map(|caps| caps[1].to_string())
        })
    })
}

fn render_method_header(
    method: &ParsedMethod,
    config: &MethodHeaderConfig,
    ctx: &StampContext<'_>,
    indentation: &str,
) -> String {
    let mut lines = Vec::with_capacity(config.properties.len() + method.parameters.len() + 3);
    lines.push("/**".to_string());
    lines.extend(render_property_lines(&config.properties, " *", ctx));

    for parameter in &method.parameters {
        lines.push(format!(" * @param {}", parameter.describe(config.parameter_types)));
    }
    if !method.return_type.eq_ignore_ascii_case("void") {
        lines.push(format!(" * @return {}", method.return_type));
    }
    lines.push(" */".to_string());

    let mut rendered = String::new();
    for line in lines {
        rendered.push_str(indentation);
        rendered.push_str(&line);
        rendered.push('\n');
    }
    rendered
}
