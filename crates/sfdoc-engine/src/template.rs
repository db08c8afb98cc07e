//! Header property template engine
//!
//! Renders file headers from the configured property schema. Rendering is
//! deterministic for a fixed username/date/filename, which keeps repeated
//! saves byte-stable.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use sfdoc_config::{DocumenterConfig, FileHeaderConfig};
use sfdoc_foundation::model::{CommentStyle, HeaderProperty};

/// Columns between the widest property name and the value separator.
const NAME_COLUMN_GUTTER: usize = 3;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\$(?:username|date|filename)").unwrap());

/// Resolved stamp values threaded through rendering and field updates.
#[derive(Debug, Clone)]
pub struct StampContext<'a> {
    pub username: &'a str,
    /// Date already formatted with the configured pattern.
    pub date: String,
    /// File name including its extension.
    pub file_name: &'a str,
}

impl<'a> StampContext<'a> {
    pub fn new(config: &'a DocumenterConfig, file_name: &'a str, today: NaiveDate) -> Self {
        Self {
            username: &config.username,
            date: format_date(&config.date_format, today),
            file_name,
        }
    }
}

/// Format a calendar date by substituting `DD`, `MM`, and `YYYY` tokens.
pub fn format_date(pattern: &str, date: NaiveDate) -> String {
    pattern
        .replace("YYYY", &format!("{:04}", date.year()))
        .replace("MM", &format!("{:02}", date.month()))
        .replace("DD", &format!("{:02}", date.day()))
}

/// Substitute `$username`, `$date`, and `$filename` tokens,
/// case-insensitively, anywhere in a property value.
pub fn resolve_placeholders(value: &str, ctx: &StampContext<'_>) -> String {
    PLACEHOLDER_RE
        .replace_all(value, |caps: &regex::Captures<'_>| {
            match caps[0].to_ascii_lowercase().as_str() {
                "$username" => ctx.username.to_string(),
                "$date" => ctx.date.clone(),
                _ => ctx.file_name.to_string(),
            }
        })
        .into_owned()
}

/// Render `@Name : value` lines with every name padded to one shared
/// column width (widest name plus the gutter).
pub(crate) fn render_property_lines(
    properties: &[HeaderProperty],
    line_start: &str,
    ctx: &StampContext<'_>,
) -> Vec<String> {
    let width = properties
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        + NAME_COLUMN_GUTTER;

    properties
        .iter()
        .map(|property| {
            let value = resolve_placeholders(&property.value, ctx);
            format!("{} @{:<width$}: {}", line_start, property.name, value)
        })
        .collect()
}

/// Render a complete file header block for one comment style.
///
/// The returned text ends with a newline, so inserting it at the document
/// start pushes the old first line down by exactly `lines().count()` lines.
pub fn render_file_header(
    config: &FileHeaderConfig,
    style: CommentStyle,
    ctx: &StampContext<'_>,
) -> String {
    let mut lines = Vec::with_capacity(config.properties.len() + 4);
    lines.push(style.block_start.to_string());
    lines.extend(render_property_lines(&config.properties, style.line_start, ctx));

    if config.modification_log {
        lines.push(format!(
            "{} Ver       Date            Author                Modification",
            style.line_start
        ));
        lines.push(format!(
            "{} 1.0    {}   {}     Initial Version",
            style.line_start, ctx.date, ctx.username
        ));
    }

    lines.push(style.block_end.to_string());

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}
