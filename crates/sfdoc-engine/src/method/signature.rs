//! Apex signature tokenization and analysis
//!
//! A scanned declaration splits at the first `(` into a signature half and
//! a parameter half. Both halves tokenize on the same delimiter set, which
//! discards angle brackets; generic collection types are reassembled by a
//! recursive-descent pass over the flat token stream (`Map` consumes two
//! sub-terms, `List` and `Set` one).

use once_cell::sync::Lazy;
use regex::Regex;

/// Modifier keywords never mistaken for a return type.
const RESERVED_TERMS: [&str; 6] = [
    "public",
    "private",
    "protected",
    "global",
    "override",
    "static",
];

/// Visibility keywords recognized as a scope.
const SCOPE_TERMS: [&str; 4] = ["public", "private", "protected", "global"];

static DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(),<>{}\s]+").unwrap());

/// One parsed parameter: a reassembled type term plus the declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParameter {
    pub type_term: String,
    pub name: Option<String>,
}

impl MethodParameter {
    /// `type name` when `with_type` is set, the bare name otherwise. Falls
    /// back to the type when no name survived tokenization.
    pub fn describe(&self, with_type: bool) -> String {
        match (&self.name, with_type) {
            (Some(name), true) => format!("{} {}", self.type_term, name),
            (Some(name), false) => name.clone(),
            (None, _) => self.type_term.clone(),
        }
    }
}

/// A recognized Apex method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMethod {
    pub name: String,
    pub return_type: String,
    pub scope: Option<String>,
    pub is_static: bool,
    pub is_override: bool,
    pub parameters: Vec<MethodParameter>,
}

fn tokenize(text: &str) -> Vec<&str> {
    DELIMITERS.split(text).filter(|t| !t.is_empty()).collect()
}

/// Reassemble one type term starting at `*index`.
///
/// Consumes generic sub-terms for collections; a truncated stream fills
/// the missing slots with empty strings rather than failing.
fn parse_type_term(tokens: &[&str], index: &mut usize) -> Option<String> {
    let token = *tokens.get(*index)?;
    *index += 1;

    match token.to_ascii_lowercase().as_str() {
        "map" => {
            let key = parse_type_term(tokens, index).unwrap_or_default();
            let value = parse_type_term(tokens, index).unwrap_or_default();
            Some(format!("{}<{}, {}>", token, key, value))
        }
        "list" | "set" => {
            let element = parse_type_term(tokens, index).unwrap_or_default();
            Some(format!("{}<{}>", token, element))
        }
        _ => Some(token.to_string()),
    }
}

/// Parse the signature half into standalone terms (modifiers, the return
/// type, the declared name).
fn parse_signature_terms(signature: &str) -> Vec<String> {
    let tokens = tokenize(signature);
    let mut terms = Vec::new();
    let mut index = 0;
    while let Some(term) = parse_type_term(&tokens, &mut index) {
        terms.push(term);
    }
    terms
}

/// Parse the parameter half into `(type, name)` pairs.
fn parse_parameters(parameters: &str) -> Vec<MethodParameter> {
    let tokens = tokenize(parameters);
    let mut parsed = Vec::new();
    let mut index = 0;
    while let Some(type_term) = parse_type_term(&tokens, &mut index) {
        let name = tokens.get(index).map(|t| t.to_string());
        if name.is_some() {
            index += 1;
        }
        parsed.push(MethodParameter { type_term, name });
    }
    parsed
}

/// Analyze a scanned declaration.
///
/// Returns `None` when no method shape is recognizable: no parameter list,
/// no declared name, or no return type on something that is not a
/// constructor of `enclosing_type`.
pub(crate) fn analyze(method_text: &str, enclosing_type: Option<&str>) -> Option<ParsedMethod> {
    let (signature, parameters) = method_text.split_once('(')?;

    let mut terms = parse_signature_terms(signature);
    let name = terms.pop()?;

    let scope = terms
        .iter()
        .find(|t| SCOPE_TERMS.contains(&t.to_ascii_lowercase().as_str()))
        .cloned();
    let is_static = terms.iter().any(|t| t.eq_ignore_ascii_case("static"));
    let is_override = terms.iter().any(|t| t.eq_ignore_ascii_case("override"));

    let return_type = terms
        .iter()
        .find(|t| {
            !RESERVED_TERMS.contains(&t.to_ascii_lowercase().as_str()) && !t.starts_with('@')
        })
        .cloned();

    // Apex constructors have no return type; compare names the way the
    // language does, case-insensitively.
    let return_type = match return_type {
        Some(return_type) => return_type,
        None if enclosing_type.is_some_and(|t| t.eq_ignore_ascii_case(&name)) => {
            "void".to_string()
        }
        None => return None,
    };

    Some(ParsedMethod {
        name,
        return_type,
        scope,
        is_static,
        is_override,
        parameters: parse_parameters(parameters),
    })
}
