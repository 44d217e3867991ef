//! Unknown-parameter detection.
//!
//! Identifies placeholder references that do not correspond to any valid
//! name, for the editor's non-blocking warning list. This never gates
//! saving a skill.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scanner;

/// Bare control tokens that reference nothing.
static BARE_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(endfor|else|endif)$").unwrap());

/// `for <var> in <expr>`; references `<expr>`.
static FOR_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^for\s+\S+\s+in\s+(\S+)$").unwrap());

/// `if <expr>`; references `<expr>`.
static IF_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^if\s+(.+)$").unwrap());

/// Return every referenced expression whose base name matches neither a
/// valid parameter nor a loop-defined variable.
///
/// A match compares the text before the first `.` against the candidate
/// name exactly; sub-paths are never validated beyond the base name
/// (`successResult.foo.bar` is valid whenever `successResult` is). Output
/// preserves scan order and duplicates. Total over any input; never fails.
pub fn unknown_params_excluding<S: AsRef<str>>(text: &str, valid_params: &[S]) -> Vec<String> {
    let loop_vars = scanner::loop_variables(text);

    scanner::params_used(text)
        .into_iter()
        .filter_map(|token| referenced_expression(&token))
        .filter(|expr| {
            let base = base_name(expr);
            let valid = valid_params.iter().any(|v| v.as_ref() == base)
                || loop_vars.iter().any(|v| v == base);
            !valid
        })
        .collect()
}

/// The expression a placeholder token refers to, if any.
///
/// Loop and conditional openers reference the expression they test or
/// iterate over; bare keywords reference nothing; anything else references
/// itself.
fn referenced_expression(token: &str) -> Option<String> {
    if BARE_KEYWORD.is_match(token) {
        return None;
    }
    if let Some(cap) = FOR_TOKEN.captures(token) {
        return Some(cap[1].to_string());
    }
    if let Some(cap) = IF_TOKEN.captures(token) {
        return Some(cap[1].trim().to_string());
    }
    Some(token.to_string())
}

fn base_name(expr: &str) -> &str {
    expr.split_once('.').map_or(expr, |(base, _)| base)
}
