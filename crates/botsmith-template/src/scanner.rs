//! Regex token scanning over raw template text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any `{...}` placeholder, non-greedy so adjacent placeholders split.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{.+?\}").unwrap());

/// `{for <var> in <expr>}` loop opener.
static FOR_OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\s*for\s+(\S+)\s+in\s+\S+\s*\}").unwrap());

/// Control-keyword forms a placeholder token can take.
static KEYWORDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^for\s+\S+\s+in\s+\S+$",
        r"^endfor$",
        r"^if\s+.+$",
        r"^else$",
        r"^endif$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Extract every placeholder token from `text`, in order of appearance.
///
/// Outer braces are stripped and the inner text trimmed. Duplicates are
/// kept; callers that want a set de-duplicate downstream.
pub fn params_used(text: &str) -> Vec<String> {
    PLACEHOLDER
        .find_iter(text)
        .map(|m| {
            let raw = m.as_str();
            raw[1..raw.len() - 1].trim().to_string()
        })
        .collect()
}

/// Extract the loop-variable name of every `{for <var> in <expr>}`.
///
/// No lexical scoping: a variable defined by any loop opener counts as
/// defined everywhere in the template.
pub fn loop_variables(text: &str) -> Vec<String> {
    FOR_OPENER
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Whether `token` (a stripped placeholder) is a control keyword.
pub fn is_control_keyword(token: &str) -> bool {
    KEYWORDS.iter().any(|p| p.is_match(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_used_in_order_with_duplicates() {
        let params = params_used("Hi {x}, your {y} and {x} are ready");
        assert_eq!(params, vec!["x", "y", "x"]);
    }

    #[test]
    fn test_params_used_trims_whitespace() {
        let params = params_used("{ name } and {other}");
        assert_eq!(params, vec!["name", "other"]);
    }

    #[test]
    fn test_params_used_empty_for_plain_text() {
        assert!(params_used("no placeholders here").is_empty());
    }

    #[test]
    fn test_params_used_does_not_span_lines() {
        // Non-greedy single-line matching: an unclosed brace never pairs
        // with a brace on a later line.
        let params = params_used("broken {open\nother {ok}");
        assert_eq!(params, vec!["ok"]);
    }

    #[test]
    fn test_loop_variables() {
        let vars = loop_variables("{for item in successResult.items}{item}{endfor}");
        assert_eq!(vars, vec!["item"]);
    }

    #[test]
    fn test_loop_variables_multiple_loops() {
        let text = "{for a in xs}{endfor}{for b in ys}{endfor}";
        assert_eq!(loop_variables(text), vec!["a", "b"]);
    }

    #[test]
    fn test_is_control_keyword() {
        assert!(is_control_keyword("for item in list"));
        assert!(is_control_keyword("endfor"));
        assert!(is_control_keyword("if successResult.ok"));
        assert!(is_control_keyword("else"));
        assert!(is_control_keyword("endif"));
        assert!(!is_control_keyword("name"));
        assert!(!is_control_keyword("successResult"));
    }
}
