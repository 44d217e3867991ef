//! Presence-based feature checks over template text.
//!
//! These drive the editor's checklist-style help UI. All checks are loose
//! by contract: `{endfor}` counts as iteration without a matching `{for}`,
//! and `{if ...}`/`{endif}` are checked for presence, not pairing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::markdown;
use crate::scanner;

static SUCCESS_RESULT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{successResult.*?\}").unwrap());

static DOTTED_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\S+\.\S+)+?\}").unwrap());

static IF_OPENER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s*if\s+.+?\}").unwrap());

/// Token form of the built-in result variable: `successResult` or
/// `successResult.<path>`.
static SUCCESS_RESULT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^successResult(\.\S+)?$").unwrap());

/// True when some placeholder is a user-defined parameter reference, i.e.
/// neither a control keyword nor the built-in `successResult` variable.
pub fn uses_any_param(text: &str) -> bool {
    scanner::params_used(text)
        .iter()
        .any(|token| !scanner::is_control_keyword(token) && !SUCCESS_RESULT_TOKEN.is_match(token))
}

/// True when the text references `{successResult}` or `{successResult.<path>}`.
pub fn uses_success_result(text: &str) -> bool {
    SUCCESS_RESULT.is_match(text)
}

/// True when some placeholder uses dotted-path access into an object.
pub fn uses_path(text: &str) -> bool {
    DOTTED_PATH.is_match(text)
}

/// True when the literal `{endfor}` token appears anywhere.
pub fn uses_iteration(text: &str) -> bool {
    text.contains("{endfor}")
}

/// True when both an `{if ...}` token and an `{endif}` token appear.
pub fn uses_if_logic(text: &str) -> bool {
    IF_OPENER.is_match(text) && text.contains("{endif}")
}

/// True when the text looks like it uses Markdown formatting.
pub fn uses_markdown(text: &str) -> bool {
    markdown::looks_like_markdown(text)
}

/// True when the template interpolates any data at all.
pub fn uses_data(text: &str) -> bool {
    uses_any_param(text) || uses_success_result(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_any_param() {
        assert!(uses_any_param("Hello {name}!"));
        assert!(!uses_any_param("Hello world"));
        assert!(!uses_any_param("{successResult}"));
        assert!(!uses_any_param("{successResult.items}"));
        assert!(!uses_any_param("{for x in list}{endfor}"));
        assert!(!uses_any_param("{if done}{else}{endif}"));
    }

    #[test]
    fn test_uses_success_result() {
        assert!(uses_success_result("The answer is {successResult}"));
        assert!(uses_success_result("Count: {successResult.items.length}"));
        assert!(!uses_success_result("no result here"));
    }

    #[test]
    fn test_uses_path() {
        assert!(uses_path("{user.name}"));
        assert!(!uses_path("{user}"));
        assert!(!uses_path("plain text with a . dot"));
    }

    #[test]
    fn test_uses_iteration_is_presence_based() {
        assert!(uses_iteration("{endfor}"));
        assert!(uses_iteration("{for x in xs}...{endfor}"));
        // An opener alone does not count; only the literal closer does.
        assert!(!uses_iteration("{for x in xs}"));
    }

    #[test]
    fn test_uses_if_logic_needs_both_tokens() {
        assert!(uses_if_logic("{if x}{endif}"));
        assert!(uses_if_logic("{if x}yes{else}no{endif}"));
        assert!(!uses_if_logic("{if x}"));
        assert!(!uses_if_logic("{endif}"));
    }

    #[test]
    fn test_uses_data() {
        assert!(uses_data("{name}"));
        assert!(uses_data("{successResult}"));
        assert!(!uses_data("{endfor}"));
        assert!(!uses_data("static reply"));
    }
}
