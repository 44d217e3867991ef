//! The `ResponseTemplate` value type.

use std::fmt;
use std::sync::Arc;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::{classify, scanner, validate};

/// The response text a skill sends to chat upon completion.
///
/// Immutable value type: every edit produces a new instance via
/// [`with_text`](Self::with_text). Owned by exactly one skill version at a
/// time and compared by value when deciding whether a version is modified.
///
/// Serializes to a plain JSON string (the form embedded in save payloads),
/// not an object. Deserializing `null` yields the empty template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTemplate {
    text: Arc<str>,
}

impl ResponseTemplate {
    /// Create a template over the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self { text: text.into() }
    }

    /// Create a template, normalizing an absent text to the empty string.
    pub fn from_optional(text: Option<String>) -> Self {
        Self::new(text.unwrap_or_default())
    }

    /// The raw template text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// A new instance with the given text; nothing else carries over.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(text)
    }

    /// Whether `self` and `other` share the same underlying text storage.
    ///
    /// [`replace_param_name`](Self::replace_param_name) keeps the storage
    /// of the original instance when the rename had no effect, so this is
    /// the change signal callers use to decide whether anything happened.
    pub fn shares_text_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.text, &other.text)
    }

    /// Replace every exact `{old_name}` placeholder with `{new_name}`.
    ///
    /// The match is literal and brace-delimited only: `{old_name.field}` is
    /// left untouched. Returns a new instance iff the text actually
    /// changed; otherwise the result shares storage with `self`.
    pub fn replace_param_name(&self, old_name: &str, new_name: &str) -> Self {
        let needle = format!("{{{old_name}}}");
        let replacement = format!("{{{new_name}}}");
        let replaced = self.text.replace(&needle, &replacement);
        if replaced == *self.text {
            self.clone()
        } else {
            Self::new(replaced)
        }
    }

    /// Every `{...}` token, in order, duplicates included.
    pub fn params_used(&self) -> Vec<String> {
        scanner::params_used(&self.text)
    }

    /// Loop-variable names defined by `{for <var> in <expr>}` openers.
    pub fn loop_variables(&self) -> Vec<String> {
        scanner::loop_variables(&self.text)
    }

    /// Whether any user-defined parameter is referenced.
    pub fn uses_any_param(&self) -> bool {
        classify::uses_any_param(&self.text)
    }

    /// Whether the built-in `successResult` variable is referenced.
    pub fn uses_success_result(&self) -> bool {
        classify::uses_success_result(&self.text)
    }

    /// Whether any placeholder uses dotted-path access.
    pub fn uses_path(&self) -> bool {
        classify::uses_path(&self.text)
    }

    /// Whether the template uses loop syntax.
    pub fn uses_iteration(&self) -> bool {
        classify::uses_iteration(&self.text)
    }

    /// Whether the template uses complete if/endif syntax.
    pub fn uses_if_logic(&self) -> bool {
        classify::uses_if_logic(&self.text)
    }

    /// Whether the text looks like Markdown.
    pub fn uses_markdown(&self) -> bool {
        classify::uses_markdown(&self.text)
    }

    /// Whether the template interpolates any data at all.
    pub fn uses_data(&self) -> bool {
        classify::uses_data(&self.text)
    }

    /// Referenced expressions whose base name is neither a valid parameter
    /// nor a loop variable. See [`validate::unknown_params_excluding`].
    pub fn unknown_params_excluding<S: AsRef<str>>(&self, valid_params: &[S]) -> Vec<String> {
        validate::unknown_params_excluding(&self.text, valid_params)
    }
}

impl Default for ResponseTemplate {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for ResponseTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for ResponseTemplate {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ResponseTemplate {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl Serialize for ResponseTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for ResponseTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_optional(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_construction() {
        assert_eq!(ResponseTemplate::new("hello {x}").as_str(), "hello {x}");
        assert_eq!(
            ResponseTemplate::from_optional(Some("abc".into())).as_str(),
            "abc"
        );
        assert_eq!(ResponseTemplate::from_optional(None).as_str(), "");
    }

    #[test]
    fn test_with_text_isolates() {
        let t = ResponseTemplate::new("one");
        let t2 = t.with_text("two");
        assert_eq!(t2.as_str(), "two");
        assert_eq!(t.as_str(), "one");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(ResponseTemplate::new("same"), ResponseTemplate::new("same"));
        assert_ne!(ResponseTemplate::new("a"), ResponseTemplate::new("b"));
    }

    #[test]
    fn test_rename_noop_keeps_identity() {
        let t = ResponseTemplate::new("no placeholder named that");
        let renamed = t.replace_param_name("x", "y");
        assert!(renamed.shares_text_with(&t));
        assert_eq!(renamed, t);
    }

    #[test]
    fn test_rename_to_same_name_keeps_identity() {
        let t = ResponseTemplate::new("Hi {x}");
        let renamed = t.replace_param_name("x", "x");
        assert!(renamed.shares_text_with(&t));
    }

    #[test]
    fn test_rename_replaces_every_occurrence() {
        let t = ResponseTemplate::new("Hi {x}, your {x} is ready");
        let renamed = t.replace_param_name("x", "y");
        assert_eq!(renamed.as_str(), "Hi {y}, your {y} is ready");
        assert!(!renamed.shares_text_with(&t));
        // Original untouched.
        assert_eq!(t.as_str(), "Hi {x}, your {x} is ready");
    }

    #[test]
    fn test_rename_is_not_path_aware() {
        let t = ResponseTemplate::new("{x} and {x.field}");
        let renamed = t.replace_param_name("x", "y");
        assert_eq!(renamed.as_str(), "{y} and {x.field}");
    }

    #[test]
    fn test_serializes_to_plain_string() {
        let t = ResponseTemplate::new("Hello {name}");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"Hello {name}\"");
    }

    #[test]
    fn test_deserializes_from_string_or_null() {
        let t: ResponseTemplate = serde_json::from_str("\"Hi {x}\"").unwrap();
        assert_eq!(t.as_str(), "Hi {x}");
        let t: ResponseTemplate = serde_json::from_str("null").unwrap();
        assert_eq!(t.as_str(), "");
    }

    #[test]
    fn test_markdown_heuristic_sanity() {
        assert!(ResponseTemplate::new("**bold**").uses_markdown());
        assert!(!ResponseTemplate::new("plain text").uses_markdown());
    }

    #[test]
    fn test_success_result_detection() {
        assert!(ResponseTemplate::new("The answer is {successResult}").uses_success_result());
        assert!(!ResponseTemplate::new("no result here").uses_success_result());
    }

    #[test]
    fn test_if_logic_completeness() {
        assert!(ResponseTemplate::new("{if x}{endif}").uses_if_logic());
        assert!(!ResponseTemplate::new("{if x}").uses_if_logic());
    }

    #[test]
    fn test_unknown_param_detection() {
        let t = ResponseTemplate::new("{a} and {b}");
        assert_eq!(t.unknown_params_excluding(&["a"]), vec!["b"]);
    }

    #[test]
    fn test_loop_variable_exemption() {
        let t = ResponseTemplate::new("{for item in successResult.items}{item}{endfor}");
        assert!(t.unknown_params_excluding(&["successResult"]).is_empty());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let t = ResponseTemplate::new("Hello {name}! {if successResult.ok}Done{else}Failed{endif}");
        assert_eq!(
            t.unknown_params_excluding(&["name"]),
            vec!["successResult.ok"]
        );
    }
}
