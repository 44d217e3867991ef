//! YAML-style frontmatter parser for skill files.
//!
//! A deliberately small line-oriented subset: `key: value` pairs with
//! booleans, numbers, `[a, b, c]` arrays, and quoted strings. Malformed
//! frontmatter degrades to defaults; it never fails a load.

use serde::Deserialize;

/// Parsed skill frontmatter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillFrontmatter {
    /// Skill name (identifier).
    #[serde(default)]
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Skill kind: `action`, `data_type`, or `library`. Defaults to action.
    #[serde(default)]
    pub kind: String,
    /// Input parameter names collected before the skill runs.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Chat trigger phrases (actions only).
    #[serde(default)]
    pub triggers: Vec<String>,
}

/// Parse a skill file, separating frontmatter from the template body.
///
/// Returns `(frontmatter, body)`. If no frontmatter is found, returns
/// default frontmatter and the entire content as body.
pub fn parse_skill_file(content: &str) -> (SkillFrontmatter, String) {
    let trimmed = content.trim_start();

    if !trimmed.starts_with("---") {
        return (SkillFrontmatter::default(), content.to_string());
    }

    let after_first = &trimmed[3..];
    let Some(end_pos) = after_first.find("\n---") else {
        return (SkillFrontmatter::default(), content.to_string());
    };

    let yaml_str = &after_first[..end_pos];
    let body = after_first[end_pos + 4..]
        .trim_start_matches('\n')
        .to_string();

    let map = yaml_str
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| match l.split_once(':') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (l.trim(), ""),
        })
        .fold(serde_json::Map::new(), |mut map, (key, value)| {
            map.insert(key.to_string(), parse_yaml_value(value));
            map
        });

    match serde_json::from_value(serde_json::Value::Object(map)) {
        Ok(fm) => (fm, body),
        Err(_) => (SkillFrontmatter::default(), content.to_string()),
    }
}

/// Simple YAML value parser for frontmatter fields.
fn parse_yaml_value(value: &str) -> serde_json::Value {
    let trimmed = value.trim();

    if trimmed == "true" {
        return serde_json::Value::Bool(true);
    }
    if trimmed == "false" {
        return serde_json::Value::Bool(false);
    }

    // Array: [item1, item2]
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        let inner = &trimmed[1..trimmed.len() - 1];
        let items: Vec<serde_json::Value> = inner
            .split(',')
            .map(|s| unquote(s.trim()))
            .filter(|s| !s.is_empty())
            .map(|s| serde_json::Value::String(s.to_string()))
            .collect();
        return serde_json::Value::Array(items);
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return serde_json::Value::Number(n.into());
    }

    serde_json::Value::String(unquote(trimmed).to_string())
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(value)
}
