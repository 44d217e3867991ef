//! botsmith-types: the skill data model.
//!
//! Skills are the units the editor authors and versions: actions that
//! respond to chat triggers, data types that back custom input choices,
//! and shared libraries. Each skill version owns exactly one response
//! template and the input definitions that supply its parameter names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use botsmith_template::ResponseTemplate;

// ──────────────────── Parameter Names ────────────────────

/// Reserved placeholder base name for the value a skill's code returns.
pub const SUCCESS_RESULT_PARAM: &str = "successResult";

/// Names the platform always provides to a running skill, in addition to
/// its user-defined inputs.
pub const SYSTEM_PARAM_NAMES: &[&str] = &[SUCCESS_RESULT_PARAM, "userName", "channelName"];

// ──────────────────── Inputs & Triggers ────────────────────

/// The value type collected for an input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    #[default]
    Text,
    Number,
    YesNo,
    /// Backed by a user-defined data-type skill.
    Custom(String),
}

impl ParamType {
    /// Resolve a frontmatter type name; unrecognized names become custom
    /// data-type references.
    pub fn from_name(name: &str) -> Self {
        match name {
            "" | "text" => Self::Text,
            "number" => Self::Number,
            "yes_no" => Self::YesNo,
            other => Self::Custom(other.to_string()),
        }
    }
}

/// One user-defined input collected before a skill runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Parameter name referenced from templates and code.
    pub name: String,
    /// Question the bot asks to collect the value.
    #[serde(default)]
    pub question: String,
    /// Value type.
    #[serde(default)]
    pub param_type: ParamType,
    /// Whether the collected value is shared across the whole team.
    #[serde(default)]
    pub is_shared: bool,
}

impl InputConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            question: String::new(),
            param_type: ParamType::Text,
            is_shared: false,
        }
    }
}

/// A chat phrase or pattern that invokes an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Literal phrase, or a regex when `is_regex` is set.
    pub pattern: String,
    /// Whether the bot must be mentioned for the trigger to fire.
    #[serde(default = "default_true")]
    pub requires_mention: bool,
    /// Whether `pattern` is a regular expression.
    #[serde(default)]
    pub is_regex: bool,
    /// Whether matching is case-sensitive.
    #[serde(default)]
    pub case_sensitive: bool,
}

impl TriggerConfig {
    pub fn phrase(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            requires_mention: true,
            is_regex: false,
            case_sensitive: false,
        }
    }
}

fn default_true() -> bool {
    true
}

// ──────────────────── Skills ────────────────────

/// What a skill is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    #[default]
    Action,
    DataType,
    Library,
}

impl SkillKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::DataType => "data_type",
            Self::Library => "library",
        }
    }
}

/// One version of a skill: the editable content plus identity metadata.
///
/// Versions are immutable once created; editing produces a new version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillVersion {
    /// Version identity.
    pub id: Uuid,
    /// Skill name (identifier).
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// What kind of skill this is.
    #[serde(default)]
    pub kind: SkillKind,
    /// Sandboxed function source (out of scope for analysis; carried as
    /// opaque text).
    #[serde(default)]
    pub function_body: String,
    /// Response template sent to chat on completion.
    #[serde(default)]
    pub response_template: ResponseTemplate,
    /// User-defined inputs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputConfig>,
    /// Chat triggers (actions only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<TriggerConfig>,
    /// When this version was created.
    pub created_at: DateTime<Utc>,
}

impl SkillVersion {
    /// Create a fresh version with empty content.
    pub fn new(name: impl Into<String>, kind: SkillKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            kind,
            function_body: String::new(),
            response_template: ResponseTemplate::default(),
            inputs: Vec::new(),
            triggers: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Names this version's template may legitimately reference: the
    /// user-defined input names followed by the fixed system names.
    pub fn valid_param_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inputs.iter().map(|i| i.name.clone()).collect();
        for system in SYSTEM_PARAM_NAMES {
            if !names.iter().any(|n| n == system) {
                names.push((*system).to_string());
            }
        }
        names
    }

    /// Template references that match neither an input, a system name, nor
    /// a template loop variable.
    pub fn unknown_template_params(&self) -> Vec<String> {
        self.response_template
            .unknown_params_excluding(&self.valid_param_names())
    }

    /// SHA-256 over the editable content, hex-encoded.
    ///
    /// Identity metadata (id, created_at) is excluded so two versions with
    /// identical content hash identically.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        let mut field = |bytes: &[u8]| {
            hasher.update(bytes);
            hasher.update([0]);
        };
        field(self.name.as_bytes());
        field(self.description.as_bytes());
        field(format!("{:?}", self.kind).as_bytes());
        field(self.function_body.as_bytes());
        field(self.response_template.as_str().as_bytes());
        for input in &self.inputs {
            field(input.name.as_bytes());
            field(input.question.as_bytes());
            field(format!("{:?}", input.param_type).as_bytes());
            field(&[input.is_shared as u8]);
        }
        for trigger in &self.triggers {
            field(trigger.pattern.as_bytes());
            field(&[
                trigger.requires_mention as u8,
                trigger.is_regex as u8,
                trigger.case_sensitive as u8,
            ]);
        }
        hex::encode(hasher.finalize())
    }

    /// Whether the editable content differs from `other`.
    pub fn is_modified_from(&self, other: &Self) -> bool {
        self.content_hash() != other.content_hash()
    }
}

// ──────────────────── Groups ────────────────────

/// A named collection of skills installed and versioned together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<SkillVersion>,
}

impl SkillGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            skills: Vec::new(),
        }
    }

    /// Look up a skill by name.
    pub fn skill_named(&self, name: &str) -> Option<&SkillVersion> {
        self.skills.iter().find(|s| s.name == name)
    }

    /// Actions in this group.
    pub fn actions(&self) -> impl Iterator<Item = &SkillVersion> {
        self.skills.iter().filter(|s| s.kind == SkillKind::Action)
    }
}
