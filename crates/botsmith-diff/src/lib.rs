//! botsmith-diff: field-level comparison of skill versions.
//!
//! Powers the version browser: given two versions of a skill, produce an
//! ordered list of what changed, suitable for display next to each saved
//! version. Comparison is structural; no text diffing below field
//! granularity.

use serde::{Deserialize, Serialize};

use botsmith_types::SkillVersion;

/// One observed difference between two skill versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum VersionChange {
    NameChanged { from: String, to: String },
    DescriptionChanged,
    KindChanged,
    FunctionBodyChanged,
    ResponseTemplateChanged,
    InputAdded { name: String },
    InputRemoved { name: String },
    InputModified { name: String },
    TriggerAdded { pattern: String },
    TriggerRemoved { pattern: String },
    TemplateParamAdded { name: String },
    TemplateParamRemoved { name: String },
}

/// Compare two versions of a skill.
///
/// Returns an empty list when nothing editable changed. Order is
/// deterministic: scalar fields first, then inputs, triggers, and finally
/// template parameter deltas derived from the token scanner.
pub fn diff_versions(old: &SkillVersion, new: &SkillVersion) -> Vec<VersionChange> {
    let mut changes = Vec::new();

    if old.name != new.name {
        changes.push(VersionChange::NameChanged {
            from: old.name.clone(),
            to: new.name.clone(),
        });
    }
    if old.description != new.description {
        changes.push(VersionChange::DescriptionChanged);
    }
    if old.kind != new.kind {
        changes.push(VersionChange::KindChanged);
    }
    if old.function_body != new.function_body {
        changes.push(VersionChange::FunctionBodyChanged);
    }
    if old.response_template != new.response_template {
        changes.push(VersionChange::ResponseTemplateChanged);
    }

    diff_inputs(old, new, &mut changes);
    diff_triggers(old, new, &mut changes);
    diff_template_params(old, new, &mut changes);

    changes
}

fn diff_inputs(old: &SkillVersion, new: &SkillVersion, changes: &mut Vec<VersionChange>) {
    for input in &new.inputs {
        match old.inputs.iter().find(|i| i.name == input.name) {
            None => changes.push(VersionChange::InputAdded {
                name: input.name.clone(),
            }),
            Some(previous) if previous != input => changes.push(VersionChange::InputModified {
                name: input.name.clone(),
            }),
            Some(_) => {}
        }
    }
    for input in &old.inputs {
        if !new.inputs.iter().any(|i| i.name == input.name) {
            changes.push(VersionChange::InputRemoved {
                name: input.name.clone(),
            });
        }
    }
}

fn diff_triggers(old: &SkillVersion, new: &SkillVersion, changes: &mut Vec<VersionChange>) {
    for trigger in &new.triggers {
        if !old.triggers.iter().any(|t| t == trigger) {
            changes.push(VersionChange::TriggerAdded {
                pattern: trigger.pattern.clone(),
            });
        }
    }
    for trigger in &old.triggers {
        if !new.triggers.iter().any(|t| t == trigger) {
            changes.push(VersionChange::TriggerRemoved {
                pattern: trigger.pattern.clone(),
            });
        }
    }
}

fn diff_template_params(old: &SkillVersion, new: &SkillVersion, changes: &mut Vec<VersionChange>) {
    let old_params = unique_params(old);
    let new_params = unique_params(new);

    for name in &new_params {
        if !old_params.contains(name) {
            changes.push(VersionChange::TemplateParamAdded { name: name.clone() });
        }
    }
    for name in &old_params {
        if !new_params.contains(name) {
            changes.push(VersionChange::TemplateParamRemoved { name: name.clone() });
        }
    }
}

/// Placeholder tokens de-duplicated in first-appearance order, control
/// keywords excluded.
fn unique_params(version: &SkillVersion) -> Vec<String> {
    let mut seen = Vec::new();
    for token in version.response_template.params_used() {
        if botsmith_template::scanner::is_control_keyword(&token) {
            continue;
        }
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen
}

/// One human-readable line for a change, for CLI and version-browser rows.
pub fn describe(change: &VersionChange) -> String {
    match change {
        VersionChange::NameChanged { from, to } => format!("Renamed \"{from}\" to \"{to}\""),
        VersionChange::DescriptionChanged => "Description changed".to_string(),
        VersionChange::KindChanged => "Skill kind changed".to_string(),
        VersionChange::FunctionBodyChanged => "Function code changed".to_string(),
        VersionChange::ResponseTemplateChanged => "Response template changed".to_string(),
        VersionChange::InputAdded { name } => format!("Input \"{name}\" added"),
        VersionChange::InputRemoved { name } => format!("Input \"{name}\" removed"),
        VersionChange::InputModified { name } => format!("Input \"{name}\" modified"),
        VersionChange::TriggerAdded { pattern } => format!("Trigger \"{pattern}\" added"),
        VersionChange::TriggerRemoved { pattern } => format!("Trigger \"{pattern}\" removed"),
        VersionChange::TemplateParamAdded { name } => {
            format!("Template now references \"{name}\"")
        }
        VersionChange::TemplateParamRemoved { name } => {
            format!("Template no longer references \"{name}\"")
        }
    }
}
