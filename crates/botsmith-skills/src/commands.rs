//! Chat command compilation from loaded skills.

use botsmith_types::SkillKind;

use crate::loader::SkillEntry;

/// One chat trigger row compiled from an action skill.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    /// Skill this trigger invokes.
    pub skill_name: String,
    /// Trigger phrase.
    pub trigger: String,
    /// Description for help display.
    pub description: String,
}

/// Build the chat command table from loaded skills.
///
/// Only actions with at least one trigger are included; data types and
/// libraries are never directly invocable.
pub fn build_chat_commands(skills: &[SkillEntry]) -> Vec<ChatCommand> {
    skills
        .iter()
        .filter(|s| s.kind == SkillKind::Action)
        .flat_map(|s| {
            s.triggers.iter().map(|trigger| ChatCommand {
                skill_name: s.name.clone(),
                trigger: trigger.clone(),
                description: s.description.clone(),
            })
        })
        .collect()
}
