//! The `diff` subcommand: compare two saved versions of a skill.

use std::path::Path;

use botsmith_diff::{describe, diff_versions};
use botsmith_skills::loader::{self, SkillSource};

pub fn run_diff(old: &Path, new: &Path, json: bool) -> anyhow::Result<()> {
    let old_version = loader::load_skill_file(old, SkillSource::Workspace)?.into_version();
    let new_version = loader::load_skill_file(new, SkillSource::Workspace)?.into_version();

    let changes = diff_versions(&old_version, &new_version);

    if json {
        println!("{}", serde_json::to_string_pretty(&changes)?);
        return Ok(());
    }

    if changes.is_empty() {
        println!("No changes");
    } else {
        for change in &changes {
            println!("{}", describe(change));
        }
    }
    Ok(())
}
