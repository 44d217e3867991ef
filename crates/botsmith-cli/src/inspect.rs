//! The `inspect` subcommand: template feature checklist for one skill file.

use std::path::Path;

use botsmith_skills::loader::{self, SkillSource};

pub fn run_inspect(file: &Path) -> anyhow::Result<()> {
    let entry = loader::load_skill_file(file, SkillSource::Workspace)?;
    let version = entry.into_version();
    let template = &version.response_template;

    println!("Skill: {} ({})", version.name, version.kind.label());
    if !version.description.is_empty() {
        println!("  {}", version.description);
    }

    let params = template.params_used();
    if params.is_empty() {
        println!("No placeholders used");
    } else {
        println!("Placeholders: {}", params.join(", "));
    }

    println!("Features:");
    checklist("user parameters", template.uses_any_param());
    checklist("successResult", template.uses_success_result());
    checklist("dotted paths", template.uses_path());
    checklist("iteration", template.uses_iteration());
    checklist("conditionals", template.uses_if_logic());
    checklist("Markdown formatting", template.uses_markdown());

    Ok(())
}

fn checklist(label: &str, present: bool) {
    let mark = if present { "x" } else { " " };
    println!("  [{mark}] {label}");
}
