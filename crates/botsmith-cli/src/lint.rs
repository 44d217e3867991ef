//! The `lint` subcommand: unknown-parameter warnings for skill templates.

use std::path::{Path, PathBuf};

use anyhow::bail;

use botsmith_skills::loader::{self, SkillSource};

pub fn run_lint(path: Option<&Path>, strict: bool) -> anyhow::Result<()> {
    let dirs: Vec<(PathBuf, SkillSource)> = match path {
        Some(p) => vec![(p.to_path_buf(), SkillSource::Workspace)],
        None => crate::skill_dirs()?,
    };

    let config = botsmith_config::load_config().unwrap_or_default();
    let entries = loader::load_skills(&dirs);
    if entries.is_empty() {
        println!("No skills found");
        return Ok(());
    }

    let mut warnings = 0usize;
    for entry in entries {
        let version = entry.into_version();

        if config.lint.warn_unknown_params {
            for unknown in version.unknown_template_params() {
                println!(
                    "{}: unknown parameter \"{unknown}\" in response template",
                    version.name
                );
                warnings += 1;
            }
        }
        if config.lint.warn_missing_description && version.description.is_empty() {
            println!("{}: missing description", version.name);
            warnings += 1;
        }
    }

    if warnings == 0 {
        println!("No warnings");
    } else {
        tracing::info!(warnings, "Lint finished with warnings");
        if strict {
            bail!("{warnings} lint warning(s)");
        }
    }
    Ok(())
}
