//! The `rename` subcommand: rename a template parameter inside a skill file.
//!
//! Only the template body is rewritten; frontmatter bytes are preserved
//! exactly. The file is written only when the rename had any effect, which
//! the template's shared-storage contract decides.

use std::path::Path;

use botsmith_skills::frontmatter::parse_skill_file;
use botsmith_template::ResponseTemplate;

pub fn run_rename(file: &Path, from: &str, to: &str) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)?;
    let (_, body) = parse_skill_file(&content);

    let template = ResponseTemplate::new(body.clone());
    let renamed = template.replace_param_name(from, to);

    if renamed.shares_text_with(&template) {
        println!("No {{{from}}} placeholders in {}; file unchanged", file.display());
        return Ok(());
    }

    // The parsed body is always a byte suffix of the file content, so the
    // frontmatter prefix can be carried over untouched.
    let prefix = &content[..content.len() - body.len()];
    let updated = format!("{prefix}{renamed}");
    std::fs::write(file, updated)?;

    tracing::info!(from, to, path = %file.display(), "Renamed template parameter");
    println!("Renamed {{{from}}} to {{{to}}} in {}", file.display());
    Ok(())
}
