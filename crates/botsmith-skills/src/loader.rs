//! Skill file discovery and loading.

use std::path::{Path, PathBuf};

use botsmith_template::ResponseTemplate;
use botsmith_types::{InputConfig, SkillKind, SkillVersion, TriggerConfig};

use crate::frontmatter::parse_skill_file;

/// Source of a skill definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillSource {
    /// Built-in skill shipped with botsmith.
    Bundled,
    /// User-managed global skill (`~/.botsmith/skills/`).
    Managed,
    /// Project-local skill (`./.botsmith/skills/`).
    Workspace,
}

impl SkillSource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::Managed => "managed",
            Self::Workspace => "workspace",
        }
    }
}

/// A loaded skill entry.
#[derive(Debug, Clone)]
pub struct SkillEntry {
    /// Skill name (identifier).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Skill kind.
    pub kind: SkillKind,
    /// Declared input parameter names.
    pub inputs: Vec<String>,
    /// Chat trigger phrases.
    pub triggers: Vec<String>,
    /// Response template body.
    pub template_text: String,
    /// Source of this skill.
    pub source: SkillSource,
    /// File path of the skill definition.
    pub file_path: PathBuf,
}

impl SkillEntry {
    /// Build a full skill version from this entry.
    pub fn into_version(self) -> SkillVersion {
        let mut version = SkillVersion::new(self.name, self.kind);
        version.description = self.description;
        version.response_template = ResponseTemplate::new(self.template_text);
        version.inputs = self.inputs.into_iter().map(InputConfig::new).collect();
        version.triggers = self.triggers.into_iter().map(TriggerConfig::phrase).collect();
        version
    }
}

/// Load skills from multiple directories.
///
/// Later directories have higher priority — if a skill name appears in
/// multiple directories, the later one wins.
///
/// Directory priority (low → high):
/// 1. Bundled skills
/// 2. Global skills (`~/.botsmith/skills/`)
/// 3. Workspace skills (`./.botsmith/skills/`)
pub fn load_skills(dirs: &[(PathBuf, SkillSource)]) -> Vec<SkillEntry> {
    let mut skills_map = std::collections::HashMap::new();

    for (dir, source) in dirs {
        if !dir.exists() {
            continue;
        }

        for file_path in discover_skill_files(dir) {
            match load_skill_file(&file_path, *source) {
                Ok(entry) => {
                    tracing::debug!(
                        skill = %entry.name,
                        source = ?source,
                        "Loaded skill"
                    );
                    skills_map.insert(entry.name.clone(), entry);
                }
                Err(e) => {
                    tracing::warn!(
                        path = %file_path.display(),
                        "Failed to load skill: {e}"
                    );
                }
            }
        }
    }

    let mut entries: Vec<SkillEntry> = skills_map.into_values().collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// Discover skill files in a directory.
fn discover_skill_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_file() && is_skill_file(dir) {
        files.push(dir.to_path_buf());
        return files;
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return files,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            // Look for SKILL.md inside the subdirectory
            let skill_file = path.join("SKILL.md");
            if skill_file.exists() {
                files.push(skill_file);
            }
        } else if is_skill_file(&path) {
            files.push(path);
        }
    }

    files
}

fn is_skill_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n == "SKILL.md" || n.ends_with(".skill.md"))
}

/// Load a single skill file.
pub fn load_skill_file(path: &Path, source: SkillSource) -> anyhow::Result<SkillEntry> {
    let content = std::fs::read_to_string(path)?;
    let (fm, body) = parse_skill_file(&content);

    // Use directory name as fallback for skill name
    let name = if fm.name.is_empty() {
        path.parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string()
    } else {
        fm.name
    };

    Ok(SkillEntry {
        name,
        description: fm.description,
        kind: parse_kind(&fm.kind),
        inputs: fm.inputs,
        triggers: fm.triggers,
        template_text: body,
        source,
        file_path: path.to_path_buf(),
    })
}

fn parse_kind(kind: &str) -> SkillKind {
    match kind {
        "data_type" => SkillKind::DataType,
        "library" => SkillKind::Library,
        _ => SkillKind::Action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_skill_file() {
        assert!(is_skill_file(Path::new("/foo/bar/SKILL.md")));
        assert!(is_skill_file(Path::new("/foo/deploy.skill.md")));
        assert!(!is_skill_file(Path::new("/foo/README.md")));
    }

    #[test]
    fn test_load_skill_file_builds_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greet.skill.md");
        fs::write(
            &path,
            "---\nname: greet\ndescription: Say hi\ninputs: [name]\ntriggers: [hello]\n---\nHi {name}!",
        )
        .unwrap();

        let entry = load_skill_file(&path, SkillSource::Workspace).unwrap();
        assert_eq!(entry.name, "greet");
        assert_eq!(entry.kind, SkillKind::Action);
        assert_eq!(entry.inputs, vec!["name"]);
        assert_eq!(entry.template_text, "Hi {name}!");

        let version = entry.into_version();
        assert_eq!(version.inputs[0].name, "name");
        assert_eq!(version.response_template.as_str(), "Hi {name}!");
        assert_eq!(version.triggers[0].pattern, "hello");
    }

    #[test]
    fn test_directory_name_is_fallback_skill_name() {
        let dir = tempfile::tempdir().unwrap();
        let skill_dir = dir.path().join("status-report");
        fs::create_dir(&skill_dir).unwrap();
        fs::write(skill_dir.join("SKILL.md"), "All good: {successResult}").unwrap();

        let entries = load_skills(&[(dir.path().to_path_buf(), SkillSource::Managed)]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "status-report");
    }

    #[test]
    fn test_later_directory_wins() {
        let low = tempfile::tempdir().unwrap();
        let high = tempfile::tempdir().unwrap();
        fs::write(
            low.path().join("greet.skill.md"),
            "---\nname: greet\n---\nlow priority",
        )
        .unwrap();
        fs::write(
            high.path().join("greet.skill.md"),
            "---\nname: greet\n---\nhigh priority",
        )
        .unwrap();

        let entries = load_skills(&[
            (low.path().to_path_buf(), SkillSource::Bundled),
            (high.path().to_path_buf(), SkillSource::Workspace),
        ]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].template_text, "high priority");
        assert_eq!(entries[0].source, SkillSource::Workspace);
    }

    #[test]
    fn test_missing_directory_is_skipped() {
        let entries = load_skills(&[(PathBuf::from("/nonexistent/path"), SkillSource::Bundled)]);
        assert!(entries.is_empty());
    }
}
