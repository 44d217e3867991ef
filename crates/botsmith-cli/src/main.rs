mod diff;
mod inspect;
mod lint;
mod rename;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use botsmith_skills::loader::SkillSource;

#[derive(Parser)]
#[command(name = "botsmith", about = "Chatbot skill authoring toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List skills discovered in the configured directories
    List,
    /// Show the template feature checklist for one skill file
    Inspect {
        /// Skill file to inspect
        file: PathBuf,
    },
    /// Check skills for unknown template parameters
    Lint {
        /// Skill file or directory (defaults to configured directories)
        path: Option<PathBuf>,

        /// Exit with an error when any warning is emitted
        #[arg(long)]
        strict: bool,
    },
    /// Rename an input parameter everywhere the template references it
    Rename {
        /// Skill file to rewrite
        file: PathBuf,

        /// Current parameter name
        #[arg(long)]
        from: String,

        /// New parameter name
        #[arg(long)]
        to: String,
    },
    /// Compare two saved versions of a skill
    Diff {
        /// Older skill file
        old: PathBuf,

        /// Newer skill file
        new: PathBuf,

        /// Print the change list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            let entries = botsmith_skills::loader::load_skills(&skill_dirs()?);
            if entries.is_empty() {
                println!("No skills found");
                return Ok(());
            }
            for entry in &entries {
                println!(
                    "{:<24} {:<10} {:<10} {}",
                    entry.name,
                    entry.kind.label(),
                    entry.source.label(),
                    entry.description
                );
            }
        }
        Commands::Inspect { file } => inspect::run_inspect(&file)?,
        Commands::Lint { path, strict } => lint::run_lint(path.as_deref(), strict)?,
        Commands::Rename { file, from, to } => rename::run_rename(&file, &from, &to)?,
        Commands::Diff { old, new, json } => diff::run_diff(&old, &new, json)?,
    }

    Ok(())
}

/// Skill directories in priority order (low to high): managed skills,
/// extra configured directories, then the workspace-local directory.
fn skill_dirs() -> anyhow::Result<Vec<(PathBuf, SkillSource)>> {
    let config = botsmith_config::load_config().unwrap_or_default();

    let mut dirs = Vec::new();
    if let Ok(config_dir) = botsmith_config::config_dir() {
        dirs.push((config_dir.join("skills"), SkillSource::Managed));
    }
    for dir in config.skill_dirs {
        dirs.push((dir, SkillSource::Managed));
    }
    dirs.push((
        std::env::current_dir()?.join(".botsmith/skills"),
        SkillSource::Workspace,
    ));
    Ok(dirs)
}
