//! botsmith-skills: skill file parsing, discovery, and loading.
//!
//! Skills are Markdown files with YAML-style frontmatter. The frontmatter
//! declares the skill's identity, inputs, and chat triggers; the body is
//! the response template sent to chat when the skill finishes.
//!
//! # Skill file format
//!
//! ```markdown
//! ---
//! name: deploy-status
//! description: Report the current deploy status
//! kind: action
//! inputs: [env]
//! triggers: [deploy status]
//! ---
//!
//! Deploy {env}: {successResult.state}
//! ```

pub mod commands;
pub mod frontmatter;
pub mod loader;

pub use commands::ChatCommand;
pub use loader::{SkillEntry, SkillSource};
