//! Generation settings collected from the CLI and prompts

mod project;

pub use project::{validate_project_name, GenerationConfig, DEFAULT_PROJECT_NAME};
