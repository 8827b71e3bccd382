use crate::package_manager::PackageManager;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Project name offered when none was given on the command line
pub const DEFAULT_PROJECT_NAME: &str = "my-react-app";

static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid project name pattern"));

/// Check a project name, returning the message shown to the user on rejection
pub fn validate_project_name(name: &str) -> Result<(), &'static str> {
    if PROJECT_NAME.is_match(name) {
        Ok(())
    } else {
        Err("Project name may only contain letters, numbers, underscores and hyphens")
    }
}

/// Everything the pipeline needs to know about the project to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub project_name: String,
    /// TypeScript (`.tsx`) when true, JavaScript (`.jsx`) otherwise
    pub use_typescript: bool,
    pub package_manager: PackageManager,
}

impl GenerationConfig {
    /// Settings used by `--yes`: TypeScript with the default package manager
    pub fn with_defaults(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            use_typescript: true,
            package_manager: PackageManager::default(),
        }
    }

    /// Extension of generated React source files
    pub fn source_extension(&self) -> &'static str {
        if self.use_typescript {
            "tsx"
        } else {
            "jsx"
        }
    }

    pub fn project_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.project_name)
    }

    /// Instructions printed once the project is ready
    pub fn next_steps(&self) -> Vec<String> {
        vec![
            format!("cd {}", self.project_name),
            self.package_manager.run_script("dev").to_string(),
        ]
    }
}
