//! Scaffold Core - library behind `create-react-tailwind`
//!
//! Creates a React project with the external Vite generator, then layers in
//! Tailwind CSS and a sample component by writing files directly.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Package manager command sets, toolchain
//!   detection, file contents and patches
//! - **Layer 2: Pipeline** - [`generate::prepare_directory`] and
//!   [`generate::materialize`], with the working directory and a
//!   [`CommandRunner`] passed in explicitly
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{generate, GenerationConfig, SystemRunner};
//!
//! let config = GenerationConfig::with_defaults("demo-app");
//! let cwd = std::env::current_dir()?;
//! generate::prepare_directory(&cwd, &config.project_name).await?;
//! generate::materialize(&config, &cwd, &SystemRunner, |step| println!("{step}")).await?;
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod package_manager;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{validate_project_name, GenerationConfig, DEFAULT_PROJECT_NAME};
pub use error::ScaffoldError;
pub use generate::{materialize, prepare_directory, Step};
pub use package_manager::PackageManager;
pub use runtime::{CommandRunner, CommandStatus, Invocation, SystemRunner};

#[cfg(feature = "tui")]
pub use tui::run;
