//! Files layered on top of the generated Vite project
//!
//! This module provides:
//! - Contents of the files written verbatim (PostCSS config, stylesheet, components)
//! - Patches for files produced by the generator (entry point, package.json)

pub mod files;
pub mod patch;

pub use files::{app_component, example_component, INDEX_CSS, POSTCSS_CONFIG};
pub use patch::{patch_entry_point, patch_manifest};

/// Packages installed on top of the base template
pub const TAILWIND_PACKAGES: [&str; 3] = ["tailwindcss", "@tailwindcss/postcss", "postcss"];

/// Version range forced for `react` and `react-dom` in package.json
pub const REACT_VERSION: &str = "^19.0.0";

/// Dependencies pinned to [`REACT_VERSION`]
pub const PINNED_PACKAGES: [&str; 2] = ["react", "react-dom"];

pub const POSTCSS_CONFIG_PATH: &str = "postcss.config.mjs";
pub const INDEX_CSS_PATH: &str = "src/index.css";
pub const APP_CSS_PATH: &str = "src/App.css";
pub const MANIFEST_PATH: &str = "package.json";
