//! Errors raised by the scaffolding pipeline itself
//!
//! I/O failures from the filesystem are passed through as `anyhow` errors with
//! context; these are the failures the pipeline detects on its own.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Directory already exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    #[error("Failed to start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with exit code: {}", code_label(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Invalid manifest {}: expected a JSON object", .0.display())]
    ManifestNotObject(PathBuf),
}

fn code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}
