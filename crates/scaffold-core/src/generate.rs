//! Project generation pipeline
//!
//! Steps run strictly in order and every failure is fatal. Nothing is rolled
//! back: writes are not transactional, so an interrupted or failed run leaves
//! a partially configured directory that has to be removed by hand.
//!
//! The target directory is checked for existence once, in
//! [`prepare_directory`]. The generator later deletes and recreates it without
//! a second check; two runs racing on the same name are not guarded against.

use crate::config::GenerationConfig;
use crate::error::ScaffoldError;
use crate::runtime::command::{run_checked, CommandRunner};
use crate::templates::{
    self, patch_entry_point, patch_manifest, APP_CSS_PATH, INDEX_CSS_PATH, INDEX_CSS,
    MANIFEST_PATH, POSTCSS_CONFIG, POSTCSS_CONFIG_PATH, TAILWIND_PACKAGES,
};
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Progress notifications emitted by [`materialize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Scaffold,
    InstallDependencies,
    InstallTailwind,
    WriteConfig,
    WriteSources,
    PatchManifest,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Step::Scaffold => "Creating Vite project",
            Step::InstallDependencies => "Installing dependencies",
            Step::InstallTailwind => "Installing Tailwind CSS",
            Step::WriteConfig => "Configuring Tailwind CSS",
            Step::WriteSources => "Writing components",
            Step::PatchManifest => "Updating package.json",
        };
        f.write_str(label)
    }
}

/// Create the (empty) project directory, refusing to reuse an existing one
pub async fn prepare_directory(cwd: &Path, project_name: &str) -> Result<PathBuf> {
    let path = cwd.join(project_name);

    if fs::try_exists(&path)
        .await
        .with_context(|| format!("Failed to inspect {}", path.display()))?
    {
        return Err(ScaffoldError::DirectoryExists(path).into());
    }

    fs::create_dir(&path)
        .await
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;

    Ok(path)
}

/// Turn a prepared directory into a React + Tailwind project.
///
/// `cwd` must be the directory [`prepare_directory`] was called with; the
/// generator is run there and creates `cwd/<project_name>` itself.
pub async fn materialize<R, F>(
    config: &GenerationConfig,
    cwd: &Path,
    runner: &R,
    mut on_step: F,
) -> Result<PathBuf>
where
    R: CommandRunner,
    F: FnMut(Step),
{
    let pm = config.package_manager;
    let project_dir = config.project_path(cwd);
    let ext = config.source_extension();

    on_step(Step::Scaffold);
    remove_placeholder(&project_dir).await?;
    run_checked(runner, &pm.create(&config.project_name, config.use_typescript), cwd).await?;

    on_step(Step::InstallDependencies);
    run_checked(runner, &pm.install(), &project_dir).await?;

    on_step(Step::InstallTailwind);
    run_checked(runner, &pm.add(&TAILWIND_PACKAGES), &project_dir).await?;

    on_step(Step::WriteConfig);
    write_file(&project_dir.join(POSTCSS_CONFIG_PATH), POSTCSS_CONFIG).await?;
    write_file(&project_dir.join(INDEX_CSS_PATH), INDEX_CSS).await?;
    patch_entry_point(&project_dir.join(format!("src/main.{}", ext))).await?;

    on_step(Step::WriteSources);
    write_file(
        &project_dir.join(format!("src/components/Example.{}", ext)),
        &templates::example_component(config.use_typescript),
    )
    .await?;
    write_file(
        &project_dir.join(format!("src/App.{}", ext)),
        &templates::app_component(config.use_typescript),
    )
    .await?;
    remove_if_present(&project_dir.join(APP_CSS_PATH)).await?;

    on_step(Step::PatchManifest);
    patch_manifest(&project_dir.join(MANIFEST_PATH)).await?;

    Ok(project_dir)
}

/// The generator refuses to write into an existing directory
async fn remove_placeholder(path: &Path) -> Result<()> {
    if fs::try_exists(path)
        .await
        .with_context(|| format!("Failed to inspect {}", path.display()))?
    {
        fs::remove_dir_all(path)
            .await
            .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
    }
    Ok(())
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

async fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
    }
}
