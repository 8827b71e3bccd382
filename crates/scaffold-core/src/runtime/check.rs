//! Toolchain detection for the selected package manager and Node.js

use crate::package_manager::PackageManager;
use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release supported by current Vite
pub const MIN_NODE_VERSION: &str = "20.19.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    fn probe(name: &'static str, program: &str) -> Self {
        let program = if cfg!(windows) && program != "node" {
            format!("{}.cmd", program)
        } else {
            program.to_string()
        };
        let output = Command::new(program).arg("--version").output();

        match output {
            Ok(out) if out.status.success() => {
                let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
                RuntimeInfo {
                    name,
                    version: Some(version),
                    available: true,
                }
            }
            _ => RuntimeInfo {
                name,
                version: None,
                available: false,
            },
        }
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    RuntimeInfo::probe("Node.js", "node")
}

/// Check if the package manager binary answers `--version`
pub fn check_package_manager(pm: PackageManager) -> RuntimeInfo {
    RuntimeInfo::probe(pm.display_name(), pm.commands().program)
}

/// Where to get a missing package manager
pub fn install_hint(pm: PackageManager) -> &'static str {
    match pm {
        PackageManager::Npm => "install Node.js from https://nodejs.org",
        PackageManager::Yarn => "run `corepack enable` or see https://yarnpkg.com",
        PackageManager::Pnpm => "run `corepack enable` or see https://pnpm.io/installation",
    }
}

/// Fail when the package manager is missing; report what was found otherwise.
pub fn check_toolchain(pm: PackageManager) -> Result<Vec<RuntimeInfo>> {
    let manager = check_package_manager(pm);
    if !manager.available {
        anyhow::bail!(
            "Missing required package manager:\n  - {} ({})",
            pm.display_name(),
            install_hint(pm)
        );
    }

    Ok(vec![check_node(), manager])
}

/// Compare a detected Node.js version against [`MIN_NODE_VERSION`].
/// Returns a warning message if it is older; unparseable versions are skipped.
pub fn node_version_warning(detected: &str) -> Option<String> {
    let node_ver = parse_version(detected).ok()?;
    let min_ver = Version::parse(MIN_NODE_VERSION).ok()?;

    if node_ver < min_ver {
        Some(format!(
            "Vite requires Node.js {} or newer, you are running {}.",
            MIN_NODE_VERSION, detected
        ))
    } else {
        None
    }
}

/// Parse version string, handling a leading `v` (`node --version` prints `v22.1.0`)
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
