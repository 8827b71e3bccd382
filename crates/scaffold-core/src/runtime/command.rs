//! External command execution
//!
//! The pipeline never spawns processes directly; it goes through a
//! [`CommandRunner`] so the working directory and the toolchain are explicit
//! inputs that tests can replace.

use anyhow::Result;
use colored::Colorize;
use std::fmt;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

use crate::error::ScaffoldError;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const SUCCESS: CommandStatus = CommandStatus { code: Some(0) };

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands to completion
pub trait CommandRunner {
    /// Run `invocation` inside `cwd` and wait for it to exit.
    ///
    /// Returns `Err` only when the process could not be started; a non-zero
    /// exit is reported through the returned status.
    fn run(&self, invocation: &Invocation, cwd: &Path)
        -> impl Future<Output = Result<CommandStatus>>;
}

/// Spawns real processes with inherited stdio so the user sees the
/// generator's and installer's own output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// npm, yarn and pnpm are `.cmd` shims on Windows
    fn program_name(program: &str) -> String {
        if cfg!(windows) {
            format!("{}.cmd", program)
        } else {
            program.to_string()
        }
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation, cwd: &Path) -> Result<CommandStatus> {
        println!();
        println!("{} {}", "Running:".dimmed(), invocation.to_string().yellow());
        println!();

        let status = TokioCommand::new(Self::program_name(&invocation.program))
            .args(&invocation.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ScaffoldError::CommandSpawn {
                command: invocation.to_string(),
                source,
            })?;

        println!();
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

/// Run a command and turn a non-zero exit into an error
pub async fn run_checked<R: CommandRunner>(
    runner: &R,
    invocation: &Invocation,
    cwd: &Path,
) -> Result<()> {
    let status = runner.run(invocation, cwd).await?;
    if status.success() {
        Ok(())
    } else {
        Err(ScaffoldError::CommandFailed {
            command: invocation.to_string(),
            code: status.code,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FixedRunner {
        status: CommandStatus,
        seen: Mutex<Vec<String>>,
    }

    impl CommandRunner for FixedRunner {
        async fn run(&self, invocation: &Invocation, _cwd: &Path) -> Result<CommandStatus> {
            self.seen.lock().unwrap().push(invocation.to_string());
            Ok(self.status)
        }
    }

    fn invocation() -> Invocation {
        Invocation::new("pnpm", vec!["install".to_string()])
    }

    #[test]
    fn test_invocation_display() {
        assert_eq!(invocation().to_string(), "pnpm install");
        assert_eq!(Invocation::new("yarn", Vec::new()).to_string(), "yarn");
    }

    #[tokio::test]
    async fn test_run_checked_accepts_zero_exit() {
        let runner = FixedRunner {
            status: CommandStatus::SUCCESS,
            seen: Mutex::new(Vec::new()),
        };
        run_checked(&runner, &invocation(), Path::new("."))
            .await
            .unwrap();
        assert_eq!(*runner.seen.lock().unwrap(), vec!["pnpm install"]);
    }

    #[tokio::test]
    async fn test_run_checked_rejects_non_zero_exit() {
        let runner = FixedRunner {
            status: CommandStatus { code: Some(2) },
            seen: Mutex::new(Vec::new()),
        };
        let err = run_checked(&runner, &invocation(), Path::new("."))
            .await
            .unwrap_err();
        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::CommandFailed { command, code }) => {
                assert_eq!(command, "pnpm install");
                assert_eq!(*code, Some(2));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_program_name_matches_platform() {
        let name = SystemRunner::program_name("npm");
        if cfg!(windows) {
            assert_eq!(name, "npm.cmd");
        } else {
            assert_eq!(name, "npm");
        }
    }
}
