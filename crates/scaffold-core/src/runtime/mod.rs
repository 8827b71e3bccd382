//! Toolchain detection and external command execution
//!
//! This module provides:
//! - Package manager and Node.js detection
//! - The [`CommandRunner`] seam the pipeline spawns processes through

pub mod check;
pub mod command;

pub use check::{check_node, check_package_manager, check_toolchain, RuntimeInfo};
pub use command::{CommandRunner, CommandStatus, Invocation, SystemRunner};
