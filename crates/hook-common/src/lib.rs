//! Common utilities for autohooks pre-commit plugins.
//!
//! This crate provides the host-side collaborators a plugin runs against:
//! - Configuration loading from pyproject.toml
//! - Staged file discovery and re-staging
//! - Terminal output and progress reporting
//! - Subprocess execution
//! - Error handling
//! - Debug logging

pub mod config;
pub mod debug;
pub mod error;
pub mod git;
pub mod subprocess;
pub mod terminal;

pub use config::PluginConfig;
pub use debug::{debug_log_path, is_debug_enabled, log_decision, HookDebugLog};
pub use error::{HookError, Result};
pub use git::{GitRepository, Repository, Status, StatusEntry};
pub use subprocess::{command_exists, run_program, CommandResult};
pub use terminal::{ConsoleProgress, ConsoleTerminal, NoProgress, ReportProgress, Terminal};

