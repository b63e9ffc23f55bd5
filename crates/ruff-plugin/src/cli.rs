//! Command-line wiring shared by the hook binaries.

use crate::runner::Ruff;
use crate::{check, format, Host};
use anyhow::{anyhow, Context, Result};
use camino::Utf8PathBuf;
use clap::Args;
use hook_common::{ConsoleProgress, ConsoleTerminal, GitRepository, PluginConfig, ReportProgress};

/// Which ruff hook to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Check,
    Format,
}

/// Options common to both hooks.
#[derive(Debug, Clone, Args)]
pub struct HookArgs {
    /// pyproject.toml holding the [tool.autohooks.plugins.ruff] table
    #[arg(long, default_value = "pyproject.toml")]
    pub config: String,

    /// Ruff executable to run
    #[arg(long, default_value = "ruff")]
    pub ruff: String,

    /// Do not print per-file progress
    #[arg(long)]
    pub no_progress: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Run the hook from the current directory and return its exit status.
pub fn run(mode: Mode, args: &HookArgs) -> Result<i32> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow!("Working directory is not valid UTF-8: {}", p.display()))?;

    let config_path = cwd.join(&args.config);
    let config = PluginConfig::load(&config_path)?;

    let repository = GitRepository::new(cwd.clone());
    let runner = Ruff::new(args.ruff.as_str()).with_dir(cwd);
    let mut terminal = ConsoleTerminal::new(!args.no_color);
    let mut console_progress = ConsoleProgress::default();
    let progress: Option<&mut dyn ReportProgress> = if args.no_progress {
        None
    } else {
        Some(&mut console_progress)
    };

    let mut host = Host {
        repository: &repository,
        terminal: &mut terminal,
        runner: &runner,
    };

    let code = match mode {
        Mode::Check => check::precommit(&mut host, Some(&config), progress)?,
        Mode::Format => format::precommit(&mut host, Some(&config), progress)?,
    };
    Ok(code)
}

/// Process exit status for a hook result.
///
/// Only the low 8 bits of an exit status survive on Unix, so counts are
/// clamped to keep every failure non-zero.
pub fn exit_status(code: i32) -> i32 {
    if code == 0 { 0 } else { code.clamp(1, 255) }
}
