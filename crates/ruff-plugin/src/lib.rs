//! Ruff plugin for autohooks style pre-commit hooks.
//!
//! Two hooks are provided:
//! - [`check::precommit`] lints every staged Python file with `ruff check`
//! - [`format::precommit`] formats the staged files with `ruff format` and
//!   stages them again

pub mod check;
pub mod cli;
pub mod diagnostic;
pub mod format;
pub mod runner;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

use hook_common::{NoProgress, ReportProgress, Repository, Terminal};
use runner::ToolRunner;

pub use diagnostic::{parse_output, DiagnosticLine, OutputLine, ParsedOutput};
pub use runner::Ruff;

/// Collaborators a hook run talks to.
pub struct Host<'a> {
    pub repository: &'a dyn Repository,
    pub terminal: &'a mut dyn Terminal,
    pub runner: &'a dyn ToolRunner,
}

/// Run `f` with the supplied progress reporter, or a no-op one.
pub(crate) fn with_progress<T>(
    progress: Option<&mut dyn ReportProgress>,
    f: impl FnOnce(&mut dyn ReportProgress) -> T,
) -> T {
    let mut no_progress = NoProgress;
    match progress {
        Some(progress) => f(progress),
        None => f(&mut no_progress),
    }
}

/// Surface stderr of a successful run, e.g. configuration warnings.
pub(crate) fn report_warnings(host: &mut Host<'_>, stderr: &str) {
    stderr
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .for_each(|line| host.terminal.warning(line));
}
