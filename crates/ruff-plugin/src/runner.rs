//! Invocation of the ruff executable.

use crate::utils::check_ruff_installed;
use camino::Utf8PathBuf;
use hook_common::{run_program, CommandResult, Result};

/// Seam between the hooks and the external tool.
pub trait ToolRunner {
    /// Executable name used in messages.
    fn program(&self) -> &str;

    /// Fail fast when the tool cannot be found.
    fn ensure_installed(&self) -> Result<()>;

    /// Run the tool with `args` and wait for it to exit.
    fn run(&self, args: &[String]) -> Result<CommandResult>;
}

/// Runs a real ruff executable.
#[derive(Debug, Clone)]
pub struct Ruff {
    program: String,
    dir: Option<Utf8PathBuf>,
}

impl Ruff {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            dir: None,
        }
    }

    /// Run ruff from `dir`, so it picks up the project's own settings.
    pub fn with_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}

impl Default for Ruff {
    fn default() -> Self {
        Self::new("ruff")
    }
}

impl ToolRunner for Ruff {
    fn program(&self) -> &str {
        &self.program
    }

    fn ensure_installed(&self) -> Result<()> {
        check_ruff_installed(&self.program)
    }

    fn run(&self, args: &[String]) -> Result<CommandResult> {
        run_program(&self.program, args, self.dir.as_deref())
    }
}
