//! Recording doubles for the hook collaborators.

use crate::runner::ToolRunner;
use camino::{Utf8Path, Utf8PathBuf};
use hook_common::{CommandResult, HookError, ReportProgress, Repository, Result, StatusEntry, Terminal};
use std::cell::RefCell;
use std::collections::VecDeque;

pub const ROOT: &str = "/repo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Out,
    Error,
    Ok,
    Warning,
}

#[derive(Debug, Default)]
pub struct RecordingTerminal {
    pub messages: Vec<(Kind, String)>,
}

impl RecordingTerminal {
    pub fn of(&self, kind: Kind) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(|(kind, message)| {
                let label = match kind {
                    Kind::Out => "out",
                    Kind::Error => "error",
                    Kind::Ok => "ok",
                    Kind::Warning => "warning",
                };
                format!("{}: {}", label, message)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Terminal for RecordingTerminal {
    fn out(&mut self, message: &str) {
        self.messages.push((Kind::Out, message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.messages.push((Kind::Error, message.to_string()));
    }

    fn ok(&mut self, message: &str) {
        self.messages.push((Kind::Ok, message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.messages.push((Kind::Warning, message.to_string()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub init_calls: Vec<usize>,
    pub updates: usize,
}

impl ReportProgress for RecordingProgress {
    fn init(&mut self, total: usize) {
        self.init_calls.push(total);
    }

    fn update(&mut self) {
        self.updates += 1;
    }
}

#[derive(Debug)]
pub struct FakeRepository {
    workdir: Utf8PathBuf,
    entries: Vec<StatusEntry>,
    pub status_calls: RefCell<usize>,
    pub staged: RefCell<Vec<Vec<StatusEntry>>>,
}

impl FakeRepository {
    /// Repository rooted at [`ROOT`] whose index holds `status_strings`.
    pub fn new(status_strings: &[&str]) -> Self {
        let entries = status_strings
            .iter()
            .map(|s| StatusEntry::parse(s, ROOT).unwrap())
            .collect();
        Self {
            workdir: Utf8PathBuf::from(ROOT),
            entries,
            status_calls: RefCell::new(0),
            staged: RefCell::new(Vec::new()),
        }
    }

    /// Same as [`FakeRepository::new`], rooted at `workdir` instead.
    pub fn with_workdir(workdir: &Utf8Path, status_strings: &[&str]) -> Self {
        let entries = status_strings
            .iter()
            .map(|s| StatusEntry::parse(s, workdir).unwrap())
            .collect();
        Self {
            workdir: workdir.to_owned(),
            entries,
            status_calls: RefCell::new(0),
            staged: RefCell::new(Vec::new()),
        }
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }
}

impl Repository for FakeRepository {
    fn workdir(&self) -> &Utf8Path {
        &self.workdir
    }

    fn staged_status(&self) -> Result<Vec<StatusEntry>> {
        *self.status_calls.borrow_mut() += 1;
        Ok(self.entries.clone())
    }

    fn stage_files(&self, files: &[StatusEntry]) -> Result<()> {
        self.staged.borrow_mut().push(files.to_vec());
        Ok(())
    }
}

/// Runner replaying canned results in call order.
#[derive(Debug, Default)]
pub struct FakeRunner {
    pub missing: bool,
    results: RefCell<VecDeque<CommandResult>>,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing() -> Self {
        Self {
            missing: true,
            ..Self::default()
        }
    }

    pub fn returning(self, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.results.borrow_mut().push_back(CommandResult {
            exit_code: Some(exit_code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            success: exit_code == 0,
        });
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ToolRunner for FakeRunner {
    fn program(&self) -> &str {
        "ruff"
    }

    fn ensure_installed(&self) -> Result<()> {
        if self.missing {
            return Err(HookError::ToolNotInstalled {
                program: "ruff".to_string(),
            });
        }
        Ok(())
    }

    fn run(&self, args: &[String]) -> Result<CommandResult> {
        self.calls.borrow_mut().push(args.to_vec());
        Ok(self.results.borrow_mut().pop_front().unwrap_or(CommandResult {
            exit_code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
            success: true,
        }))
    }
}
