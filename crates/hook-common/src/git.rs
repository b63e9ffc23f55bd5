//! Staged file discovery and re-staging through git.

use crate::error::{HookError, Result};
use crate::subprocess::run_program;
use camino::{Utf8Path, Utf8PathBuf};

/// Single-letter file state from `git status --porcelain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Unmodified,
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    UpdatedButUnmerged,
    Untracked,
    Ignored,
}

impl Status {
    fn from_char(c: char) -> Option<Self> {
        let status = match c {
            ' ' => Self::Unmodified,
            'M' | 'T' => Self::Modified,
            'A' => Self::Added,
            'D' => Self::Deleted,
            'R' => Self::Renamed,
            'C' => Self::Copied,
            'U' => Self::UpdatedButUnmerged,
            '?' => Self::Untracked,
            '!' => Self::Ignored,
            _ => return None,
        };
        Some(status)
    }
}

/// One entry of the repository status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// State in the index
    pub index: Status,
    /// State in the working tree
    pub working_tree: Status,
    /// Path relative to the repository root
    pub path: Utf8PathBuf,
    /// Source path of a rename or copy
    pub old_path: Option<Utf8PathBuf>,
    /// Repository root
    pub root_path: Utf8PathBuf,
}

impl StatusEntry {
    /// Parse a porcelain status string such as `"M  src/app.py"`.
    pub fn parse(status_string: &str, root_path: impl Into<Utf8PathBuf>) -> Result<Self> {
        let invalid = || HookError::InvalidStatus(status_string.to_string());

        let mut chars = status_string.chars();
        let index = chars.next().and_then(Status::from_char).ok_or_else(invalid)?;
        let working_tree = chars.next().and_then(Status::from_char).ok_or_else(invalid)?;
        let path = status_string
            .get(3..)
            .filter(|p| !p.is_empty())
            .ok_or_else(invalid)?;

        Ok(Self {
            index,
            working_tree,
            path: Utf8PathBuf::from(path),
            old_path: None,
            root_path: root_path.into(),
        })
    }

    /// Path joined onto the repository root.
    pub fn absolute_path(&self) -> Utf8PathBuf {
        self.root_path.join(&self.path)
    }

    /// Whether the entry carries staged content that can be checked.
    pub fn is_staged(&self) -> bool {
        matches!(
            self.index,
            Status::Modified | Status::Added | Status::Renamed | Status::Copied
        )
    }
}

/// Version-control operations a hook needs from its host.
pub trait Repository {
    /// Directory the hook was started in.
    fn workdir(&self) -> &Utf8Path;

    /// Staged files in index order.
    fn staged_status(&self) -> Result<Vec<StatusEntry>>;

    /// Add the given files to the index.
    ///
    /// Whole files are added, so unstaged hunks in them are staged as well.
    /// Callers that must keep those hunks out of the commit stash them before
    /// the hook runs and restore them afterwards.
    fn stage_files(&self, files: &[StatusEntry]) -> Result<()>;
}

/// [`Repository`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitRepository {
    workdir: Utf8PathBuf,
}

impl GitRepository {
    pub fn new(workdir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        let result = run_program("git", args, Some(&self.workdir))?;
        if !result.success {
            return Err(HookError::Git {
                args: args.join(" "),
                stderr: result.stderr.trim().to_string(),
            });
        }
        Ok(result.stdout)
    }

    /// Top-level directory of the working tree.
    pub fn toplevel(&self) -> Result<Utf8PathBuf> {
        let stdout = self.git(&["rev-parse", "--show-toplevel"])?;
        Ok(Utf8PathBuf::from(stdout.trim()))
    }
}

impl Repository for GitRepository {
    fn workdir(&self) -> &Utf8Path {
        &self.workdir
    }

    fn staged_status(&self) -> Result<Vec<StatusEntry>> {
        let root = self.toplevel()?;
        let stdout = self.git(&["status", "--porcelain=v1", "-z"])?;
        let entries = parse_porcelain(&stdout, &root)?;
        Ok(entries.into_iter().filter(StatusEntry::is_staged).collect())
    }

    fn stage_files(&self, files: &[StatusEntry]) -> Result<()> {
        if files.is_empty() {
            return Ok(());
        }

        let paths: Vec<String> = files.iter().map(|f| f.absolute_path().into_string()).collect();
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.git(&args)?;
        Ok(())
    }
}

/// Parse NUL separated `git status --porcelain=v1 -z` output.
///
/// Renames and copies are followed by an extra field holding the source path.
pub fn parse_porcelain(output: &str, root: &Utf8Path) -> Result<Vec<StatusEntry>> {
    let mut entries = Vec::new();
    let mut fields = output.split('\0').filter(|f| !f.is_empty());

    while let Some(field) = fields.next() {
        let mut entry = StatusEntry::parse(field, root)?;
        if matches!(entry.index, Status::Renamed | Status::Copied) {
            entry.old_path = fields.next().map(Utf8PathBuf::from);
        }
        entries.push(entry);
    }

    Ok(entries)
}
