//! Debug logging for hooks.
//!
//! Appends every per-file decision to a JSONL file so a failing commit can
//! be traced back to the exact tool output.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;

/// Environment variable enabling the debug log.
pub const DEBUG_ENV: &str = "AUTOHOOKS_HOOK_DEBUG";

/// Debug log entry for hook execution
#[derive(Debug, Serialize)]
pub struct HookDebugLog {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Hook name (e.g., "ruff-check")
    pub hook_name: String,
    /// File the entry is about, empty for whole-run entries
    pub file: String,
    /// Decision made (ok/error/skip/ignored)
    pub decision: String,
    /// Reason for the decision
    pub reason: String,
    /// Additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl HookDebugLog {
    pub fn new(hook_name: &str, file: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            hook_name: hook_name.to_string(),
            file: file.to_string(),
            decision: String::new(),
            reason: String::new(),
            context: None,
        }
    }

    pub fn with_decision(mut self, decision: &str, reason: &str) -> Self {
        self.decision = decision.to_string();
        self.reason = reason.to_string();
        self
    }

    pub fn with_context(mut self, context: &str) -> Self {
        // Truncate to 500 chars to avoid huge logs
        self.context = Some(if context.chars().count() > 500 {
            let head: String = context.chars().take(500).collect();
            format!("{}...", head)
        } else {
            context.to_string()
        });
        self
    }

    /// Write log entry below `workdir` if debugging is enabled there.
    pub fn write(&self, workdir: &Utf8Path) -> std::io::Result<()> {
        if !is_debug_enabled(workdir) {
            return Ok(());
        }

        let log_path = debug_log_path(workdir);

        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let json = serde_json::to_string(self).unwrap_or_default();
        writeln!(file, "{}", json)?;

        Ok(())
    }
}

/// Check if debug mode is enabled
pub fn is_debug_enabled(workdir: &Utf8Path) -> bool {
    if std::env::var_os(DEBUG_ENV).is_some() {
        return true;
    }

    workdir.join(".autohooks").join(".hook-debug").exists()
}

/// Get debug log file path
pub fn debug_log_path(workdir: &Utf8Path) -> Utf8PathBuf {
    workdir
        .join(".autohooks")
        .join("logs")
        .join("hook-debug.jsonl")
}

/// Quick helper to log a hook decision
pub fn log_decision(workdir: &Utf8Path, hook_name: &str, file: &str, decision: &str, reason: &str) {
    let log = HookDebugLog::new(hook_name, file).with_decision(decision, reason);
    let _ = log.write(workdir);
}
