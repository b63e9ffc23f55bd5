//! Error type shared by the hook crates.

use thiserror::Error;

/// Errors raised while running a pre-commit hook.
#[derive(Debug, Error)]
pub enum HookError {
    /// The external tool could not be resolved.
    #[error(
        "Could not find {program}. Please add {program} to your python environment \
         or make it available on PATH."
    )]
    ToolNotInstalled { program: String },

    /// A subprocess could not be started.
    #[error("Failed to execute command: {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but could not be read.
    #[error("Failed to read config file: {path}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("Failed to parse config file: {path}")]
    ParseConfig {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A git command exited unsuccessfully.
    #[error("git {args} failed: {stderr}")]
    Git { args: String, stderr: String },

    /// A porcelain status line could not be parsed.
    #[error("Invalid status entry: {0:?}")]
    InvalidStatus(String),

    /// A path reported by git is not valid UTF-8.
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(String),
}

pub type Result<T, E = HookError> = std::result::Result<T, E>;
