//! Parsing of ruff's concise text output.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DIAGNOSTIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<path>.+?):(?P<line>\d+):(?P<column>\d+): (?P<code>\S+) (?P<message>.*)$")
        .expect("diagnostic pattern is valid")
});

static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Found (?P<count>\d+) errors?\b").expect("summary pattern is valid")
});

const ALL_PASSED: &str = "All checks passed!";

/// One `path:line:col: code message` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticLine {
    pub path: String,
    pub line: u32,
    pub column: u32,
    pub code: String,
    pub message: String,
    /// The line exactly as ruff printed it
    pub raw: String,
}

impl DiagnosticLine {
    pub fn parse(line: &str) -> Option<Self> {
        let caps = DIAGNOSTIC_RE.captures(line)?;
        Some(Self {
            path: caps["path"].to_string(),
            line: caps["line"].parse().ok()?,
            column: caps["column"].parse().ok()?,
            code: caps["code"].to_string(),
            message: caps["message"].to_string(),
            raw: line.to_string(),
        })
    }
}

impl fmt::Display for DiagnosticLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Classification of a non-empty output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Diagnostic(DiagnosticLine),
    /// `Found N error(s)...`
    Summary { line: String, count: usize },
    /// `All checks passed!`
    Passed,
    Other(String),
}

impl OutputLine {
    /// Classify one line; blank lines yield `None`.
    pub fn classify(line: &str) -> Option<Self> {
        let line = line.trim_end();
        if line.trim().is_empty() {
            return None;
        }

        if let Some(diagnostic) = DiagnosticLine::parse(line) {
            return Some(Self::Diagnostic(diagnostic));
        }

        if let Some(caps) = SUMMARY_RE.captures(line) {
            let count = caps["count"].parse().unwrap_or(0);
            return Some(Self::Summary {
                line: line.to_string(),
                count,
            });
        }

        if line == ALL_PASSED {
            return Some(Self::Passed);
        }

        Some(Self::Other(line.to_string()))
    }
}

/// Output lines of one ruff run, in the order they were printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOutput {
    pub lines: Vec<OutputLine>,
}

impl ParsedOutput {
    pub fn diagnostics(&self) -> impl Iterator<Item = &DiagnosticLine> {
        self.lines.iter().filter_map(|line| match line {
            OutputLine::Diagnostic(d) => Some(d),
            _ => None,
        })
    }

    /// Error count from the summary line, if ruff printed one.
    pub fn error_count(&self) -> Option<usize> {
        self.lines.iter().find_map(|line| match line {
            OutputLine::Summary { count, .. } => Some(*count),
            _ => None,
        })
    }

    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics().next().is_some()
    }
}

pub fn parse_output(stdout: &str) -> ParsedOutput {
    ParsedOutput {
        lines: stdout.lines().filter_map(OutputLine::classify).collect(),
    }
}
