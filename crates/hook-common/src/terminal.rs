//! Text output and progress reporting for hooks.

use owo_colors::OwoColorize;

/// Sink for the messages a hook reports.
pub trait Terminal {
    /// Plain informational line.
    fn out(&mut self, message: &str);
    /// A failure.
    fn error(&mut self, message: &str);
    /// A success.
    fn ok(&mut self, message: &str);
    /// Something worth attention that does not fail the hook.
    fn warning(&mut self, message: &str);
}

/// Progress collaborator driven once per processed file.
pub trait ReportProgress {
    fn init(&mut self, total: usize);
    fn update(&mut self);
}

/// Progress reporter that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ReportProgress for NoProgress {
    fn init(&mut self, _total: usize) {}
    fn update(&mut self) {}
}

/// Terminal writing to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleTerminal {
    color: bool,
}

impl ConsoleTerminal {
    pub fn new(color: bool) -> Self {
        Self {
            color: color && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Terminal for ConsoleTerminal {
    fn out(&mut self, message: &str) {
        println!("  {}", message);
    }

    fn error(&mut self, message: &str) {
        if self.color {
            println!("{} {}", "✖".red().bold(), message);
        } else {
            println!("✖ {}", message);
        }
    }

    fn ok(&mut self, message: &str) {
        if self.color {
            println!("{} {}", "✔".green().bold(), message);
        } else {
            println!("✔ {}", message);
        }
    }

    fn warning(&mut self, message: &str) {
        if self.color {
            println!("{} {}", "▲".yellow().bold(), message);
        } else {
            println!("▲ {}", message);
        }
    }
}

/// Progress reporter printing `[done/total]` to stderr.
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    fn line(&self) -> String {
        format!("[{}/{}]", self.done, self.total)
    }
}

impl ReportProgress for ConsoleProgress {
    fn init(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn update(&mut self) {
        self.done = (self.done + 1).min(self.total.max(1));
        eprintln!("{}", self.line());
    }
}
