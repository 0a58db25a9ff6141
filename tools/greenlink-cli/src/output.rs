//! Output formatting for the CLI.

use console::style;
use greenlink_commerce::cart::{Notice, Severity};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        self.line(style("ℹ").blue().to_string(), msg, false);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        self.line(style("✓").green().to_string(), msg, false);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        self.line(style("⚠").yellow().to_string(), msg, true);
    }

    /// Print an error message. In JSON mode this is the only message that
    /// still goes out, as an `{"error": ...}` object on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.line(style("→").dim().to_string(), &style(msg).dim().to_string(), true);
        }
    }

    fn line(&self, marker: String, msg: &str, stderr: bool) {
        if self.json {
            return;
        }
        if stderr {
            eprintln!("{} {}", marker, msg);
        } else {
            println!("{} {}", marker, msg);
        }
    }

    /// Print a cart notice the way the page toast would read.
    pub fn notice(&self, notice: &Notice) {
        match notice.severity {
            Severity::Success => self.success(&notice.message),
            Severity::Error => self.error(&notice.message),
            Severity::Info => self.info(&notice.message),
        }
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Style a validity verdict.
pub fn verdict(valid: bool) -> String {
    if valid {
        style("valid").green().to_string()
    } else {
        style("invalid").red().to_string()
    }
}
