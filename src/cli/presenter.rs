//! CLI presenter for output formatting

use std::io::{self, Write};
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::job::{JobState, NotificationKind};
use crate::domain::upload::SelectedFile;

/// Spinner message while the service works
pub const PROCESSING_MESSAGE: &str = "Processando áudio com IA...";

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Create an idle spinner; it starts drawing once ticking is enabled
    pub fn spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .map(|s| s.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"))
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner
    }

    /// Start a spinner for the upload of the given file
    pub fn start_processing(spinner: &ProgressBar, file: &SelectedFile) {
        spinner.set_message(format!("{} {}", PROCESSING_MESSAGE, file.name().dimmed()));
        spinner.enable_steady_tick(Duration::from_millis(80));
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a notification to stderr
    pub fn notification(&self, kind: NotificationKind, title: &str, detail: &str) {
        match kind {
            NotificationKind::Success => eprintln!("{} {}", "✓".green(), title.bold()),
            NotificationKind::Error => eprintln!("{} {}", "✗".red(), title.bold()),
        }
        if !detail.is_empty() {
            eprintln!("  {}", detail);
        }
    }

    /// Show the selected file
    pub fn selected(&self, file: &SelectedFile) {
        eprintln!("{} {}", "♪".cyan(), file);
    }

    /// Output text to stdout (the rendered summary)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Output text to stdout without newline
    pub fn output_inline(&self, text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// One-line description of the job state
    pub fn format_status(&self, state: &JobState) -> String {
        let file = state
            .selected_file()
            .map(|f| f.to_string())
            .unwrap_or_else(|| "(nenhum arquivo)".to_string());
        let summary = if state.summary().is_some() {
            "resumo disponível"
        } else {
            "sem resumo"
        };
        format!("[{}] {} · {}", state.phase(), file, summary)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
