//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! and the one-shot and session runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod console_notifier;
pub mod logging;
pub mod presenter;
pub mod session;

// Re-export commonly used types
pub use app::{run_oneshot, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, RunOptions, SessionOptions};
pub use console_notifier::ConsoleNotifier;
pub use presenter::Presenter;
pub use session::{run_session, SessionCommand};
