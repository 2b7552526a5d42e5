//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the summarization service, the clipboard,
//! the desktop notification daemon and the filesystem.

pub mod clipboard;
pub mod config;
pub mod file;
pub mod notification;
pub mod summarizer;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use file::{LoadError, LocalFileLoader};
pub use notification::NotifyRustNotifier;
pub use summarizer::HttpSummarizer;
