//! Application layer - Use cases and port interfaces
//!
//! Contains the session controller, the selection rules, the result
//! presenter and the trait definitions for external system interactions.

pub mod file_selector;
pub mod job_controller;
pub mod ports;
pub mod result_presenter;

// Re-export use cases
pub use file_selector::FileSelector;
pub use job_controller::{GenerateCallbacks, GenerateOutcome, JobController};
pub use result_presenter::{ResultPresenter, SUMMARY_HEADER};
