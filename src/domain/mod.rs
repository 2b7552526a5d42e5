//! Domain layer - Core business logic
//!
//! Contains value objects, the job state machine, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod job;
pub mod upload;

// Re-export common types
pub use config::{AppConfig, Endpoint};
pub use error::*;
pub use job::{
    Effect, ErrorInfo, InvalidStateTransition, JobEvent, JobPhase, JobState, Notification,
    NotificationKind,
};
pub use upload::SelectedFile;
