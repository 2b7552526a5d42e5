//! Mestre IA - lecture recording summarizer client
//!
//! This crate lets a student pick a class recording, send it to the
//! summarization service, and read or copy the returned summary.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Selected file, job state machine, notifications, configuration
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP service, clipboard, desktop notifications, config file)
//! - **CLI**: Command-line interface, one-shot and interactive session runners

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
