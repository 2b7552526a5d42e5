//! File loading infrastructure module

mod local;

pub use local::{LoadError, LocalFileLoader};
