//! Summarizer infrastructure module

mod http;

pub use http::{HttpSummarizer, FILE_FIELD, GENERIC_FAILURE};
