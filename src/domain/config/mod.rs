//! Configuration domain module

mod app_config;
mod endpoint;

pub use app_config::AppConfig;
pub use endpoint::{Endpoint, DEFAULT_BASE_URL, SUMMARY_PATH};
