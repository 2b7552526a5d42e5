//! Upload domain module

pub mod media_type;
mod selected_file;

pub use selected_file::SelectedFile;
