//! Platform utilities.

pub mod paths;

pub use paths::{config_dir, default_config_file};
