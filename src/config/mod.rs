//! Configuration module

mod content;

pub use content::{ContentConfig, InvalidPostPolicy, CONFIG_FILE};
