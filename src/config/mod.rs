//! Configuration module for gender-decoder
//!
//! This module handles:
//! - Coded word stem lists (built-in defaults, overridable)
//! - Project-level configuration (gender-decoder.toml)
//! - CLI defaults

mod project_config;
mod word_lists;

pub use project_config::{
    discover_config,
    load_config_file,
    AnalysisSection,
    CliDefaults,
    ProjectConfig,
    CONFIG_FILE_NAME,
    JSON_CONFIG_FILE_NAME,
};
pub use word_lists::WordLists;
