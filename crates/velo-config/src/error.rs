//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", hint_suffix(.hint))]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}{}", hint_suffix(.hint))]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("module '{module}' is assigned to both '{first}' and '{second}' chunks")]
    ChunkConflict {
        module: String,
        first: String,
        second: String,
    },

    // Filesystem validation errors (for CLI use)
    #[error("alias '{alias}' points to a missing path: {}", .path.display())]
    AliasTargetNotFound { alias: String, path: PathBuf },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(" ({hint})"),
        None => String::new(),
    }
}
