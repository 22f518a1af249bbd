//! Error handling for the Velo CLI.
//!
//! `CliError` wraps the configuration crate's errors and adds the failures
//! that only exist at the command line: port binding and output audits.
//! `main` turns it into a miette report.

use std::path::PathBuf;

use thiserror::Error;
use velo_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No configuration file and no preset selected
    #[error("No velo.toml or package.json \"velo\" field found in {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Strict port requested and the port is taken
    #[error("Port {port} is already in use on {host}")]
    PortInUse { host: String, port: u16 },

    /// Every port in the fallback range is taken
    #[error("Ports {first}-{last} are all in use on {host}")]
    NoAvailablePort { host: String, first: u16, last: u16 },

    /// Build output does not match the configuration
    #[error("Output audit found {0} problem(s)")]
    AuditFailed(usize),

    /// I/O errors from file system or socket operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Actionable hint shown below the error, when one exists.
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::ConfigNotFound(_) => Some(
                "Create a velo.toml, add a \"velo\" field to package.json, or pass --preset"
                    .to_string(),
            ),
            CliError::PortInUse { .. } => Some(
                "Stop the other server or set server.strict_port = false to fall back".to_string(),
            ),
            CliError::Config(ConfigError::ChunkConflict { module, .. }) => Some(format!(
                "List '{module}' in a single group of build.manual_chunks"
            )),
            CliError::Config(ConfigError::AliasTargetNotFound { alias, .. }) => Some(format!(
                "Create the directory or update resolve.alias.\"{alias}\""
            )),
            _ => None,
        }
    }
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}

/// Type alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_in_use_has_hint() {
        let err = CliError::PortInUse {
            host: "127.0.0.1".into(),
            port: 3000,
        };
        assert_eq!(err.to_string(), "Port 3000 is already in use on 127.0.0.1");
        assert!(err.hint().unwrap().contains("strict_port"));
    }

    #[test]
    fn config_errors_convert() {
        let err: CliError = ConfigError::NotFound.into();
        assert!(matches!(err, CliError::Config(ConfigError::NotFound)));
    }

    #[test]
    fn chunk_conflict_hint_names_module() {
        let err: CliError = ConfigError::ChunkConflict {
            module: "three".into(),
            first: "a".into(),
            second: "b".into(),
        }
        .into();
        assert!(err.hint().unwrap().contains("three"));
    }
}
