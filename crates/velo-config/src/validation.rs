//! Pluggable config validation strategies
//!
//! Resolution never fails; these validators are run separately by callers that
//! want configuration mistakes reported up front. Schema validation needs no
//! filesystem access, filesystem validation additionally checks alias targets.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::alias::anchor;
use crate::config::VeloConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &VeloConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use velo_config::{presets, ConfigValidator, SchemaValidator};
///
/// SchemaValidator.validate(&presets::react_three()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &VeloConfig) -> Result<()> {
        for (alias, target) in config.resolve.alias.iter() {
            if alias.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "alias names cannot be empty".to_string(),
                    hint: Some("Remove the empty key from 'resolve.alias'".to_string()),
                });
            }
            if target.as_os_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("alias '{alias}' has an empty target"),
                    hint: Some("Point the alias at a directory, e.g. \"./src\"".to_string()),
                });
            }
        }

        for (name, modules) in config.build.manual_chunks.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "chunk names cannot be empty".to_string(),
                    hint: Some("Name every group in 'build.manual_chunks'".to_string()),
                });
            }
            if modules.iter().any(|module| module.trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("chunk '{name}' lists an empty module specifier"),
                    hint: Some(format!("Remove empty strings from the '{name}' group")),
                });
            }
        }

        if let Some(overlap) = config.build.manual_chunks.overlaps().into_iter().next() {
            return Err(ConfigError::ChunkConflict {
                module: overlap.module,
                first: overlap.first,
                second: overlap.second,
            });
        }

        if config.build.chunk_size_warning_limit == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "build.chunk_size_warning_limit must be greater than zero".to_string(),
                hint: Some("The limit is expressed in kB, e.g. 500".to_string()),
            });
        }

        let mut exts: HashMap<&str, usize> = HashMap::new();
        for (idx, plugin) in config.plugins.iter().enumerate() {
            let Some(compression) = plugin.as_compression() else {
                continue;
            };

            let ext = compression.ext();
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::SchemaValidation {
                    message: format!("compression extension '{ext}' must start with '.'"),
                    hint: Some("Use an extension such as \".gz\" or \".br\"".to_string()),
                });
            }

            if !compression.enabled {
                continue;
            }
            if let Some(previous) = exts.insert(ext, idx) {
                return Err(ConfigError::SchemaValidation {
                    message: format!(
                        "compression plugins #{previous} and #{idx} both write '{ext}' files"
                    ),
                    hint: Some("Give each compression plugin its own 'ext'".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation, then checks that every alias target exists.
///
/// # Example
///
/// ```no_run
/// use velo_config::{presets, ConfigValidator, FsValidator};
///
/// FsValidator::new(".").validate(&presets::react_three()).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &VeloConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        for (alias, target) in config.resolve.alias.iter() {
            let path = anchor(&self.root, target);
            if !path.exists() {
                return Err(ConfigError::AliasTargetNotFound {
                    alias: alias.to_string(),
                    path,
                });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &VeloConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &VeloConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
