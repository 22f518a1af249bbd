//! File-based config discovery for CLI use
//!
//! Handles finding and loading Velo configuration files from the filesystem,
//! with `VELO_*` environment variables layered on top.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::Env;
use serde_json::Value;

use crate::config::{merge_values, VeloConfig};
use crate::error::{ConfigError, Result};

/// Name of the TOML config file.
pub const CONFIG_FILE: &str = "velo.toml";

/// Field holding the config inside `package.json`.
pub const PACKAGE_JSON_FIELD: &str = "velo";

/// Prefix of environment overrides, e.g. `VELO_SERVER__PORT=4000`.
pub const ENV_PREFIX: &str = "VELO_";

/// File-based configuration discovery
///
/// Searches for Velo configuration files in conventional locations and loads them.
/// This is primarily for CLI use - library users should use `VeloConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use velo_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: velo.toml
    /// 2. package.json (velo field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed = serde_json::from_str::<Value>(&content).ok()?;
        match parsed.get(PACKAGE_JSON_FIELD) {
            Some(field) if !field.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<VeloConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        tracing::debug!("loading config from {}", path.display());
        let value = self.read_value(&path)?;
        let value = with_env_overrides(value)?;
        VeloConfig::from_value(value)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<VeloConfig> {
        self.load()?.materialize_profile(Some(profile))
    }

    fn read_value(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return extract_package_field(&content);
        }

        let toml_val: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("Invalid TOML syntax: {}", e)),
            })?;

        serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("TOML to JSON conversion failed: {}", e)),
        })
    }
}

fn extract_package_field(content: &str) -> Result<Value> {
    let mut parsed: Value = serde_json::from_str(content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    match parsed.get_mut(PACKAGE_JSON_FIELD).map(Value::take) {
        Some(Value::Null) => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("The 'velo' field cannot be null".to_string()),
        }),
        Some(value) => Ok(value),
        None => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("Add a 'velo' field to your package.json".to_string()),
        }),
    }
}

/// Layer `VELO_<SECTION>__<FIELD>` variables over a parsed config value.
///
/// Only the environment goes through figment; the file value stays the base
/// so table order (and with it chunk group precedence) survives.
fn with_env_overrides(mut value: Value) -> Result<Value> {
    let overrides = Figment::from(Env::prefixed(ENV_PREFIX).split("__"))
        .extract::<Value>()
        .map_err(|e| ConfigError::InvalidValue {
            field: "environment".to_string(),
            hint: Some(e.to_string()),
        })?;

    if overrides.as_object().is_some_and(|map| !map.is_empty()) {
        tracing::debug!("applying {} environment overrides", ENV_PREFIX);
        merge_values(&mut value, &overrides);
    }
    Ok(value)
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use velo_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<VeloConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config with profile (convenience function)
///
/// # Example
///
/// ```no_run
/// use velo_config::discover_with_profile;
///
/// let config = discover_with_profile("production").unwrap();
/// ```
pub fn discover_with_profile(profile: &str) -> Result<VeloConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        assert!(discovery.find().is_none());
    }

    #[test]
    fn find_discovers_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("velo.toml");
        fs::write(
            &config_path,
            r#"
[server]
port = 3000
"#,
        )
        .unwrap();

        let discovery = ConfigDiscovery::new(dir.path());
        assert_eq!(discovery.find().unwrap(), config_path);
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let discovery = ConfigDiscovery::new(dir.path());
        let result = discovery.load();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "site" }"#).unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn extract_package_field_rejects_null() {
        let result = extract_package_field(r#"{ "velo": null }"#);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }
}
