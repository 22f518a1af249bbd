//! Top-level configuration structure for Velo.
//!
//! This module provides the main `VeloConfig` struct and profile merging logic.
//! For file discovery, see the `discovery` module.

use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::alias::AliasMap;
use crate::build::BuildOptions;
use crate::deps::OptimizeDeps;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::plugin::PluginOptions;
use crate::resolved::ResolvedConfig;
use crate::server::{PreviewOptions, ServerOptions};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VeloConfig {
    #[serde(default)]
    pub plugins: Vec<PluginOptions>,

    #[serde(default)]
    pub resolve: ResolveOptions,

    #[serde(default)]
    pub build: BuildOptions,

    #[serde(default)]
    pub optimize_deps: OptimizeDeps,

    #[serde(default)]
    pub server: ServerOptions,

    #[serde(default)]
    pub preview: PreviewOptions,

    #[serde(default)]
    pub settings: GlobalSettings,

    #[serde(default)]
    pub profiles: IndexMap<String, ProfileConfig>,
}

/// Module resolution options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Path aliases (e.g., "@components" → "src/components"), relative
    /// targets are anchored to the project root
    #[serde(default)]
    pub alias: AliasMap,
}

/// Per-profile overrides, deep-merged over the base sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub resolve: Value,

    #[serde(default)]
    pub build: Value,

    #[serde(default)]
    pub optimize_deps: Value,

    #[serde(default)]
    pub server: Value,

    #[serde(default)]
    pub preview: Value,

    #[serde(default)]
    pub settings: Value,
}

impl VeloConfig {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use velo_config::VeloConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "server": { "port": 3000, "strict_port": true }
    /// });
    ///
    /// let config = VeloConfig::from_value(value).unwrap();
    /// assert_eq!(config.server.accepted(), (3000, true));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Anchor the configuration to `root` and freeze it for the build engine.
    ///
    /// `root` should be absolute; relative alias targets and `out_dir` are
    /// joined onto it.
    pub fn resolve(&self, root: &Path) -> ResolvedConfig {
        ResolvedConfig::new(self, root)
    }
}

impl VeloConfig {
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let Some(overrides) = self.profiles.get(name).cloned() else {
            tracing::warn!("profile '{}' is not defined, using base configuration", name);
            return Ok(self);
        };

        tracing::debug!("applying profile '{}'", name);
        merge_section(&mut self.resolve, &overrides.resolve)?;
        merge_section(&mut self.build, &overrides.build)?;
        merge_section(&mut self.optimize_deps, &overrides.optimize_deps)?;
        merge_section(&mut self.server, &overrides.server)?;
        merge_section(&mut self.preview, &overrides.preview)?;
        merge_section(&mut self.settings, &overrides.settings)?;

        Ok(self)
    }
}

fn merge_section<T>(section: &mut T, update: &Value) -> ConfigResult<()>
where
    T: Serialize + DeserializeOwned,
{
    if update.is_null() {
        return Ok(());
    }

    let mut base = serde_json::to_value(&*section).map_err(|err| {
        ConfigError::InvalidProfileOverride {
            message: err.to_string(),
        }
    })?;
    merge_values(&mut base, update);
    *section = serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    })?;

    Ok(())
}

pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Minifier;
    use serde_json::json;

    #[test]
    fn from_value_creates_config() {
        let value = json!({
            "resolve": { "alias": { "@": "./src" } },
            "build": { "minify": "terser" }
        });

        let config = VeloConfig::from_value(value).unwrap();
        assert_eq!(config.resolve.alias.get("@"), Some(Path::new("./src")));
        assert_eq!(config.build.minify, Minifier::Terser);
    }

    #[test]
    fn to_value_serializes_config() {
        let mut config = VeloConfig::default();
        config.server.port = 3000;

        let value = config.to_value().unwrap();
        assert_eq!(value["server"]["port"], json!(3000));
        assert_eq!(value["build"]["sourcemap"], json!(false));
    }

    #[test]
    fn profile_merging_works() {
        let value = json!({
            "build": { "minify": "esbuild", "sourcemap": true },
            "profiles": {
                "production": {
                    "build": { "minify": "terser", "sourcemap": false }
                }
            }
        });

        let config = VeloConfig::from_value(value)
            .unwrap()
            .materialize_profile(Some("production"))
            .unwrap();

        assert_eq!(config.build.minify, Minifier::Terser);
        assert!(!config.build.sourcemap.emits_files());
    }

    #[test]
    fn unknown_profile_keeps_base() {
        let config = VeloConfig::default();
        let materialized = config
            .clone()
            .materialize_profile(Some("staging"))
            .unwrap();
        assert_eq!(materialized, config);
    }

    #[test]
    fn invalid_override_is_reported() {
        let value = json!({
            "profiles": { "ci": { "server": { "port": "not-a-port" } } }
        });

        let result = VeloConfig::from_value(value)
            .unwrap()
            .materialize_profile(Some("ci"));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidProfileOverride { .. })
        ));
    }

    #[test]
    fn arrays_replace_instead_of_appending() {
        let mut target = json!({ "include": ["react", "three"] });
        merge_values(&mut target, &json!({ "include": ["vue"] }));
        assert_eq!(target, json!({ "include": ["vue"] }));
    }
}
