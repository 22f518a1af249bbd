//! The frozen configuration handed to the build engine.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::alias::{anchor, AliasMap, Resolution};
use crate::build::BuildOptions;
use crate::config::VeloConfig;
use crate::deps::OptimizeDeps;
use crate::error::{ConfigError, Result};
use crate::plugin::{CompressionOptions, PluginOptions};
use crate::server::{PreviewOptions, ServerOptions};
use crate::settings::GlobalSettings;

/// Fully-resolved configuration.
///
/// Alias targets and `build.out_dir` are absolute. Nothing is mutated after
/// construction, so one instance can be shared by every build worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub root: PathBuf,
    pub plugins: Vec<PluginOptions>,
    pub alias: AliasMap,
    pub build: BuildOptions,
    pub optimize_deps: OptimizeDeps,
    pub server: ServerOptions,
    pub preview: PreviewOptions,
    pub settings: GlobalSettings,
}

impl ResolvedConfig {
    pub(crate) fn new(config: &VeloConfig, root: &Path) -> Self {
        let mut build = config.build.clone();
        build.out_dir = anchor(root, &build.out_dir);

        let resolved = Self {
            root: root.to_path_buf(),
            plugins: config.plugins.clone(),
            alias: config.resolve.alias.anchored(root),
            build,
            optimize_deps: config.optimize_deps.clone(),
            server: config.server.clone(),
            preview: config.preview.clone(),
            settings: config.settings.clone(),
        };

        tracing::debug!(
            root = %resolved.root.display(),
            aliases = resolved.alias.len(),
            chunks = resolved.build.manual_chunks.len(),
            plugins = resolved.plugins.len(),
            "resolved configuration"
        );

        resolved
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Rewrite `specifier` through the alias map; unknown specifiers pass
    /// through untouched.
    pub fn resolve_alias<'a>(&'a self, specifier: &'a str) -> Resolution<'a> {
        self.alias.resolve(specifier)
    }

    /// Manual chunk owning `module`, if any.
    pub fn assign_chunk(&self, module: &str) -> Option<&str> {
        self.build.manual_chunks.assign(module)
    }

    /// Enabled compression plugins in declaration order.
    pub fn compression_plugins(&self) -> impl Iterator<Item = &CompressionOptions> {
        self.plugins
            .iter()
            .filter_map(PluginOptions::as_compression)
            .filter(|options| options.enabled)
    }

    /// Serialize for the build engine. Field and map order follow the
    /// declaration order, so equal configs produce identical bytes.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
