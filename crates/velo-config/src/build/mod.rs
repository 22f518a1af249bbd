//! Production build options handed to the bundling engine.

mod chunks;
mod helpers;
mod terser;
mod types;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use chunks::{installed_package, ChunkGroups, ChunkOverlap};
pub use terser::{TerserCompress, TerserOptions};
pub use types::{EsTarget, Minifier, SourceMapOptions};

pub(crate) use helpers::default_true;
use helpers::{default_assets_dir, default_chunk_size_warning_limit, default_out_dir};

/// Main build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Target ECMAScript version
    #[serde(default)]
    pub target: EsTarget,

    /// Minifier selection
    #[serde(default)]
    pub minify: Minifier,

    /// Only consulted when `minify` is `terser`
    #[serde(default)]
    pub terser_options: TerserOptions,

    /// Named vendor chunks
    #[serde(default)]
    pub manual_chunks: ChunkGroups,

    /// Chunk size (kB) above which the engine warns
    #[serde(default = "default_chunk_size_warning_limit")]
    pub chunk_size_warning_limit: u64,

    /// Report gzip sizes of emitted assets
    #[serde(default = "default_true")]
    pub report_compressed_size: bool,

    /// Source map generation
    #[serde(default)]
    pub sourcemap: SourceMapOptions,

    /// Output directory for generated chunks
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Directory (relative to `out_dir`) for hashed assets
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

impl BuildOptions {
    /// Create from serde_json::Value (for programmatic config from DB/API)
    ///
    /// # Example
    ///
    /// ```
    /// use velo_config::{BuildOptions, Minifier};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "target": "es2020",
    ///     "minify": "terser",
    ///     "manual_chunks": { "react-vendor": ["react", "react-dom"] }
    /// });
    ///
    /// let options = BuildOptions::from_value(value).unwrap();
    /// assert_eq!(options.minify, Minifier::Terser);
    /// assert_eq!(options.manual_chunks.assign("react"), Some("react-vendor"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, crate::error::ConfigError> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Add a manual chunk group
    ///
    /// # Example
    /// ```
    /// use velo_config::BuildOptions;
    ///
    /// let options = BuildOptions::default()
    ///     .with_chunk("react-vendor", ["react", "react-dom"])
    ///     .with_chunk("motion-vendor", ["framer-motion"]);
    /// assert_eq!(options.manual_chunks.len(), 2);
    /// ```
    pub fn with_chunk<I, S>(mut self, name: impl Into<String>, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manual_chunks = std::mem::take(&mut self.manual_chunks).with_group(name, modules);
        self
    }

    /// Statements the minifier strips from production output.
    ///
    /// Only terser honours the drop flags; other minifiers strip nothing.
    pub fn stripped_statements(&self) -> Vec<&str> {
        match self.minify {
            Minifier::Terser => self.terser_options.compress.stripped_statements(),
            Minifier::Esbuild | Minifier::None => Vec::new(),
        }
    }

    /// Whether a chunk of `bytes` exceeds the warning limit.
    pub fn exceeds_chunk_warning(&self, bytes: u64) -> bool {
        bytes > self.chunk_size_warning_limit.saturating_mul(1024)
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            target: EsTarget::default(),
            minify: Minifier::default(),
            terser_options: TerserOptions::default(),
            manual_chunks: ChunkGroups::default(),
            chunk_size_warning_limit: 500,
            report_compressed_size: true,
            sourcemap: SourceMapOptions::default(),
            out_dir: PathBuf::from("dist"),
            assets_dir: "assets".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chunk_warning_limit_is_in_kilobytes() {
        let options = BuildOptions {
            chunk_size_warning_limit: 1000,
            ..BuildOptions::default()
        };
        assert!(!options.exceeds_chunk_warning(1000 * 1024));
        assert!(options.exceeds_chunk_warning(1000 * 1024 + 1));
    }

    #[test]
    fn drop_flags_only_apply_to_terser() {
        let mut options = BuildOptions::from_value(json!({
            "minify": "esbuild",
            "terser_options": { "compress": { "drop_console": true } }
        }))
        .unwrap();
        assert!(options.stripped_statements().is_empty());

        options.minify = Minifier::Terser;
        assert_eq!(options.stripped_statements(), vec!["console"]);
    }

    #[test]
    fn from_value_reports_field() {
        let err = BuildOptions::from_value(json!({ "target": "es1999" })).unwrap_err();
        assert!(err.to_string().contains("build"));
    }
}
