//! Plugin declarations.
//!
//! Plugins are executed by the build engine; this crate only carries their
//! options and the rules the engine applies with them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::build::default_true;

/// A configured plugin, tagged by `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum PluginOptions {
    /// JSX transform with fast refresh for React projects
    React(ReactPluginOptions),
    /// Emit pre-compressed variants of emitted assets
    Compression(CompressionOptions),
}

impl PluginOptions {
    pub fn name(&self) -> &'static str {
        match self {
            PluginOptions::React(_) => "react",
            PluginOptions::Compression(_) => "compression",
        }
    }

    pub fn as_compression(&self) -> Option<&CompressionOptions> {
        match self {
            PluginOptions::Compression(options) => Some(options),
            PluginOptions::React(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactPluginOptions {
    #[serde(default = "default_true")]
    pub fast_refresh: bool,

    /// Import source for the automatic JSX runtime (e.g. "@emotion/react")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx_import_source: Option<String>,
}

impl Default for ReactPluginOptions {
    fn default() -> Self {
        Self {
            fast_refresh: true,
            jsx_import_source: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionAlgorithm {
    #[default]
    Gzip,
    BrotliCompress,
    Deflate,
    DeflateRaw,
}

impl CompressionAlgorithm {
    pub fn default_ext(self) -> &'static str {
        match self {
            CompressionAlgorithm::BrotliCompress => ".br",
            CompressionAlgorithm::Gzip
            | CompressionAlgorithm::Deflate
            | CompressionAlgorithm::DeflateRaw => ".gz",
        }
    }
}

/// Compression plugin options.
///
/// `ext` may be omitted, in which case the algorithm's conventional
/// extension is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionOptions {
    #[serde(default)]
    pub algorithm: CompressionAlgorithm,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,

    /// Size in bytes an asset must exceed to get a compressed variant
    #[serde(default = "default_threshold")]
    pub threshold: u64,

    /// Extensions (without the dot, case-insensitive) of assets to compress
    #[serde(default = "default_filter")]
    pub filter: Vec<String>,

    /// Remove the uncompressed original after compressing
    #[serde(default)]
    pub delete_origin_file: bool,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            algorithm: CompressionAlgorithm::Gzip,
            ext: None,
            threshold: default_threshold(),
            filter: default_filter(),
            delete_origin_file: false,
            enabled: true,
        }
    }
}

impl CompressionOptions {
    pub fn new(algorithm: CompressionAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Effective file extension for compressed variants.
    pub fn ext(&self) -> &str {
        self.ext
            .as_deref()
            .unwrap_or_else(|| self.algorithm.default_ext())
    }

    /// Whether `asset` has an extension listed in `filter`.
    pub fn compresses(&self, asset: &Path) -> bool {
        asset
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.filter
                    .iter()
                    .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }

    /// Whether `asset`, `size` bytes long, gets a compressed variant.
    pub fn applies_to(&self, asset: &Path, size: u64) -> bool {
        self.enabled && size > self.threshold && self.compresses(asset)
    }

    /// Path of the compressed variant for `asset`.
    ///
    /// ```
    /// use velo_config::{CompressionAlgorithm, CompressionOptions};
    /// use std::path::Path;
    ///
    /// let brotli = CompressionOptions::new(CompressionAlgorithm::BrotliCompress);
    /// assert_eq!(
    ///     brotli.variant_path(Path::new("dist/assets/index.js")),
    ///     Path::new("dist/assets/index.js.br")
    /// );
    /// ```
    pub fn variant_path(&self, asset: &Path) -> PathBuf {
        let mut name = asset.as_os_str().to_os_string();
        name.push(self.ext());
        PathBuf::from(name)
    }

    /// Asset a file ending in `ext` would be the variant of.
    pub fn original_of(&self, path: &Path) -> Option<PathBuf> {
        let original = path.to_str()?.strip_suffix(self.ext())?;
        if original.is_empty() || original.ends_with('/') {
            return None;
        }
        Some(PathBuf::from(original))
    }

    /// Whether `path` looks like a variant produced by this plugin.
    ///
    /// The original must be something the plugin compresses, so a shipped
    /// `data.tar.gz` is not mistaken for a variant of `data.tar`.
    pub fn is_variant(&self, path: &Path) -> bool {
        self.original_of(path)
            .is_some_and(|original| self.compresses(&original))
    }
}

fn default_threshold() -> u64 {
    1025
}

fn default_filter() -> Vec<String> {
    ["js", "mjs", "json", "css", "html"]
        .into_iter()
        .map(String::from)
        .collect()
}
