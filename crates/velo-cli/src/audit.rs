//! Build output audit.
//!
//! Compares what the build engine wrote to the output directory with what the
//! resolved configuration asked for: compressed variants next to every asset
//! a compression plugin filters in and that is over its threshold, originals
//! kept unless the plugin deletes them, and no `.map` files when source maps
//! are disabled.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use velo_config::ResolvedConfig;
use walkdir::WalkDir;

use crate::error::Result;

/// Extensions whose gzip size is reported.
const TEXT_EXTENSIONS: &[&str] = &["js", "mjs", "css", "html", "json", "svg"];

/// Extensions subject to the chunk size warning.
const CHUNK_EXTENSIONS: &[&str] = &["js", "mjs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Path relative to the output directory
    pub path: PathBuf,
    pub size: u64,
    pub gzip_size: Option<u64>,
    /// Larger than `build.chunk_size_warning_limit`
    pub oversized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A `.map` file exists although source maps are disabled
    SourceMapEmitted(PathBuf),
    /// An asset over the threshold has no compressed variant
    MissingVariant { asset: PathBuf, variant: PathBuf },
    /// A variant exists without its original while originals are kept
    OriginalDeleted { variant: PathBuf },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::SourceMapEmitted(path) => {
                write!(f, "source map {} emitted with sourcemap disabled", path.display())
            }
            Violation::MissingVariant { asset, variant } => write!(
                f,
                "{} is missing its compressed variant {}",
                asset.display(),
                variant.display()
            ),
            Violation::OriginalDeleted { variant } => write!(
                f,
                "{} has no uncompressed original next to it",
                variant.display()
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub assets: Vec<AssetEntry>,
    pub variants: Vec<PathBuf>,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn oversized(&self) -> impl Iterator<Item = &AssetEntry> {
        self.assets.iter().filter(|asset| asset.oversized)
    }
}

/// Audit `out_dir` against `config`.
pub fn audit(out_dir: &Path, config: &ResolvedConfig) -> Result<AuditReport> {
    let compression: Vec<_> = config.compression_plugins().collect();

    let mut files = BTreeSet::new();
    for entry in WalkDir::new(out_dir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() {
            let relative = entry
                .path()
                .strip_prefix(out_dir)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.insert(relative);
        }
    }
    tracing::debug!("auditing {} files in {}", files.len(), out_dir.display());

    let mut report = AuditReport::default();

    for relative in &files {
        let variant_of = compression.iter().find_map(|plugin| {
            plugin
                .original_of(relative)
                .filter(|original| files.contains(original) || plugin.compresses(original))
                .map(|original| (plugin, original))
        });
        if let Some((plugin, original)) = variant_of {
            report.variants.push(relative.clone());
            if !plugin.delete_origin_file && !files.contains(&original) {
                report.violations.push(Violation::OriginalDeleted {
                    variant: relative.clone(),
                });
            }
            continue;
        }

        let full = out_dir.join(relative);
        let size = fs::metadata(&full)?.len();

        if has_extension(relative, &["map"]) && !config.build.sourcemap.emits_files() {
            report
                .violations
                .push(Violation::SourceMapEmitted(relative.clone()));
        }

        for plugin in &compression {
            if !plugin.applies_to(relative, size) {
                continue;
            }
            let variant = plugin.variant_path(relative);
            if !files.contains(&variant) {
                report.violations.push(Violation::MissingVariant {
                    asset: relative.clone(),
                    variant,
                });
            }
        }

        let gzip_size = if config.build.report_compressed_size
            && has_extension(relative, TEXT_EXTENSIONS)
        {
            Some(gzip_size(&fs::read(&full)?)?)
        } else {
            None
        };

        report.assets.push(AssetEntry {
            path: relative.clone(),
            size,
            gzip_size,
            oversized: has_extension(relative, CHUNK_EXTENSIONS)
                && config.build.exceeds_chunk_warning(size),
        });
    }

    Ok(report)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}

fn gzip_size(bytes: &[u8]) -> std::io::Result<u64> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?.len() as u64)
}
