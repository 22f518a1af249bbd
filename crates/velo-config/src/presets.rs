//! Built-in configurations.

use crate::alias::AliasMap;
use crate::build::{BuildOptions, EsTarget, Minifier, SourceMapOptions, TerserOptions};
use crate::config::{ResolveOptions, VeloConfig};
use crate::deps::{EsbuildOptions, OptimizeDeps};
use crate::plugin::{CompressionAlgorithm, CompressionOptions, PluginOptions, ReactPluginOptions};
use crate::server::{PreviewOptions, ServerOptions};

/// Size above which assets get `.gz` and `.br` variants.
pub const COMPRESSION_THRESHOLD: u64 = 10 * 1024;

/// React + three.js single page app.
///
/// Gzip and brotli variants for assets above 10 KiB with originals kept,
/// `@`-prefixed aliases into `./src`, terser with console and debugger
/// statements dropped, three vendor chunks, no source maps, and a strict
/// dev server on port 3000.
pub fn react_three() -> VeloConfig {
    let mut terser_options = TerserOptions::default();
    terser_options.compress.drop_console = true;
    terser_options.compress.drop_debugger = true;

    VeloConfig {
        plugins: vec![
            PluginOptions::React(ReactPluginOptions::default()),
            PluginOptions::Compression(
                CompressionOptions::new(CompressionAlgorithm::Gzip)
                    .with_ext(".gz")
                    .with_threshold(COMPRESSION_THRESHOLD),
            ),
            PluginOptions::Compression(
                CompressionOptions::new(CompressionAlgorithm::BrotliCompress)
                    .with_ext(".br")
                    .with_threshold(COMPRESSION_THRESHOLD),
            ),
        ],
        resolve: ResolveOptions {
            alias: AliasMap::new()
                .with("@", "./src")
                .with("@components", "./src/components")
                .with("@hooks", "./src/hooks")
                .with("@utils", "./src/utils")
                .with("@types", "./src/types"),
        },
        build: BuildOptions {
            target: EsTarget::ES2020,
            minify: Minifier::Terser,
            terser_options,
            chunk_size_warning_limit: 1000,
            report_compressed_size: true,
            sourcemap: SourceMapOptions::Disabled,
            ..BuildOptions::default()
        }
        .with_chunk("react-vendor", ["react", "react-dom"])
        .with_chunk(
            "three-vendor",
            ["three", "@react-three/fiber", "@react-three/drei"],
        )
        .with_chunk("motion-vendor", ["framer-motion"]),
        optimize_deps: OptimizeDeps {
            include: [
                "react",
                "react-dom",
                "three",
                "@react-three/fiber",
                "@react-three/drei",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            exclude: Vec::new(),
            esbuild_options: EsbuildOptions {
                target: Some(EsTarget::ES2020),
            },
        },
        server: ServerOptions {
            port: 3000,
            strict_port: true,
            ..ServerOptions::default()
        },
        preview: PreviewOptions {
            port: 4173,
            ..PreviewOptions::default()
        },
        ..VeloConfig::default()
    }
}

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &["react-three"];

/// Look up a preset by its CLI name.
pub fn by_name(name: &str) -> Option<VeloConfig> {
    match name {
        "react-three" => Some(react_three()),
        _ => None,
    }
}
