//! Tests for default values and edge cases.

use std::path::PathBuf;

use velo_config::{
    BuildOptions, CompressionAlgorithm, CompressionOptions, EsTarget, GlobalSettings, Minifier,
    OptimizeDeps, PreviewOptions, ServerOptions, SourceMapOptions, TerserOptions, VeloConfig,
};

#[test]
fn velo_config_defaults() {
    let config = VeloConfig::default();
    assert!(config.plugins.is_empty());
    assert!(config.resolve.alias.is_empty());
    assert!(config.profiles.is_empty());
    assert_eq!(config.build.out_dir, PathBuf::from("dist"));
}

#[test]
fn build_options_defaults() {
    let opts = BuildOptions::default();
    assert_eq!(opts.target, EsTarget::ES2020);
    assert_eq!(opts.minify, Minifier::Esbuild);
    assert!(opts.manual_chunks.is_empty());
    assert_eq!(opts.chunk_size_warning_limit, 500);
    assert!(opts.report_compressed_size);
    assert_eq!(opts.sourcemap, SourceMapOptions::Disabled);
    assert_eq!(opts.assets_dir, "assets");
}

#[test]
fn terser_defaults_keep_diagnostics() {
    let terser = TerserOptions::default();
    assert!(!terser.compress.drop_console);
    assert!(!terser.compress.drop_debugger);
    assert_eq!(terser.compress.passes, 1);
    assert!(terser.mangle);
}

#[test]
fn server_defaults() {
    let server = ServerOptions::default();
    assert_eq!(server.host, "localhost");
    assert_eq!(server.accepted(), (5173, false));
    assert!(!server.open);

    let preview = PreviewOptions::default();
    assert_eq!(preview.accepted(), (4173, false));
}

#[test]
fn compression_defaults() {
    let gzip = CompressionOptions::default();
    assert_eq!(gzip.algorithm, CompressionAlgorithm::Gzip);
    assert_eq!(gzip.ext(), ".gz");
    assert_eq!(gzip.threshold, 1025);
    assert!(!gzip.delete_origin_file);
    assert!(gzip.enabled);
    assert_eq!(gzip.filter, vec!["js", "mjs", "json", "css", "html"]);
}

#[test]
fn optimize_deps_defaults() {
    let deps = OptimizeDeps::default();
    assert!(deps.include.is_empty());
    assert!(deps.exclude.is_empty());
    assert!(deps.esbuild_options.target.is_none());
}

#[test]
fn global_settings_defaults() {
    let settings = GlobalSettings::default();
    assert!(settings.log_level.is_none());
    assert!(settings.log_format.is_none());
    assert!(settings.environment.is_empty());
}

#[test]
fn empty_document_uses_serde_defaults() {
    let config = VeloConfig::from_value(serde_json::json!({})).unwrap();
    assert_eq!(config, VeloConfig::default());
}

#[test]
fn partial_sections_fill_remaining_defaults() {
    let config = VeloConfig::from_value(serde_json::json!({
        "server": { "strict_port": true },
        "build": { "chunk_size_warning_limit": 1000 }
    }))
    .unwrap();

    assert_eq!(config.server.accepted(), (5173, true));
    assert_eq!(config.build.chunk_size_warning_limit, 1000);
    assert!(config.build.report_compressed_size);
}
