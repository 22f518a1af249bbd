//! Tests for configuration profiles and merging behavior.

use std::fs;

use tempfile::TempDir;
use velo_config::{ConfigDiscovery, Minifier, SourceMapOptions};

fn write_config(dir: &TempDir, body: &str) {
    fs::write(dir.path().join("velo.toml"), body).expect("write config");
}

#[test]
fn profile_overrides_build_options() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[build]
minify = "esbuild"
sourcemap = true

[profiles.production.build]
minify = "terser"
sourcemap = false
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("production")
        .expect("load with profile");

    assert_eq!(config.build.minify, Minifier::Terser);
    assert_eq!(config.build.sourcemap, SourceMapOptions::Disabled);
}

#[test]
fn profile_overrides_server() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[server]
host = "localhost"
port = 3000

[profiles.ci.server]
host = "0.0.0.0"
strict_port = true
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("ci")
        .expect("load with profile");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.accepted(), (3000, true));
}

#[test]
fn profile_merges_nested_objects() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[build.terser_options.compress]
drop_console = false
drop_debugger = true

[profiles.prod.build.terser_options.compress]
drop_console = true
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("prod")
        .expect("load with profile");

    let compress = &config.build.terser_options.compress;
    assert!(compress.drop_console);
    assert!(compress.drop_debugger); // preserved
}

#[test]
fn profile_adds_alias_without_dropping_others() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[resolve.alias]
"@" = "./src"

[profiles.storybook.resolve.alias]
"@mocks" = "./.storybook/mocks"
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("storybook")
        .expect("load with profile");

    let aliases: Vec<_> = config.resolve.alias.iter().map(|(alias, _)| alias).collect();
    assert_eq!(aliases, vec!["@", "@mocks"]);
}

#[test]
fn profile_replaces_arrays() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[optimize_deps]
include = ["react", "react-dom", "three"]

[profiles.lite.optimize_deps]
include = ["react"]
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("lite")
        .expect("load with profile");

    assert_eq!(config.optimize_deps.include, vec!["react"]);
}

#[test]
fn profile_not_found_uses_base_config() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[server]
port = 3000
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("nonexistent")
        .expect("load with profile");

    assert_eq!(config.server.port, 3000);
}

#[test]
fn profile_overrides_settings() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[settings]
log_level = "info"

[profiles.debug.settings]
log_level = "trace"
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("debug")
        .expect("load with profile");

    assert_eq!(config.settings.log_level.as_deref(), Some("trace"));
}
