//! Check command implementation.
//!
//! Validates configuration without building.

use velo_config::{ConfigValidator, FsValidator, SchemaValidator, VeloConfig};

use crate::cli::{CheckArgs, ConfigSource};
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the configuration and apply the profile
/// 2. Schema checks (aliases, chunk groups, compression plugins)
/// 3. Alias targets exist on disk (with `--fs`)
///
/// # Errors
///
/// Returns the first validation failure.
pub fn execute(source: &ConfigSource, args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");
    let loaded = utils::load_config(source)?;

    if args.fs {
        FsValidator::new(&loaded.root).validate(&loaded.config)?;
    } else {
        SchemaValidator.validate(&loaded.config)?;
    }

    let config = &loaded.config;
    ui::success(&format!(
        "Configuration is valid ({} aliases, {} chunk groups, {} plugins)",
        config.resolve.alias.len(),
        config.build.manual_chunks.len(),
        config.plugins.len()
    ));

    for line in summary(config) {
        ui::info(&line);
    }

    Ok(())
}

/// Human-readable facts about what a build with `config` will do.
fn summary(config: &VeloConfig) -> Vec<String> {
    let mut lines = Vec::new();

    if !config.plugins.is_empty() {
        let names: Vec<_> = config.plugins.iter().map(|plugin| plugin.name()).collect();
        lines.push(format!("Plugins: {}", names.join(", ")));
    }

    if config.build.minify.is_enabled() {
        let stripped = config.build.stripped_statements();
        if stripped.is_empty() {
            lines.push(format!("Minifier: {:?}", config.build.minify));
        } else {
            lines.push(format!(
                "Minifier: {:?}, drops {}",
                config.build.minify,
                stripped.join(", ")
            ));
        }
    } else {
        lines.push("Minification disabled".to_string());
    }

    let forced: Vec<_> = config
        .optimize_deps
        .include
        .iter()
        .filter(|dep| config.optimize_deps.forces(dep))
        .map(String::as_str)
        .collect();
    if !forced.is_empty() {
        lines.push(format!("Pre-bundled dependencies: {}", forced.join(", ")));
    }

    lines
}
