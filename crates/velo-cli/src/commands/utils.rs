//! Configuration loading shared by every command.

use std::path::{Path, PathBuf};

use velo_config::{presets, ConfigDiscovery, ConfigError, ResolvedConfig, VeloConfig};

use crate::cli::ConfigSource;
use crate::error::{CliError, Result};

/// A configuration loaded for one invocation, profile already applied.
#[derive(Debug)]
pub struct LoadedConfig {
    /// Canonical project root
    pub root: PathBuf,
    pub config: VeloConfig,
}

impl LoadedConfig {
    pub fn resolve(&self) -> ResolvedConfig {
        self.config.resolve(&self.root)
    }
}

/// Load the configuration selected by `source`.
///
/// A preset takes precedence over discovery. Without one, `velo.toml` and
/// then the `velo` field of `package.json` are read from the root.
///
/// # Errors
///
/// - `Io` if the root does not exist
/// - `ConfigNotFound` if there is neither a preset nor a config file
/// - `Config` for parse and profile merge failures
pub fn load_config(source: &ConfigSource) -> Result<LoadedConfig> {
    let root = canonical_root(&source.root)?;

    let config = match source.preset.as_deref() {
        Some(name) => {
            tracing::debug!("using preset '{}'", name);
            presets::by_name(name)
                .ok_or_else(|| CliError::InvalidArgument(format!("Unknown preset '{name}'")))?
        }
        None => match ConfigDiscovery::new(&root).load() {
            Ok(config) => config,
            Err(ConfigError::NotFound) => return Err(CliError::ConfigNotFound(root)),
            Err(err) => return Err(err.into()),
        },
    };

    let config = config.materialize_profile(source.profile.as_deref())?;
    Ok(LoadedConfig { root, config })
}

fn canonical_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize().map_err(|err| {
        CliError::InvalidArgument(format!("Cannot use {} as root: {}", root.display(), err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source(root: &Path) -> ConfigSource {
        ConfigSource {
            root: root.to_path_buf(),
            profile: None,
            preset: None,
        }
    }

    #[test]
    fn missing_config_is_reported_with_root() {
        let dir = TempDir::new().unwrap();
        match load_config(&source(dir.path())) {
            Err(CliError::ConfigNotFound(root)) => {
                assert_eq!(root, dir.path().canonicalize().unwrap());
            }
            other => panic!("expected ConfigNotFound, got {other:?}"),
        }
    }

    #[test]
    fn preset_skips_discovery() {
        let dir = TempDir::new().unwrap();
        let mut source = source(dir.path());
        source.preset = Some("react-three".into());

        let loaded = load_config(&source).unwrap();
        assert_eq!(loaded.config, presets::react_three());
        assert!(loaded.root.is_absolute());
    }

    #[test]
    fn profile_is_applied() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("velo.toml"),
            "[server]\nport = 3000\n\n[profiles.ci.server]\nport = 4000\n",
        )
        .unwrap();

        let mut source = source(dir.path());
        source.profile = Some("ci".into());
        let loaded = load_config(&source).unwrap();
        assert_eq!(loaded.config.server.port, 4000);
    }

    #[test]
    fn missing_root_is_an_argument_error() {
        let dir = TempDir::new().unwrap();
        let result = load_config(&source(&dir.path().join("nope")));
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}
