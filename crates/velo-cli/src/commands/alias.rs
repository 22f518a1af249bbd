//! Alias command implementation.

use velo_config::{Resolution, ResolvedConfig};

use crate::cli::{AliasArgs, ConfigSource};
use crate::commands::utils;
use crate::error::Result;

/// Print one `specifier -> target` line per specifier.
pub fn execute(source: &ConfigSource, args: AliasArgs) -> Result<()> {
    let resolved = utils::load_config(source)?.resolve();
    for specifier in &args.specifiers {
        println!("{}", describe(&resolved, specifier));
    }
    Ok(())
}

fn describe(resolved: &ResolvedConfig, specifier: &str) -> String {
    match resolved.resolve_alias(specifier) {
        Resolution::Aliased { alias, path } => {
            tracing::debug!("{} matched alias '{}'", specifier, alias);
            format!("{} -> {}", specifier, path.display())
        }
        Resolution::Passthrough(unchanged) => format!("{} -> {} (unresolved)", specifier, unchanged),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use velo_config::presets;

    #[test]
    fn describes_aliased_and_passthrough() {
        let resolved = presets::react_three().resolve(Path::new("/app"));
        assert_eq!(
            describe(&resolved, "@hooks/useThree"),
            "@hooks/useThree -> /app/src/hooks/useThree"
        );
        assert_eq!(describe(&resolved, "three"), "three -> three (unresolved)");
    }
}
