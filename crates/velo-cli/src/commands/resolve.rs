//! Resolve command implementation.

use crate::cli::ConfigSource;
use crate::commands::utils;
use crate::error::Result;

/// Print the resolved configuration as pretty JSON on stdout.
pub fn execute(source: &ConfigSource) -> Result<()> {
    let loaded = utils::load_config(source)?;
    let resolved = loaded.resolve();
    println!("{}", resolved.to_json()?);
    Ok(())
}
