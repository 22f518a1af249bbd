//! Chunk command implementation.

use crate::cli::{ChunkArgs, ConfigSource};
use crate::commands::utils;
use crate::error::Result;

/// Label printed for modules outside every manual chunk.
pub const DEFAULT_CHUNK: &str = "(default)";

/// Print one `module -> chunk` line per module.
pub fn execute(source: &ConfigSource, args: ChunkArgs) -> Result<()> {
    let resolved = utils::load_config(source)?.resolve();
    for module in &args.modules {
        let chunk = resolved.assign_chunk(module).unwrap_or(DEFAULT_CHUNK);
        println!("{} -> {}", module, chunk);
    }
    Ok(())
}
