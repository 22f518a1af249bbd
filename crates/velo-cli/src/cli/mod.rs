//! Command-line interface definition for Velo.
//!
//! # Command Structure
//!
//! - `velo resolve` - print the resolved configuration as JSON
//! - `velo alias` - resolve import specifiers through the alias map
//! - `velo chunk` - show which manual chunk a module lands in
//! - `velo check` - validate the configuration
//! - `velo port` - bind the dev or preview port
//! - `velo report` - audit a build output directory

mod commands;
mod tests;
mod validation;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{AliasArgs, CheckArgs, ChunkArgs, Command, PortArgs, ReportArgs};
pub use validation::parse_preset;

/// Velo - front-end build configuration resolver
#[derive(Parser, Debug)]
#[command(
    name = "velo",
    version,
    about = "Resolve, inspect and audit front-end build configuration",
    long_about = "Velo loads velo.toml (or the \"velo\" field of package.json), applies\n\
                  VELO_* environment overrides and an optional profile, and resolves\n\
                  the result into the configuration a bundler consumes."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. `NO_COLOR` has the same
    /// effect.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root containing velo.toml or package.json
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Profile to merge over the base configuration
    #[arg(short, long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    /// Use a built-in configuration instead of discovering one
    ///
    /// Available presets: react-three
    #[arg(long, global = true, value_name = "NAME", value_parser = parse_preset)]
    pub preset: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that loads a configuration.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub root: PathBuf,
    pub profile: Option<String>,
    pub preset: Option<String>,
}

impl Cli {
    pub fn source(&self) -> ConfigSource {
        ConfigSource {
            root: self.root.clone(),
            profile: self.profile.clone(),
            preset: self.preset.clone(),
        }
    }
}
