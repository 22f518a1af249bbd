use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Velo subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration as JSON
    ///
    /// Aliases and the output directory are anchored to the project root.
    /// The output is byte-identical across runs for the same input.
    Resolve,

    /// Resolve import specifiers through the alias map
    ///
    /// Specifiers that match no alias are printed unchanged.
    Alias(AliasArgs),

    /// Show which manual chunk each module is assigned to
    ///
    /// Modules outside every group print `(default)`.
    Chunk(ChunkArgs),

    /// Validate the configuration
    ///
    /// Checks alias and chunk declarations, compression plugin extensions
    /// and the chunk size limit.
    Check(CheckArgs),

    /// Bind the dev (or preview) server port
    ///
    /// With strict_port the configured port is bound or the command fails.
    /// Otherwise the next ports are tried. The port obtained is printed and
    /// released again.
    Port(PortArgs),

    /// Audit a build output directory against the configuration
    ///
    /// Reports asset sizes and fails on source maps emitted with sourcemap
    /// disabled, missing compressed variants and deleted originals.
    Report(ReportArgs),
}

/// Arguments for the alias command
#[derive(Args, Debug)]
pub struct AliasArgs {
    /// Import specifiers to resolve
    ///
    /// Examples:
    ///   velo alias @components/Button
    ///   velo alias @utils/math react
    #[arg(required = true, value_name = "SPECIFIER")]
    pub specifiers: Vec<String>,
}

/// Arguments for the chunk command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// Module specifiers or node_modules paths
    #[arg(required = true, value_name = "MODULE")]
    pub modules: Vec<String>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Also check that every alias target exists on disk
    #[arg(long)]
    pub fs: bool,
}

/// Arguments for the port command
#[derive(Args, Debug)]
pub struct PortArgs {
    /// Use the preview server options instead of the dev server
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Output directory to audit (default: build.out_dir)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}
