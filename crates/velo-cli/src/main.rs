//! Velo CLI entry point.
//!
//! Parses arguments, sets up logging and colors, and dispatches to the
//! command implementations.

use clap::Parser;
use miette::Result;
use velo_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let color = logger::should_use_color(args.no_color);
    logger::init_logger(args.verbose, args.quiet, !color);
    ui::init_colors(color);

    let source = args.source();
    let result = match args.command {
        cli::Command::Resolve => commands::resolve_execute(&source),
        cli::Command::Alias(alias_args) => commands::alias_execute(&source, alias_args),
        cli::Command::Chunk(chunk_args) => commands::chunk_execute(&source, chunk_args),
        cli::Command::Check(check_args) => commands::check_execute(&source, check_args),
        cli::Command::Port(port_args) => commands::port_execute(&source, port_args),
        cli::Command::Report(report_args) => commands::report_execute(&source, report_args),
    };

    result.map_err(error::cli_error_to_miette)
}
