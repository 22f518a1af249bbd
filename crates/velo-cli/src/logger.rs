//! Logging infrastructure for the Velo CLI.
//!
//! Sets up `tracing` with verbosity flags, color control and `RUST_LOG`
//! overrides.
//!
//! # Example
//!
//! ```rust,no_run
//! use velo_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Resolving configuration");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified options.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: DEBUG for velo crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for velo crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("velo_cli=debug,velo_config=debug")
    } else if quiet {
        EnvFilter::new("velo_cli=error,velo_config=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("velo_cli=info,velo_config=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false) // keep output clean
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Check if colored output should be enabled.
///
/// Respects `--no-color`, `NO_COLOR` and whether stderr is a terminal.
pub fn should_use_color(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::user_attended_stderr()
}
