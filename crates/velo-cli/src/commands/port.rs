//! Port command implementation.

use crate::cli::{ConfigSource, PortArgs};
use crate::commands::utils;
use crate::error::Result;
use crate::server::{self, ListenSpec};
use crate::ui;

/// Bind the configured port, print the one obtained and release it.
///
/// # Errors
///
/// `PortInUse` with strict_port, `NoAvailablePort` when the fallback range
/// is exhausted.
pub fn execute(source: &ConfigSource, args: PortArgs) -> Result<()> {
    let config = utils::load_config(source)?.config;
    let spec = if args.preview {
        ListenSpec::from(&config.preview)
    } else {
        ListenSpec::from(&config.server)
    };

    let listener = server::bind(&spec)?;
    let addr = listener.local_addr()?;
    drop(listener);

    if addr.port() != spec.port {
        ui::warning(&format!(
            "Port {} is in use, {} is available",
            spec.port,
            addr.port()
        ));
    }
    println!("{}", addr.port());
    Ok(())
}
