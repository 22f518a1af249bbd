//! Port selection for the dev and preview servers.
//!
//! With `strict_port` the configured port is bound or the call fails.
//! Otherwise the next ports are tried in order, up to [`FALLBACK_RANGE`] past
//! the configured one.

use std::net::{TcpListener, ToSocketAddrs};

use velo_config::{PreviewOptions, ServerOptions};

use crate::error::{CliError, Result};

/// How many ports past the configured one are tried without `strict_port`.
pub const FALLBACK_RANGE: u16 = 10;

/// Address a server is asked to listen on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenSpec {
    pub host: String,
    pub port: u16,
    pub strict_port: bool,
}

impl From<&ServerOptions> for ListenSpec {
    fn from(options: &ServerOptions) -> Self {
        let (port, strict_port) = options.accepted();
        Self {
            host: options.host.clone(),
            port,
            strict_port,
        }
    }
}

impl From<&PreviewOptions> for ListenSpec {
    fn from(options: &PreviewOptions) -> Self {
        let (port, strict_port) = options.accepted();
        Self {
            host: options.host.clone(),
            port,
            strict_port,
        }
    }
}

/// Bind a listener according to `spec`.
///
/// # Errors
///
/// - `PortInUse` when `strict_port` is set and the port is taken
/// - `NoAvailablePort` when the whole fallback range is taken
/// - `Io` for any other bind failure (bad host, permission denied)
pub fn bind(spec: &ListenSpec) -> Result<TcpListener> {
    if spec.port < 1024 && spec.port != 0 {
        tracing::warn!(
            "Port {} is in privileged range, may require root access",
            spec.port
        );
    }

    match try_bind(&spec.host, spec.port)? {
        Some(listener) => return Ok(listener),
        None if spec.strict_port => {
            return Err(CliError::PortInUse {
                host: spec.host.clone(),
                port: spec.port,
            });
        }
        None => {}
    }

    let last = spec.port.saturating_add(FALLBACK_RANGE);
    for port in spec.port.saturating_add(1)..=last {
        if let Some(listener) = try_bind(&spec.host, port)? {
            tracing::warn!("Port {} is busy, using port {} instead", spec.port, port);
            return Ok(listener);
        }
    }

    Err(CliError::NoAvailablePort {
        host: spec.host.clone(),
        first: spec.port,
        last,
    })
}

/// `Ok(None)` means the port is taken; every other failure is an error.
///
/// Only the first address `host` resolves to is used, so two servers
/// configured with the same host compete for the same socket.
fn try_bind(host: &str, port: u16) -> Result<Option<TcpListener>> {
    let addr = (host, port).to_socket_addrs()?.next().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::AddrNotAvailable,
            format!("{host} does not resolve to any address"),
        )
    })?;

    match TcpListener::bind(addr) {
        Ok(listener) => Ok(Some(listener)),
        Err(err) if err.kind() == std::io::ErrorKind::AddrInUse => {
            tracing::debug!("{} is in use", addr);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
