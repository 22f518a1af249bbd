//! Dev and preview server options.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerOptions {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_dev_port")]
    pub port: u16,

    /// Fail instead of falling back to the next free port
    #[serde(default)]
    pub strict_port: bool,

    /// Open the browser once the server is listening
    #[serde(default)]
    pub open: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_dev_port(),
            strict_port: false,
            open: false,
        }
    }
}

impl ServerOptions {
    /// The `(port, strict_port)` pair handed to the network layer.
    ///
    /// No range or availability check happens here; a busy or privileged
    /// port is rejected when the server binds.
    pub fn accepted(&self) -> (u16, bool) {
        (self.port, self.strict_port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewOptions {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_preview_port")]
    pub port: u16,

    #[serde(default)]
    pub strict_port: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_preview_port(),
            strict_port: false,
        }
    }
}

impl PreviewOptions {
    pub fn accepted(&self) -> (u16, bool) {
        (self.port, self.strict_port)
    }
}

fn default_host() -> String {
    "localhost".into()
}

fn default_dev_port() -> u16 {
    5173
}

fn default_preview_port() -> u16 {
    4173
}
