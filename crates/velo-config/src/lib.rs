//! Declarative build configuration for front-end projects.
//!
//! A [`VeloConfig`] is loaded from `velo.toml`, the `velo` field of
//! `package.json`, a JSON value or a [`presets`] function, then frozen into a
//! [`ResolvedConfig`] that the build engine consumes.

pub mod alias;
pub mod build;
pub mod config;
pub mod deps;
pub mod discovery;
pub mod error;
pub mod plugin;
pub mod presets;
pub mod resolved;
pub mod server;
pub mod settings;
pub mod validation;

// Re-export main types
pub use alias::*;
pub use build::*;
pub use config::*;
pub use deps::*;
pub use error::*;
pub use plugin::*;
pub use resolved::*;
pub use server::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{discover, discover_with_profile, ConfigDiscovery};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
