//! Velo CLI - resolve, inspect and audit front-end build configuration.
//!
//! This crate provides the `velo` binary on top of `velo-config`.
//!
//! # Architecture
//!
//! - [`cli`] - argument definitions (clap derive)
//! - [`commands`] - one module per subcommand
//! - [`server`] - dev and preview port binding with strict-port semantics
//! - [`audit`] - build output checks against the resolved configuration
//! - [`error`] - error types with actionable hints
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - status lines and size tables
//!
//! # Example
//!
//! ```rust
//! use velo_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod audit;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod server;
pub mod ui;

pub use error::{CliError, Result};
