//! Command implementations for the Velo CLI.
//!
//! Each command lives in its own module and exposes an `execute` function
//! taking the shared [`ConfigSource`](crate::cli::ConfigSource) and its
//! parsed arguments. Results go to stdout, status lines to stderr.

pub mod alias;
pub mod check;
pub mod chunk;
pub mod port;
pub mod report;
pub mod resolve;
pub(crate) mod utils;

pub use alias::execute as alias_execute;
pub use check::execute as check_execute;
pub use chunk::execute as chunk_execute;
pub use port::execute as port_execute;
pub use report::execute as report_execute;
pub use resolve::execute as resolve_execute;
