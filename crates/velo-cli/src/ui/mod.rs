//! Terminal output helpers: status lines and size formatting.
//!
//! Status lines go to stderr so that stdout stays machine-readable
//! (`velo resolve | jq`).

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_size, print_size_table, SizeRow};
pub use messages::{error, info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Enable or disable colored status lines.
///
/// # Examples
///
/// ```no_run
/// use velo_cli::ui;
///
/// ui::init_colors(false);
/// ui::info("plain output");
/// ```
pub fn init_colors(enabled: bool) {
    COLORS.store(enabled, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
