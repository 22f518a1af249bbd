//! Status message functions for terminal output.

use owo_colors::OwoColorize;

use super::colors_enabled;

/// Print a success message to stderr.
///
/// ```no_run
/// use velo_cli::ui::success;
///
/// success("Configuration is valid");
/// ```
pub fn success(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {}", message);
    }
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {}", message);
    }
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {}", message);
    }
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("✗ {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        // These should not panic
        success("Success message");
        info("Info message");
        warning("Warning message");
        error("Error message");
    }
}
