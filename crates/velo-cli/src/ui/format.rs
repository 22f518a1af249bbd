//! Formatting utilities for asset sizes.

use owo_colors::OwoColorize;

use super::colors_enabled;

/// Format file size in human-readable format.
///
/// Converts bytes to the most appropriate unit (B, KB, MB, GB).
///
/// # Examples
///
/// ```
/// use velo_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// One line of the asset size table.
#[derive(Debug, Clone)]
pub struct SizeRow {
    pub name: String,
    pub size: u64,
    pub gzip: Option<u64>,
    pub oversized: bool,
}

/// Print asset sizes to stderr, gzip sizes in a second column when known.
pub fn print_size_table(rows: &[SizeRow]) {
    let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);

    for row in rows {
        let size = format_size(row.size);
        let gzip = row
            .gzip
            .map(|gzip| format!("│ gzip: {}", format_size(gzip)))
            .unwrap_or_default();
        let line = format!("  {:<width$}  {:>10} {}", row.name, size, gzip, width = width);

        if row.oversized && colors_enabled() {
            eprintln!("{}", line.yellow());
        } else if colors_enabled() {
            eprintln!("{}", line.dimmed());
        } else {
            eprintln!("{}", line);
        }
    }

    let total: u64 = rows.iter().map(|row| row.size).sum();
    eprintln!("  total: {}", format_size(total));
}
