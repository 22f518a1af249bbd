//! Report command implementation.
//!
//! Audits a finished build against the configuration that produced it.

use crate::audit::{self, AuditReport};
use crate::cli::{ConfigSource, ReportArgs};
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui::{self, SizeRow};

/// Execute the report command.
///
/// # Errors
///
/// `AuditFailed` when the output has violations, `Io` when the directory
/// cannot be read.
pub fn execute(source: &ConfigSource, args: ReportArgs) -> Result<()> {
    let resolved = utils::load_config(source)?.resolve();
    let out_dir = match args.dir {
        Some(dir) => dir,
        None => resolved.build.out_dir.clone(),
    };

    if !out_dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Output directory not found: {}",
            out_dir.display()
        )));
    }

    ui::info(&format!("Auditing {}", out_dir.display()));
    let report = audit::audit(&out_dir, &resolved)?;
    print_report(&report, resolved.build.chunk_size_warning_limit);

    if report.is_clean() {
        ui::success("Build output matches the configuration");
        Ok(())
    } else {
        Err(CliError::AuditFailed(report.violations.len()))
    }
}

fn print_report(report: &AuditReport, limit_kb: u64) {
    let rows: Vec<SizeRow> = report
        .assets
        .iter()
        .map(|asset| SizeRow {
            name: asset.path.display().to_string(),
            size: asset.size,
            gzip: asset.gzip_size,
            oversized: asset.oversized,
        })
        .collect();
    ui::print_size_table(&rows);

    if !report.variants.is_empty() {
        ui::info(&format!("{} compressed variants", report.variants.len()));
    }

    for asset in report.oversized() {
        ui::warning(&format!(
            "{} is larger than {} kB after minification",
            asset.path.display(),
            limit_kb
        ));
    }

    for violation in &report.violations {
        ui::error(&violation.to_string());
    }
}
