//! Progress and summary output.
//!
//! Separate from the command logic so the library stays free of
//! printing side effects. All per-file outcomes go to stdout as
//! sequential lines; warnings for skipped files go to stderr.

use colored::Colorize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_updated(locale: &str, detail: &str) {
    println!("{} {}: {}", SUCCESS_MARK.green(), locale.bold(), detail);
}

pub fn print_unchanged(locale: &str) {
    println!("  {}: no changes needed", locale.dimmed());
}

pub fn print_skipped(locale: &str, reason: &str) {
    eprintln!(
        "{} {} {}: {}",
        FAILURE_MARK.yellow(),
        "skipped".bold().yellow(),
        locale,
        reason
    );
}

pub fn print_dry_run_note() {
    println!(
        "{}",
        "Dry run: no files were written. Re-run without --dry-run to apply."
            .italic()
            .dimmed()
    );
}

pub fn print_summary(updated: usize, unchanged: usize, skipped: usize) {
    let mut parts = vec![format!("{} updated", updated), format!("{} unchanged", unchanged)];
    if skipped > 0 {
        parts.push(format!("{} skipped", skipped));
    }
    let line = format!("Done: {}.", parts.join(", "));
    if skipped > 0 {
        println!("{}", line.yellow());
    } else {
        println!("{}", line.green());
    }
}
