//! The `consolidate` command.
//!
//! Discovers every locale file under the locales root and consolidates
//! its `byVolume` group: stray duplicates are folded into the canonical
//! `concrete.byVolume` position and the dimension labels are injected.
//! The reference locale is assumed canonical already and skipped.

use anyhow::Result;

use crate::cli::ConsolidateCommand;
use crate::commands::{RunContext, RunSummary};
use crate::consolidate::{ConsolidateOutcome, consolidate_document};
use crate::discover::{discover_locale_files, locale_code};
use crate::document::LocaleDocument;
use crate::report;

pub fn run(cmd: ConsolidateCommand) -> Result<RunSummary> {
    let ctx = RunContext::new(&cmd.common)?;

    let files = discover_locale_files(&ctx.locales_root, &ctx.config.locale_file)?;
    println!(
        "Found {} locale file(s) under {}.",
        files.len(),
        ctx.locales_root.display()
    );

    let mut summary = RunSummary::default();
    for path in &files {
        let locale = locale_code(path).unwrap_or("?").to_string();

        if locale == ctx.config.reference_locale {
            if ctx.verbose {
                println!("  {}: reference locale, skipping", locale);
            }
            summary.unchanged += 1;
            continue;
        }

        let mut document = match LocaleDocument::open(path) {
            Ok(document) => document,
            Err(err) => {
                report::print_skipped(&locale, &format!("{:#}", err));
                summary.skipped += 1;
                continue;
            }
        };

        // Errors here mean the document's shape did not match; it is
        // reported and left untouched on disk.
        match consolidate_document(document.data_mut()) {
            Ok(ConsolidateOutcome::AlreadyConsolidated) => {
                report::print_unchanged(&locale);
                summary.unchanged += 1;
            }
            Ok(ConsolidateOutcome::Updated { added, moved }) => {
                if !ctx.dry_run {
                    if let Err(err) = document.save() {
                        report::print_skipped(&locale, &format!("{:#}", err));
                        summary.skipped += 1;
                        continue;
                    }
                }
                let detail = if moved {
                    format!("moved group to canonical position, injected {} keys", added)
                } else {
                    format!("injected {} keys", added)
                };
                report::print_updated(&locale, &detail);
                summary.updated += 1;
            }
            Err(err) => {
                report::print_skipped(&locale, &format!("{:#}", err));
                summary.skipped += 1;
            }
        }
    }

    report::print_summary(summary.updated, summary.unchanged, summary.skipped);
    if ctx.dry_run && summary.updated > 0 {
        report::print_dry_run_note();
    }

    Ok(summary)
}
