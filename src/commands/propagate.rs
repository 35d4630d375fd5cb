//! The `propagate` command.
//!
//! Loads the reference locale's key group and fills the gaps in every
//! target locale file. A target is only written back when at least one
//! key was added, so untouched locales produce no diff noise.

use anyhow::{Result, bail};

use crate::cli::PropagateCommand;
use crate::commands::{RunContext, RunSummary};
use crate::config::GROUP_PATH;
use crate::document::LocaleDocument;
use crate::merge::{lookup_group, propagate_keys};
use crate::report;

pub fn run(cmd: PropagateCommand) -> Result<RunSummary> {
    let ctx = RunContext::new(&cmd.common)?;

    // The reference file is the global prerequisite; anything wrong
    // with it aborts the run before any target is touched.
    let reference_path = ctx.reference_path();
    let reference = LocaleDocument::open(&reference_path)?;
    let Some(reference_group) = lookup_group(reference.data(), GROUP_PATH) else {
        bail!(
            "Reference file {} has no '{}' group",
            reference_path.display(),
            GROUP_PATH.join(".")
        );
    };
    if reference_group.is_empty() {
        bail!(
            "Reference group '{}' in {} is empty",
            GROUP_PATH.join("."),
            reference_path.display()
        );
    }
    let reference_group = reference_group.clone();

    let mut summary = RunSummary::default();
    for locale in &ctx.config.target_locales {
        let path = ctx.locale_file_path(locale);

        // A missing target file is an empty document; a malformed one
        // is skipped so the rest of the batch still runs.
        let mut document = match LocaleDocument::open_or_empty(&path) {
            Ok(document) => document,
            Err(err) => {
                report::print_skipped(locale, &format!("{:#}", err));
                summary.skipped += 1;
                continue;
            }
        };

        let added = match propagate_keys(&reference_group, document.data_mut(), GROUP_PATH) {
            Ok(added) => added,
            Err(err) => {
                report::print_skipped(locale, &format!("{:#}", err));
                summary.skipped += 1;
                continue;
            }
        };

        if added.is_empty() {
            report::print_unchanged(locale);
            summary.unchanged += 1;
            continue;
        }

        if !ctx.dry_run {
            if let Err(err) = document.save() {
                report::print_skipped(locale, &format!("{:#}", err));
                summary.skipped += 1;
                continue;
            }
        }

        report::print_updated(locale, &format!("added {} new keys", added.len()));
        if ctx.verbose {
            for key in &added {
                println!("      + {}", key);
            }
        }
        summary.updated += 1;
    }

    report::print_summary(summary.updated, summary.unchanged, summary.skipped);
    if ctx.dry_run && summary.updated > 0 {
        report::print_dry_run_note();
    }

    Ok(summary)
}
