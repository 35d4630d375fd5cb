//! Locale file discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Find per-locale files named `file_name` directly under the locale
/// directories of `locales_root`.
///
/// Tries the glob pattern `<root>/*/<file_name>` first; if that matches
/// nothing (the layout may be deeper than expected), falls back to a
/// recursive walk collecting every file with that name. Results are
/// sorted for a stable processing order.
pub fn discover_locale_files(locales_root: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*/{}", locales_root.display(), file_name);
    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("Invalid glob pattern: {}", pattern))?
        .filter_map(std::result::Result::ok)
        .collect();

    if files.is_empty() {
        files = WalkDir::new(locales_root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file() && entry.file_name() == file_name)
            .map(walkdir::DirEntry::into_path)
            .collect();
    }

    files.sort();
    Ok(files)
}

/// Locale code of a discovered file, taken from its parent directory
/// name (e.g. `src/locales/hi/calculation.json` -> `hi`).
pub fn locale_code(path: &Path) -> Option<&str> {
    path.parent()?.file_name()?.to_str()
}
