//! Reducing the deletion history to the list of files that must not
//! exist in an installation.

use crate::error::Result;
use crate::git::HistoryProvider;
use crate::io;
use std::collections::HashSet;
use std::path::Path;

/// Manifest file written into the extension's main directory.
pub const DELETED_FILES: &str = "deleted.files";

const MANIFEST_HEADER: &str = "# This is a list of files that were present in previous releases\n\
                               # but were removed later. They should not exist in your installation.\n";

/// Reduce the raw deletion events to the minimal sorted list of paths
/// that are still absent from the working tree.
///
/// The order is canonical: trim, drop empties, dedupe on first
/// occurrence, drop currently existing paths, then sort.
pub fn reconcile(
    history: &dyn HistoryProvider,
    exists: impl Fn(&str) -> bool,
) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut paths: Vec<String> = history
        .deleted_paths()?
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .filter(|p| seen.insert(p.clone()))
        .collect();

    paths.retain(|p| !exists(p));
    paths.sort();

    Ok(paths)
}

/// Overwrite the manifest below `dir` with the header and one path per
/// line. Callers skip this entirely for an empty list; an existing
/// manifest is then left as it is.
pub fn write_manifest(dir: &Path, paths: &[String]) -> Result<()> {
    let mut content = String::from(MANIFEST_HEADER);
    for path in paths {
        content.push_str(path);
        content.push('\n');
    }
    io::atomic_write(&dir.join(DELETED_FILES), content.as_bytes())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
