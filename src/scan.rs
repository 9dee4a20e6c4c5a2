use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use eyre::ContextCompat;
use tracing::debug;

use crate::rules::IgnoreRules;

/// A regular file found during the scan.
///
/// Ordered by size first, then by the path as a plain string (not component
/// by component, so `a/b` sorts after `a-b`). Ranking is total and the output
/// is stable for a given tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSize {
    /// Length in bytes.
    pub size: u64,
    /// Path relative to the scan root.
    pub path: PathBuf,
}

impl Ord for FileSize {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.size, self.path.as_os_str()).cmp(&(other.size, other.path.as_os_str()))
    }
}

impl PartialOrd for FileSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Walk `root` and collect the size of every file that is not ignored.
///
/// Ignored directories are pruned, so nothing under them is read. Entries
/// that can't be read or stat'ed are skipped.
pub fn scan(root: &Path, rules: &IgnoreRules) -> eyre::Result<Vec<FileSize>> {
    let filter_rules = rules.clone();
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            let ignored = filter_rules.is_ignored(entry.path(), is_dir);
            if ignored {
                debug!("Ignoring {}", entry.path().display());
            }
            !ignored
        })
        .build();

    let mut result = Vec::new();
    for ch in walker {
        let ch = match ch {
            Ok(ch) => ch,
            Err(err) => {
                debug!("Skipping unreadable entry ({err})");
                continue;
            }
        };
        if ch.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        // Follows symlinks, so a link to a file counts with its target's size
        // and a dangling one fails here.
        let metadata = match std::fs::metadata(ch.path()) {
            Ok(metadata) => metadata,
            Err(err) => {
                debug!("Could not stat {} ({err})", ch.path().display());
                continue;
            }
        };
        if metadata.is_file() {
            result.push(FileSize {
                size: metadata.len(),
                path: ch
                    .path()
                    .strip_prefix(root)
                    .ok()
                    .context("Walked path is not under the scan root")?
                    .to_owned(),
            });
        }
    }

    debug!("Found {} candidate files under {}", result.len(), root.display());
    Ok(result)
}
