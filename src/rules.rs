use std::path::Path;

use eyre::Context;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::{debug, warn};

/// Name of the ignore file read from the scan root.
pub const IGNORE_FILE: &str = ".gitignore";

/// The ignore patterns that apply to one scan root.
///
/// Only the root's own `.gitignore` is consulted. Nested ignore files, the
/// global git excludes and `.git/info/exclude` play no part.
#[derive(Clone, Debug)]
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    /// Read `<root>/.gitignore`, if present, and append `extra` patterns.
    pub fn load(root: &Path, extra: &[String]) -> eyre::Result<Self> {
        let path = root.join(IGNORE_FILE);
        let contents = if path.is_file() {
            debug!("Reading ignore patterns from {}", path.display());
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        } else {
            debug!("No {IGNORE_FILE} in {}", root.display());
            String::new()
        };

        Self::from_lines(
            root,
            contents.lines().chain(extra.iter().map(String::as_str)),
        )
    }

    /// Build the rules from pattern lines, as they would appear in a
    /// `.gitignore` located at `root`.
    ///
    /// Blank lines and comments are skipped. A line that is not a valid glob
    /// is reported and dropped; the other lines still apply.
    pub fn from_lines<'a>(
        root: &Path,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> eyre::Result<Self> {
        let mut builder = GitignoreBuilder::new(root);
        for line in lines {
            if let Err(err) = builder.add_line(None, line) {
                warn!("Skipping invalid ignore pattern {line:?} ({err})");
            }
        }

        let matcher = builder.build().context("Invalid ignore patterns")?;
        debug!("Loaded {} ignore patterns", matcher.num_ignores());
        Ok(Self { matcher })
    }

    /// Whether `path` is excluded, either directly or because one of its
    /// parent directories is.
    ///
    /// `path` is relative to the root, or starts with the root path itself.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.matcher
            .matched_path_or_any_parents(path, is_dir)
            .is_ignore()
    }
}
