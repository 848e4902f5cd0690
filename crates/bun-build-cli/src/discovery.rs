//! Entry point discovery.
//!
//! Every `.ts` file under the source directory is an entry point, except
//! declaration files, test files, anything inside `node_modules`, hidden
//! files, and whatever the user's ignore patterns exclude. Patterns are
//! matched against paths relative to the source directory.

use crate::error::{BuildError, Result};
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const INCLUDE_PATTERN: &str = "**/*.ts";

/// Always excluded, before the user's ignore patterns.
const DEFAULT_EXCLUDES: &[&str] = &[
    "**/node_modules/**",
    "**/*.d.ts",
    "**/*.test.ts",
    "**/*.spec.ts",
];

/// Compiled inclusion and exclusion patterns.
#[derive(Debug)]
pub struct EntryMatcher {
    include: GlobSet,
    exclude: GlobSet,
}

impl EntryMatcher {
    /// Build a matcher from user ignore patterns (relative to the source dir).
    pub fn new(ignore: &[String]) -> Result<Self> {
        let include = build_set(std::iter::once(INCLUDE_PATTERN))?;
        let exclude = build_set(
            DEFAULT_EXCLUDES
                .iter()
                .copied()
                .chain(ignore.iter().map(String::as_str)),
        )?;
        Ok(Self { include, exclude })
    }

    /// Whether a path relative to the source directory is an entry point.
    pub fn is_match(&self, relative: &Path) -> bool {
        self.include.is_match(relative) && !self.exclude.is_match(relative)
    }
}

fn compile(pattern: &str) -> Result<Glob> {
    // `*` must not cross directory boundaries, as in shell globs
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| {
            BuildError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.kind().to_string(),
            }
            .into()
        })
}

fn build_set<'a>(patterns: impl Iterator<Item = &'a str>) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile(pattern)?);
    }
    builder.build().map_err(|e| {
        BuildError::InvalidPattern {
            pattern: "<set>".to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Find entry points under `src_dir`.
///
/// Returns paths relative to `src_dir`, sorted, each exactly once. A missing
/// source directory yields an empty list.
pub fn discover(src_dir: &Path, ignore: &[String]) -> Result<Vec<PathBuf>> {
    let matcher = EntryMatcher::new(ignore)?;

    if !src_dir.is_dir() {
        tracing::debug!("Source directory {} does not exist", src_dir.display());
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    let walker = WalkDir::new(src_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(src_dir) else {
            continue;
        };
        if matcher.is_match(relative) {
            found.push(relative.to_path_buf());
        }
    }

    found.sort();
    found.dedup();
    tracing::debug!("Discovered {} entry points in {}", found.len(), src_dir.display());
    Ok(found)
}
