use anyhow::{Context, Result};
use ignore::{DirEntry, WalkBuilder};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsStr;
use std::path::Path;

/// Topic name -> exercise identifiers found in that topic's directory.
pub type Catalog = BTreeMap<String, BTreeSet<String>>;

/// Path components that exclude an entry (and everything below it).
pub const EXCLUDE_DIRS: &[&str] = &["answers", ".git", "target"];

/// Extensions of files that count as exercises.
pub const VALID_EXTENSIONS: &[&str] = &["rs"];

/// Walks `exercises_dir` and groups exercise files by their parent directory.
///
/// A missing directory yields an empty catalog.
pub fn collect_exercises(exercises_dir: &Path) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    if !exercises_dir.exists() {
        debug!("Exercise directory not found: {}", exercises_dir.display());
        return Ok(catalog);
    }

    let mut builder = WalkBuilder::new(exercises_dir);

    // Every file counts unless it sits under an excluded component
    builder
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .filter_entry(|e| !is_excluded(e));

    for result in builder.build() {
        let entry = result
            .with_context(|| format!("Error walking path: {}", exercises_dir.display()))?;

        // The root itself is never an exercise, even if it is a file.
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        if !path.is_file() || !has_valid_extension(path) {
            continue;
        }

        let (Some(topic), Some(slug)) = (
            path.parent().and_then(Path::file_name),
            path.file_stem(),
        ) else {
            continue;
        };

        debug!("Found exercise: {}", path.display());
        catalog
            .entry(topic.to_string_lossy().into_owned())
            .or_default()
            .insert(slug.to_string_lossy().into_owned());
    }

    Ok(catalog)
}

/// True if the entry's own name is an excluded component.
///
/// Because the walker prunes excluded directories, checking the entry name is
/// enough to exclude any path that contains such a component below the root.
fn is_excluded(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDE_DIRS.contains(&name))
}

fn has_valid_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| VALID_EXTENSIONS.contains(&ext))
}
