//! Case-insensitive asset discovery.
//!
//! MUSE2 mods routinely disagree with the filesystem about directory
//! casing, so every path segment between the project root and the audio
//! files matches case-insensitively. Results are relative paths with the
//! physical on-disk casing.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Audio extension recognized in media directories.
const AUDIO_EXT: &str = "mp3";

/// Find every `*.mp3` directly under `<project_root>/<segments...>`,
/// matching each segment case-insensitively.
///
/// Returns paths relative to `project_root`. A missing directory anywhere
/// along the chain yields the empty set; an empty result is not an error.
/// `BTreeSet` deduplicates and keeps the order stable across runs.
pub fn find_tracks(project_root: &Path, segments: &[String]) -> BTreeSet<PathBuf> {
    let mut found = BTreeSet::new();

    let walker = WalkDir::new(project_root)
        .follow_links(false)
        .max_depth(segments.len() + 1)
        .into_iter()
        .filter_entry(|entry| prefix_matches(project_root, entry, segments));

    // Unreadable directories along the way are treated the same as absent
    // ones; the caller writes an empty track list either way.
    for entry in walker.flatten() {
        if entry.depth() == segments.len() + 1
            && entry.file_type().is_file()
            && is_audio_file(entry.path())
        {
            if let Ok(rel) = entry.path().strip_prefix(project_root) {
                found.insert(rel.to_path_buf());
            }
        }
    }

    found
}

/// Render a relative path with forward slashes, as Dynamic Music expects.
pub fn to_slash_string(rel: &Path) -> String {
    rel.components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Prune any directory whose name disagrees (case-insensitively) with the
/// segment expected at its depth. Components past the segment chain are the
/// candidate files themselves and pass through.
fn prefix_matches(root: &Path, entry: &DirEntry, segments: &[String]) -> bool {
    let rel = match entry.path().strip_prefix(root) {
        Ok(rel) => rel, // empty for the root itself
        Err(_) => return true,
    };
    for (component, expected) in rel.components().zip(segments.iter()) {
        if !component
            .as_os_str()
            .to_string_lossy()
            .eq_ignore_ascii_case(expected)
        {
            return false;
        }
    }
    true
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(AUDIO_EXT))
        .unwrap_or(false)
}
