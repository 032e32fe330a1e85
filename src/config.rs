//! Run configuration.
//!
//! Built once from the invocation and passed by reference through the
//! pipeline; there is no ambient global state.

use std::path::PathBuf;

use crate::types::Category;

/// Namespace directory under the media root holding MUSE2 music.
pub const MEDIA_NAMESPACE: &str = "MS";

/// Configuration for one translation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Short mod-name token inserted into every derived path and id.
    pub mod_token: String,
    /// Directory scanned for descriptors; outputs are written here too.
    pub list_dir: PathBuf,
    /// Project root the media lives under, three levels above `list_dir`
    /// (descriptors live in `<root>/MWSE/config/MS/`).
    pub project_root: PathBuf,
}

impl Config {
    pub fn new(mod_token: impl Into<String>, list_dir: impl Into<PathBuf>) -> Self {
        let list_dir = list_dir.into();
        let project_root = list_dir.join("..").join("..").join("..");
        Self {
            mod_token: mod_token.into(),
            list_dir,
            project_root,
        }
    }

    /// Configuration for a run rooted at the current working directory.
    pub fn from_cwd(mod_token: impl Into<String>) -> std::io::Result<Self> {
        Ok(Self::new(mod_token, std::env::current_dir()?))
    }

    /// Path segments, relative to the project root, of the media directory
    /// searched for a category's tracks.
    pub fn media_segments(&self, category: Category, folder: &str) -> [String; 4] {
        [
            "music".to_string(),
            MEDIA_NAMESPACE.to_string(),
            category.media_subdir().to_string(),
            folder.to_string(),
        ]
    }

    /// Absolute location of a derived output module.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.list_dir.join(file_name)
    }
}
