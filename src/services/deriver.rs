//! Output path and identifier derivation.
//!
//! Turns a descriptor's source filename into the lowercase output module
//! name and the soundbank id: the MUSE2 legacy prefix for the classified
//! category is replaced by `0000_<mod_token>_<keyword>` and the extension
//! swapped for `.lua`.

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Category;

/// Fixed prefix keeping derived modules sorted ahead of hand-written ones.
const LOAD_ORDER_PREFIX: &str = "0000_";

/// Extension of the emitted module files.
const MODULE_EXT: &str = "lua";

/// A derived output filename plus the soundbank id embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    pub file_name: String,
    pub id: String,
}

/// Derive the output filename and id for a classified descriptor.
///
/// Deterministic for identical inputs. A source filename lacking the legacy
/// prefix expected for its category is malformed input.
pub fn derive(category: Category, mod_token: &str, source: &Path) -> Result<Derived> {
    let stem = source
        .file_stem()
        .ok_or_else(|| Error::MalformedDescriptor {
            file: source.to_path_buf(),
            reason: "descriptor has no file name".to_string(),
        })?
        .to_string_lossy()
        .to_lowercase();

    let prefix = category.legacy_prefix();
    if !stem.contains(prefix) {
        return Err(Error::MalformedDescriptor {
            file: source.to_path_buf(),
            reason: format!(
                "file name lacks the `{prefix}` prefix expected for {} lists",
                category.keyword()
            ),
        });
    }

    let replacement = format!("{LOAD_ORDER_PREFIX}{mod_token}_{}", category.keyword());
    let base = stem.replacen(prefix, &replacement, 1);
    let file_name = format!("{base}.{MODULE_EXT}");
    let id = base
        .strip_prefix(LOAD_ORDER_PREFIX)
        .unwrap_or(&base)
        .to_string();

    Ok(Derived { file_name, id })
}
