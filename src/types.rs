//! Core data model: descriptor categories, parsed descriptors, and the
//! assembled soundbank record.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Closed classification of a MUSE2 descriptor by its schema shape.
///
/// The category decides which media subdirectory is searched, which
/// descriptor fields populate the output, which output filename prefix is
/// used, and whether the combat-duplication rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Region,
    Cell,
    Tileset,
    Override,
    Enemy,
}

impl Category {
    /// Word used in derived output filenames and soundbank ids.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Region => "region",
            Category::Cell => "cell",
            Category::Tileset => "tileset",
            Category::Override => "override",
            Category::Enemy => "enemy",
        }
    }

    /// Legacy MUSE2 filename prefix replaced during derivation.
    pub fn legacy_prefix(self) -> &'static str {
        match self {
            Category::Region => "ms_r",
            Category::Cell => "ms_c",
            Category::Tileset => "ms_t",
            Category::Override => "ms_o",
            Category::Enemy => "ms_e",
        }
    }

    /// Subdirectory of the media root searched for this category's tracks.
    pub fn media_subdir(self) -> &'static str {
        match self {
            Category::Region => "region",
            Category::Cell => "cell",
            Category::Tileset => "interior",
            Category::Override => "general",
            Category::Enemy => "combat",
        }
    }
}

/// A parsed music-list descriptor.
///
/// MUSE2 lists are loosely typed; the effective schema is inferred from the
/// key set, never declared. The raw key/value map is kept verbatim so
/// pattern fields can be copied through without interpretation.
#[derive(Debug, Clone, Deserialize)]
pub struct Descriptor {
    #[serde(skip)]
    source: PathBuf,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Descriptor {
    /// Parse descriptor text in the permissive MUSE2 JSON dialect
    /// (trailing commas allowed). `source` is kept for error reporting.
    pub fn parse(source: &Path, text: &str) -> Result<Self> {
        let mut descriptor: Descriptor = json5::from_str(text).map_err(|e| Error::Parse {
            file: source.to_path_buf(),
            message: e.to_string(),
        })?;
        descriptor.source = source.to_path_buf();
        Ok(descriptor)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field the category mapping requires; absence is a malformed descriptor.
    pub fn required(&self, key: &str) -> Result<&Value> {
        self.get(key)
            .ok_or_else(|| self.malformed(format!("missing required field `{key}`")))
    }

    /// Required string-valued field (folder names).
    pub fn required_str(&self, key: &str) -> Result<&str> {
        self.required(key)?
            .as_str()
            .ok_or_else(|| self.malformed(format!("field `{key}` must be a string")))
    }

    /// Optional string-valued field; present but non-string is malformed.
    pub fn optional_str(&self, key: &str) -> Result<Option<&str>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| self.malformed(format!("field `{key}` must be a string"))),
        }
    }

    pub fn malformed(&self, reason: impl Into<String>) -> Error {
        Error::MalformedDescriptor {
            file: self.source.clone(),
            reason: reason.into(),
        }
    }
}

/// One audio asset: path relative to the project root (forward slashes,
/// physical on-disk casing) and playback length in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub path: String,
    pub length: u64,
}

/// The translated output record consumed by Dynamic Music.
///
/// Pattern fields are copied verbatim from the descriptor; which fields are
/// present, and whether `tracks`/`combat_tracks` are populated, is decided
/// by the assembler's category mapping.
#[derive(Debug, Clone)]
pub struct SoundBank {
    pub id: String,
    pub pattern_fields: Vec<(&'static str, Value)>,
    pub tracks: Option<Vec<TrackEntry>>,
    pub combat_tracks: Option<Vec<TrackEntry>>,
}
