//! Soundbank assembly.
//!
//! One exhaustive match over the category implements the whole
//! field-mapping rule set, including the combat-override duplication rule.
//! Pattern values are copied verbatim; validating their contents (regex
//! syntax, cell names) is the consuming runtime's job.

use serde_json::Value;

use crate::error::Result;
use crate::types::{Category, Descriptor, SoundBank, TrackEntry};

/// Build the output record for a classified descriptor.
///
/// - Cell, Region, Tileset: copy the category's pattern field, populate
///   `tracks`.
/// - Enemy: copy `enemyNames`, populate `combatTracks` only.
/// - Override: `cellNamePatterns` is always empty (the record is inert for
///   direct cell matching; its track list exists to be reused manually).
///   `tracks` is always populated, and `combatTracks` carries the same
///   list when `combatDisable` is boolean `true`.
pub fn assemble(
    category: Category,
    descriptor: &Descriptor,
    id: String,
    tracks: Vec<TrackEntry>,
) -> Result<SoundBank> {
    let mut pattern_fields: Vec<(&'static str, Value)> = Vec::new();
    let mut bank_tracks = None;
    let mut combat_tracks = None;

    match category {
        Category::Cell => {
            pattern_fields.push(("cellNamePatterns", descriptor.required("cellNamePart")?.clone()));
            if let Some(exclude) = descriptor.get("cellNameExclude") {
                pattern_fields.push(("cellNamePatternsExclude", exclude.clone()));
            }
            bank_tracks = Some(tracks);
        }
        Category::Region => {
            pattern_fields.push(("regionNames", descriptor.required("regionName")?.clone()));
            bank_tracks = Some(tracks);
        }
        Category::Tileset => {
            pattern_fields.push(("tilesetPatterns", descriptor.required("tilesetPart")?.clone()));
            bank_tracks = Some(tracks);
        }
        Category::Enemy => {
            pattern_fields.push(("enemyNames", descriptor.required("enemyNames")?.clone()));
            combat_tracks = Some(tracks);
        }
        Category::Override => {
            pattern_fields.push(("cellNamePatterns", Value::Array(Vec::new())));
            match descriptor.get("combatDisable") {
                None | Some(Value::Bool(false)) => {}
                Some(Value::Bool(true)) => combat_tracks = Some(tracks.clone()),
                Some(other) => {
                    return Err(descriptor.malformed(format!(
                        "combatDisable must be a boolean, got {other}"
                    )))
                }
            }
            bank_tracks = Some(tracks);
        }
    }

    Ok(SoundBank {
        id,
        pattern_fields,
        tracks: bank_tracks,
        combat_tracks,
    })
}
