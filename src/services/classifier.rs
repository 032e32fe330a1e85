//! Descriptor classification.
//!
//! Assigns each parsed descriptor to exactly one category by inspecting its
//! key set, or rejects it. Pure and total; `None` means "not a MUSE2 music
//! list, skip silently".

use crate::types::{Category, Descriptor};

/// Folder fields an override descriptor may carry; any one of them marks
/// the descriptor as an override list.
pub const OVERRIDE_FOLDER_KEYS: [&str; 3] = ["dungeonFolder", "airFolder", "depthsFolder"];

/// Classify a descriptor by key membership.
///
/// Detection order is significant and fixed: Override first, then Cell,
/// Region, Enemy, Tileset. The first matching shape wins.
pub fn classify(descriptor: &Descriptor) -> Option<Category> {
    if OVERRIDE_FOLDER_KEYS.iter().any(|key| descriptor.contains(key)) {
        Some(Category::Override)
    } else if descriptor.contains("cellNamePart") {
        Some(Category::Cell)
    } else if descriptor.contains("regionName") {
        Some(Category::Region)
    } else if descriptor.contains("enemyNames") {
        Some(Category::Enemy)
    } else if descriptor.contains("tilesetPart") {
        Some(Category::Tileset)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn descriptor(text: &str) -> Descriptor {
        Descriptor::parse(Path::new("test.json"), text).unwrap()
    }

    #[test]
    fn classifies_each_category_by_key_shape() {
        let cases = [
            (r#"{ "cellNamePart": ["Vivec"], "folder": "v" }"#, Category::Cell),
            (r#"{ "regionName": ["Ashlands"], "folder": "a" }"#, Category::Region),
            (r#"{ "tilesetPart": ["hlaalu"], "folder": "h" }"#, Category::Tileset),
            (r#"{ "enemyNames": ["Cliff Racer"], "folder": "c" }"#, Category::Enemy),
            (r#"{ "dungeonFolder": "Dungeon" }"#, Category::Override),
            (r#"{ "airFolder": "Air" }"#, Category::Override),
            (r#"{ "depthsFolder": "Depths" }"#, Category::Override),
        ];
        for (text, expected) in cases {
            assert_eq!(classify(&descriptor(text)), Some(expected), "{text}");
        }
    }

    #[test]
    fn override_keys_take_precedence() {
        let mixed = descriptor(
            r#"{ "cellNamePart": ["Vivec"], "regionName": ["x"], "dungeonFolder": "d" }"#,
        );
        assert_eq!(classify(&mixed), Some(Category::Override));
    }

    #[test]
    fn cell_takes_precedence_over_region() {
        let mixed = descriptor(r#"{ "cellNamePart": ["Vivec"], "regionName": ["x"] }"#);
        assert_eq!(classify(&mixed), Some(Category::Cell));
    }

    #[test]
    fn unrecognized_shape_is_rejected() {
        assert_eq!(classify(&descriptor(r#"{ "volume": 0.5, "oldField": true }"#)), None);
        assert_eq!(classify(&descriptor("{}")), None);
    }
}
