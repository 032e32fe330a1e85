//! Batch translation driver.
//!
//! Sequences one descriptor through parse → classify → derive → locate →
//! probe → assemble → write, and runs the whole list directory through that
//! sequence. Failures are isolated per file: they are logged with the
//! source filename and the batch keeps going.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::classifier::{classify, OVERRIDE_FOLDER_KEYS};
use crate::services::{assembler, deriver, locator, lua_writer};
use crate::services::prober::DurationProber;
use crate::types::{Category, Descriptor, TrackEntry};

/// What happened to one descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Translated and written to the given path.
    Written(PathBuf),
    /// Not a recognized music list; deliberately ignored.
    Skipped,
}

/// Counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// One-shot translator over a list directory.
pub struct Translator<'a> {
    config: &'a Config,
    prober: &'a dyn DurationProber,
}

impl<'a> Translator<'a> {
    pub fn new(config: &'a Config, prober: &'a dyn DurationProber) -> Self {
        Self { config, prober }
    }

    /// Translate every descriptor in the list directory.
    ///
    /// Fails only if the directory itself cannot be enumerated; per-file
    /// errors are reported and counted, never propagated.
    pub fn run(&self) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        for path in self.descriptor_files()? {
            match self.translate_file(&path) {
                Ok(Outcome::Written(output)) => {
                    info!("{} -> {}", path.display(), output.display());
                    summary.written += 1;
                }
                Ok(Outcome::Skipped) => {
                    debug!("{}: not a music list, skipped", path.display());
                    summary.skipped += 1;
                }
                Err(e) => {
                    error!("{e}");
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    }

    /// Translate a single descriptor file.
    pub fn translate_file(&self, path: &Path) -> Result<Outcome> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            file: path.to_path_buf(),
            source,
        })?;
        let descriptor = Descriptor::parse(path, &text)?;

        let Some(category) = classify(&descriptor) else {
            return Ok(Outcome::Skipped);
        };

        let derived = deriver::derive(category, &self.config.mod_token, path)?;
        let tracks = self.resolve_tracks(category, &descriptor)?;
        let bank = assembler::assemble(category, &descriptor, derived.id, tracks)?;

        let output = self.config.output_path(&derived.file_name);
        lua_writer::write(&output, &bank)?;
        Ok(Outcome::Written(output))
    }

    /// Locate and measure every track for the descriptor's category.
    ///
    /// Overrides union up to three folder fields; the set keeps a track
    /// reachable through several of them only once.
    fn resolve_tracks(&self, category: Category, descriptor: &Descriptor) -> Result<Vec<TrackEntry>> {
        let mut found = BTreeSet::new();
        match category {
            Category::Override => {
                for key in OVERRIDE_FOLDER_KEYS {
                    if let Some(folder) = descriptor.optional_str(key)? {
                        found.extend(locator::find_tracks(
                            &self.config.project_root,
                            &self.config.media_segments(category, folder),
                        ));
                    }
                }
            }
            _ => {
                let folder = descriptor.required_str("folder")?;
                found = locator::find_tracks(
                    &self.config.project_root,
                    &self.config.media_segments(category, folder),
                );
            }
        }

        if found.is_empty() {
            // Written anyway with an empty list, so it can be fixed by hand.
            debug!("{}: no tracks found", descriptor.source().display());
        }

        let mut tracks = Vec::with_capacity(found.len());
        for rel in found {
            let length = self.prober.probe_seconds(&self.config.project_root.join(&rel))?;
            tracks.push(TrackEntry {
                path: locator::to_slash_string(&rel),
                length,
            });
        }
        Ok(tracks)
    }

    /// All `*.json` files directly in the list directory, sorted so batch
    /// order is reproducible.
    fn descriptor_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.config.list_dir)? {
            let path = entry?.path();
            let is_json = path
                .extension()
                .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if is_json && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Prober returning a fixed duration for every file.
    struct FixedProber(u64);

    impl DurationProber for FixedProber {
        fn probe_seconds(&self, _path: &Path) -> Result<u64> {
            Ok(self.0)
        }
    }

    /// Prober that refuses every file.
    struct FailingProber;

    impl DurationProber for FailingProber {
        fn probe_seconds(&self, path: &Path) -> Result<u64> {
            Err(Error::Probe {
                path: path.to_path_buf(),
                message: "unsupported stream".to_string(),
            })
        }
    }

    /// Lay out `<root>/MWSE/config/MS` and return (root, config).
    fn fixture(mod_token: &str) -> (tempfile::TempDir, Config) {
        let root = tempfile::tempdir().unwrap();
        let list_dir = root.path().join("MWSE").join("config").join("MS");
        fs::create_dir_all(&list_dir).unwrap();
        let config = Config::new(mod_token, &list_dir);
        (root, config)
    }

    fn add_track(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn add_descriptor(config: &Config, name: &str, text: &str) {
        fs::write(config.list_dir.join(name), text).unwrap();
    }

    #[test]
    fn translates_a_cell_descriptor_end_to_end() {
        let (root, config) = fixture("aa");
        add_descriptor(
            &config,
            "MS_cShrine.json",
            r#"{ "cellNamePart": ["Bal Fell"], "folder": "BalFell" }"#,
        );
        add_track(root.path(), "music/MS/cell/BalFell/theme.mp3");

        let prober = FixedProber(125);
        let translator = Translator::new(&config, &prober);
        let outcome = translator
            .translate_file(&config.list_dir.join("MS_cShrine.json"))
            .unwrap();

        let output = config.list_dir.join("0000_aa_cellshrine.lua");
        assert_eq!(outcome, Outcome::Written(output.clone()));
        let text = fs::read_to_string(output).unwrap();
        assert!(text.contains("id = \"aa_cellshrine\""));
        assert!(text.contains("\"Bal Fell\""));
        assert!(text.contains("path = \"music/MS/cell/BalFell/theme.mp3\""));
        assert!(text.contains("length = 125"));
    }

    #[test]
    fn unrecognized_descriptor_is_skipped_without_output() {
        let (_root, config) = fixture("aa");
        add_descriptor(&config, "settings.json", r#"{ "volume": 0.5 }"#);

        let prober = FixedProber(1);
        let outcome = Translator::new(&config, &prober)
            .translate_file(&config.list_dir.join("settings.json"))
            .unwrap();

        assert_eq!(outcome, Outcome::Skipped);
        let luas: Vec<_> = fs::read_dir(&config.list_dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|x| x.to_string_lossy() == "lua")
                    .unwrap_or(false)
            })
            .collect();
        assert!(luas.is_empty());
    }

    #[test]
    fn override_folders_are_unioned_and_deduplicated() {
        // dungeonFolder and airFolder point at the same folder with
        // different casing; the shared track must appear once.
        let (root, config) = fixture("aa");
        add_descriptor(
            &config,
            "MS_oRuins.json",
            r#"{ "dungeonFolder": "Ruins", "airFolder": "RUINS", "depthsFolder": "Deep" }"#,
        );
        add_track(root.path(), "music/MS/general/ruins/echo.mp3");
        add_track(root.path(), "music/MS/general/Deep/pressure.mp3");

        let prober = FixedProber(60);
        Translator::new(&config, &prober)
            .translate_file(&config.list_dir.join("MS_oRuins.json"))
            .unwrap();

        let text = fs::read_to_string(config.list_dir.join("0000_aa_overrideruins.lua")).unwrap();
        assert_eq!(text.matches("echo.mp3").count(), 1);
        assert_eq!(text.matches("pressure.mp3").count(), 1);
        assert!(text.contains("cellNamePatterns = {},"));
        assert!(!text.contains("combatTracks"));
    }

    #[test]
    fn combat_disabled_override_writes_both_track_lists() {
        let (root, config) = fixture("aa");
        add_descriptor(
            &config,
            "MS_oBoss.json",
            r#"{ "dungeonFolder": "Boss", "combatDisable": true }"#,
        );
        add_track(root.path(), "music/MS/general/Boss/final.mp3");

        let prober = FixedProber(200);
        Translator::new(&config, &prober)
            .translate_file(&config.list_dir.join("MS_oBoss.json"))
            .unwrap();

        let text = fs::read_to_string(config.list_dir.join("0000_aa_overrideboss.lua")).unwrap();
        assert!(text.contains("tracks = {"));
        assert!(text.contains("combatTracks = {"));
        assert_eq!(text.matches("final.mp3").count(), 2);
    }

    #[test]
    fn empty_folder_still_writes_a_soundbank() {
        let (_root, config) = fixture("aa");
        add_descriptor(
            &config,
            "ms_rQuiet.json",
            r#"{ "regionName": ["Quiet Region"], "folder": "Nowhere" }"#,
        );

        let prober = FixedProber(1);
        Translator::new(&config, &prober)
            .translate_file(&config.list_dir.join("ms_rQuiet.json"))
            .unwrap();

        let text = fs::read_to_string(config.list_dir.join("0000_aa_regionquiet.lua")).unwrap();
        assert!(text.contains("tracks = {},"));
    }

    #[test]
    fn probe_failure_aborts_the_file_without_output() {
        let (root, config) = fixture("aa");
        add_descriptor(
            &config,
            "MS_cBad.json",
            r#"{ "cellNamePart": ["X"], "folder": "X" }"#,
        );
        add_track(root.path(), "music/MS/cell/X/broken.mp3");

        let result = Translator::new(&config, &FailingProber)
            .translate_file(&config.list_dir.join("MS_cBad.json"));
        assert!(matches!(result, Err(Error::Probe { .. })));
        assert!(!config.list_dir.join("0000_aa_cellbad.lua").exists());
    }

    #[test]
    fn batch_isolates_per_file_failures() {
        let (root, config) = fixture("aa");
        // One good cell list, one region list missing its required field,
        // one file that is not a music list at all.
        add_descriptor(
            &config,
            "MS_cGood.json",
            r#"{ "cellNamePart": ["Vivec"], "folder": "Vivec" }"#,
        );
        add_descriptor(&config, "ms_rBad.json", r#"{ "regionName": ["West"] }"#);
        add_descriptor(&config, "readme.json", r#"{ "author": "someone" }"#);
        add_track(root.path(), "music/MS/cell/Vivec/canton.mp3");

        let prober = FixedProber(90);
        let summary = Translator::new(&config, &prober).run().unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                written: 1,
                skipped: 1,
                failed: 1,
            }
        );
        assert!(config.list_dir.join("0000_aa_cellgood.lua").exists());
        assert!(!config.list_dir.join("0000_aa_regionbad.lua").exists());
    }
}
