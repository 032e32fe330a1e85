//! Track duration measurement.
//!
//! The pipeline only needs whole-second playback lengths, behind a trait so
//! tests can substitute fixed durations for real audio decoding.

use std::path::Path;

use lofty::prelude::*;
use lofty::probe::Probe;

use crate::error::{Error, Result};

/// Measures the playback length of an audio file.
pub trait DurationProber {
    /// Playback length rounded to the nearest whole second.
    fn probe_seconds(&self, path: &Path) -> Result<u64>;
}

/// Production prober backed by lofty's stream-property parser.
pub struct LoftyProber;

impl DurationProber for LoftyProber {
    fn probe_seconds(&self, path: &Path) -> Result<u64> {
        let tagged = Probe::open(path)
            .map_err(|e| probe_error(path, e))?
            .read()
            .map_err(|e| probe_error(path, e))?;
        Ok(round_seconds(tagged.properties().duration().as_secs_f64()))
    }
}

fn probe_error(path: &Path, source: lofty::error::LoftyError) -> Error {
    Error::Probe {
        path: path.to_path_buf(),
        message: source.to_string(),
    }
}

/// Round a fractional duration to the nearest whole second, half away
/// from zero.
fn round_seconds(seconds: f64) -> u64 {
    seconds.round() as u64
}
