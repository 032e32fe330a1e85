//! # dynam-translate
//!
//! One-shot batch converter from MUSE2 music-list descriptors (a permissive
//! JSON dialect) to Dynamic Music soundbank modules (Lua table literals).
//!
//! The pipeline per descriptor file: parse → classify by key shape → derive
//! the output path and soundbank id → locate the category's audio assets
//! (case-insensitively) → measure track durations → assemble the output
//! record → write the Lua module. Each file is independent; failures are
//! reported with the offending filename and the batch continues.

pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use services::pipeline::{BatchSummary, Outcome, Translator};
pub use services::prober::{DurationProber, LoftyProber};
pub use types::{Category, Descriptor, SoundBank, TrackEntry};
