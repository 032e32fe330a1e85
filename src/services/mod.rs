//! Pipeline stages, one module per stage.

pub mod assembler;
pub mod classifier;
pub mod deriver;
pub mod locator;
pub mod lua_writer;
pub mod pipeline;
pub mod prober;
