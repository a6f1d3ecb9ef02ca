//! Core contracts for idforge.
//!
//! This crate defines the record model shared by the generation engine, the
//! export codec, and the CLI: one record type per identifier kind, the
//! batch-level wrapper carrying `index`/`key`, and the tabular field-access
//! trait the CSV codec consumes.

pub mod error;
pub mod record;

pub use error::{Error, Result};
pub use record::{
    BatchRecord, EmotionCategory, EmotionRecord, Identifier, ImeiRecord, Tabular, UuidRecord,
    UuidVersion, VinRecord,
};
