//! Synthetic product catalog generation for Catalogen.
//!
//! This crate turns a validated record count into a delimited test file of
//! pseudo-random product records (name, vendor, price, department ratings).

pub mod assets;
pub mod count;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod output;
pub mod ratings;
pub mod record;

pub use count::{CountError, MAX_RECORDS, validate_count};
pub use engine::{GenerateOptions, GenerationEngine, GenerationReport, GenerationResult};
pub use errors::GenerationError;
pub use record::{Price, Record};
