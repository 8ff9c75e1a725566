//! Sample recipe fixtures for template previews.
//!
//! This crate reads a JSON-lines fixture file and turns each line into a
//! normalized [`SampleRecord`]. Loading is best-effort: a missing file yields
//! no records and a malformed line is dropped without affecting its neighbours.

pub mod loader;
pub mod record;

pub use loader::{load_samples, SampleSet};
pub use record::{parse_record, SampleError, SampleRecord};
