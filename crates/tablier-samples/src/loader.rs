//! Best-effort fixture file loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::record::{parse_record, SampleError, SampleRecord};

/// Load up to `limit` records from a JSON-lines fixture file, in file order.
///
/// A file that cannot be opened yields no records. Lines that are not UTF-8
/// or fail to parse are skipped and do not count towards the limit.
pub fn load_samples(path: &Path, limit: usize) -> Vec<SampleRecord> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("No sample data at {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    BufReader::new(file)
        .split(b'\n')
        .map_while(Result::ok)
        .enumerate()
        .filter_map(|(index, bytes)| match decode_line(bytes) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("Dropping {} line {}: {}", path.display(), index + 1, e);
                None
            }
        })
        .take(limit)
        .collect()
}

fn decode_line(bytes: Vec<u8>) -> Result<SampleRecord, SampleError> {
    let line = String::from_utf8(bytes).map_err(|e| SampleError::Parse(e.to_string()))?;
    parse_record(line.strip_suffix('\r').unwrap_or(&line))
}

/// Sample records loaded once and shared by every variant that displays them.
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    records: Vec<SampleRecord>,
}

impl SampleSet {
    /// Load up to `limit` records from `path`.
    pub fn load(path: &Path, limit: usize) -> Self {
        let records = load_samples(path, limit);
        tracing::info!("Loaded {} sample recipes from {}", records.len(), path.display());
        Self { records }
    }

    /// Wrap already-built records.
    pub fn from_records(records: Vec<SampleRecord>) -> Self {
        Self { records }
    }

    /// The first `n` records, or all of them when fewer are available.
    pub fn take(&self, n: usize) -> Vec<SampleRecord> {
        self.records.iter().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
