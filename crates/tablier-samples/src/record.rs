//! Normalized recipe records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One fixture recipe, projected down to what the preview templates display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleRecord {
    /// Recipe name
    pub name: String,

    /// Name of the site the recipe was crawled from
    pub site_name: String,

    /// Source URL
    pub crawl_url: String,

    /// Number of entries in the ingredient list
    pub num_ingredients: usize,

    /// Calories, absent when missing or zero
    pub calories: Option<i64>,

    /// Total time in minutes, absent when missing or zero
    pub total_time: Option<i64>,
}

/// Errors that cause a fixture line to be dropped.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("Invalid JSON record: {0}")]
    Parse(String),

    #[error("Missing required field `{0}`")]
    MissingField(&'static str),
}

/// Wire shape of a fixture line. Required fields are optional here so a
/// missing one can be reported by name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    name: Option<String>,
    site_name: Option<String>,
    crawl_url: Option<String>,
    #[serde(default)]
    ingredients: Vec<Value>,
    calories: Option<Value>,
    total_time: Option<Value>,
}

/// Parse a single fixture line into a [`SampleRecord`].
pub fn parse_record(line: &str) -> Result<SampleRecord, SampleError> {
    let raw: RawRecord =
        serde_json::from_str(line).map_err(|e| SampleError::Parse(e.to_string()))?;

    Ok(SampleRecord {
        name: raw.name.ok_or(SampleError::MissingField("name"))?,
        site_name: raw.site_name.ok_or(SampleError::MissingField("siteName"))?,
        crawl_url: raw.crawl_url.ok_or(SampleError::MissingField("crawlUrl"))?,
        num_ingredients: raw.ingredients.len(),
        calories: meaningful_count(raw.calories.as_ref()),
        total_time: meaningful_count(raw.total_time.as_ref()),
    })
}

/// Zero is not a real measurement in the fixture data, so it reads as absent,
/// same as a missing or non-integer value.
fn meaningful_count(value: Option<&Value>) -> Option<i64> {
    value.and_then(Value::as_i64).filter(|v| *v != 0)
}
