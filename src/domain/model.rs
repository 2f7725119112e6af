use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One parsed row of the input file. `created_on` is already `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub account_id: i64,
    pub display_name: String,
    pub created_on: String,
}

/// Body of a successful lookup. Keys other than these two are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_on: Option<String>,
}

/// Numbers and booleans keep their JSON text; null, arrays and objects read as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Result of a single status lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(StatusRecord),
    NotFound,
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// One output row, serialized in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedRecord {
    pub account_id: i64,
    pub display_name: String,
    pub created_on: String,
    pub status: String,
    pub status_set_on: String,
}

impl CombinedRecord {
    pub const HEADER: [&'static str; 5] = [
        "Account ID",
        "First Name",
        "Created On",
        "Status",
        "Status Set On",
    ];

    pub fn new(input: InputRecord, status: String, status_set_on: String) -> Self {
        Self {
            account_id: input.account_id,
            display_name: input.display_name,
            created_on: input.created_on,
            status,
            status_set_on,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPath {
    Input,
    Output,
    Both,
}

impl MissingPath {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Input => "input path",
            Self::Output => "output path",
            Self::Both => "input and output paths",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollationSummary {
    pub rows_written: usize,
    pub lookups_missed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollationOutcome {
    /// Nothing was read, fetched or written.
    Skipped { missing: MissingPath },
    Completed(CollationSummary),
}
