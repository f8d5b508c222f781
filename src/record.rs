use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row in an Airtable table.
///
/// `fields` is an opaque JSON object supplied by the caller; `id` and
/// `created_time` are assigned by the server and absent on records built for
/// creation. Absent members are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "createdTime", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub created_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub fields: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub id: Option<String>,
}

impl Record {
    /// Wraps an arbitrary field map into a record with no id or timestamp,
    /// ready for creation (the server assigns both).
    pub fn with_fields(fields: Value) -> Self {
        Record {
            created_time: None,
            fields: Some(fields),
            id: None,
        }
    }
}

/// The request/response envelope wrapping a list of records.
///
/// An empty list serializes as `"records": []` rather than omitting the
/// member, so creating zero records stays distinguishable from a body with
/// no `records` key at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub records: Vec<Record>,
}
