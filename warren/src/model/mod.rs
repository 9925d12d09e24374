pub mod document;
pub mod error;
pub mod link;
pub mod relationship;
pub mod resource;
pub mod version;

use crate::model::version::JsonApiVersion;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

/// Meta-data object, can contain any data
pub type Meta = HashMap<String, Value>;
pub type Id = String;

/// Optional top-level member identifying the JSON:API version the server implements
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct JsonApiInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl JsonApiInfo {
    /// `None` when the server did not announce a version
    pub fn version(&self) -> Option<crate::Result<JsonApiVersion>> {
        self.version.as_ref().map(|v| v.parse())
    }
}

/// Buffers one value and rejects anything but a JSON object, the array form of a struct is
/// not a valid resource or identifier
pub(crate) fn object_only<'de, D>(deserializer: D, expected: &'static str) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        object @ Value::Object(_) => Ok(object),
        other => Err(de::Error::invalid_type(unexpected(&other), &expected)),
    }
}

pub(crate) fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => n.as_f64().map_or(Unexpected::Other("number"), Unexpected::Float),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
