use crate::model::link::{self, Links};
use crate::model::Meta;
use itertools::Itertools;
use serde::Deserialize;
use serde_json::Value;

/// Error location
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ErrorSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

/// Typed view of one entry of a top-level `errors` array
/// All fields are optional
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "link::deserialize_links")]
    #[serde(skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl ApiError {
    pub fn from_value(value: &Value) -> Option<Self> { Self::deserialize(value).ok() }

    /// One-line summary, `None` when the object has no human readable member
    pub fn summary(&self) -> Option<String> {
        let parts = vec![
            self.status.as_ref().map(|s| format!("status {}", s)),
            self.code.as_ref().map(|c| format!("code {}", c)),
            self.title.clone(),
            self.detail.clone(),
        ];
        let summary = parts.into_iter().flatten().join(", ");
        if summary.is_empty() {
            None
        } else {
            Some(summary)
        }
    }
}

/// Renders a raw `errors` payload, falling back to the JSON text for entries that are not
/// error objects
pub(crate) fn describe_api_errors(errors: &[Value]) -> String {
    errors
        .iter()
        .map(|value| {
            ApiError::from_value(value)
                .and_then(|err| err.summary())
                .unwrap_or_else(|| value.to_string())
        })
        .join("; ")
}
