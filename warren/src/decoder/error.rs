use crate::model::error::describe_api_errors;
use crate::model::resource::ResourceIdentifier;
use serde_json::Value;
use thiserror::Error;

/// A resource identifier did not carry the type an identifier decoder expects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("tried to decode {{type: {actual_type}, id: {actual_id}}} as type {expected_type}")]
pub struct IdError {
    pub expected_type: String,
    pub actual_type: String,
    pub actual_id: String,
}

/// Field-level failure while turning one resource object into a record
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Error decoding resource id: {0}")]
    ResourceId(#[source] IdError),
    #[error("Missing attribute `{0}`")]
    AttributeMissing(String),
    #[error("Error decoding attribute `{name}`: {source}")]
    AttributeDecode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Wrong relationship shape for `{name}`: expected {expected}")]
    RelationshipNumber { name: String, expected: &'static str },
    #[error("Error decoding relationship `{name}`: {source}")]
    RelationshipId {
        name: String,
        #[source]
        source: IdError,
    },
    #[error("{0}")]
    Custom(String),
}

impl ResourceError {
    pub fn custom(message: impl ToString) -> Self { ResourceError::Custom(message.to_string()) }
}

/// Failure decoding a whole document against what the caller asked for
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Expected a single resource in `data`, found a list")]
    ExpectedOne,
    #[error("Expected a list of resources in `data`, found a single resource")]
    ExpectedMany,
    #[error("The API returned errors: {}", describe_api_errors(.0))]
    ApiErrors(Vec<Value>),
    #[error("Error decoding resource: {0}")]
    Resource(#[from] ResourceError),
    #[error("Error decoding included resource {resource}: {source}")]
    Included {
        resource: ResourceIdentifier,
        #[source]
        source: ResourceError,
    },
}
