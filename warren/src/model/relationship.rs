use crate::model::resource::{ResourceIdentifier, ResourceIdentifiers};
use crate::model::unexpected;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::slice;

pub type Relationships = HashMap<String, Relationship>;

/// Linkage of a relationship whose `data` member was present
///
/// A name missing from [`Relationships`] means the relationship was not sent at all, or was
/// sent with only `links`/`meta`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(into = "RelationshipObject")]
pub enum Relationship {
    /// `"data": null`
    Missing,
    One(ResourceIdentifier),
    /// Keeps the order of the source array
    Many(ResourceIdentifiers),
}

impl Relationship {
    /// All identifiers of the linkage, in source order
    pub fn identifiers(&self) -> &[ResourceIdentifier] {
        match self {
            Relationship::Missing => &[],
            Relationship::One(id) => slice::from_ref(id),
            Relationship::Many(ids) => ids.as_slice(),
        }
    }
}

/// Valid Resource Identifier (can be None)
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
#[serde(untagged)]
pub enum IdentifierData {
    Single(Option<ResourceIdentifier>),
    Multiple(ResourceIdentifiers),
}

impl From<IdentifierData> for Relationship {
    fn from(data: IdentifierData) -> Self {
        match data {
            IdentifierData::Single(None) => Relationship::Missing,
            IdentifierData::Single(Some(id)) => Relationship::One(id),
            IdentifierData::Multiple(ids) => Relationship::Many(ids),
        }
    }
}

impl From<Relationship> for IdentifierData {
    fn from(relationship: Relationship) -> Self {
        match relationship {
            Relationship::Missing => IdentifierData::Single(None),
            Relationship::One(id) => IdentifierData::Single(Some(id)),
            Relationship::Many(ids) => IdentifierData::Multiple(ids),
        }
    }
}

/// Relationship object as it appears on the wire, `links` and `meta` are not kept
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct RelationshipObject {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<IdentifierData>,
}

impl From<Relationship> for RelationshipObject {
    fn from(relationship: Relationship) -> Self { Self { data: Some(relationship.into()) } }
}

/// Only called when the member exists, so `"data": null` becomes `Some(Single(None))` while
/// an absent `data` falls back to `None`
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<IdentifierData>, D::Error>
where
    D: Deserializer<'de>,
{
    let data = match Value::deserialize(deserializer)? {
        Value::Null => IdentifierData::Single(None),
        id @ Value::Object(_) => {
            IdentifierData::Single(Some(ResourceIdentifier::deserialize(id).map_err(de::Error::custom)?))
        },
        ids @ Value::Array(_) => {
            IdentifierData::Multiple(ResourceIdentifiers::deserialize(ids).map_err(de::Error::custom)?)
        },
        other => {
            return Err(de::Error::invalid_type(
                unexpected(&other),
                &"null, a resource identifier object or an array of them",
            ));
        },
    };
    Ok(Some(data))
}
