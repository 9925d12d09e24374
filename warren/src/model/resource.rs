use crate::decoder::field::Fields;
use crate::model::link::{self, Links};
use crate::model::relationship::{Relationship, RelationshipObject, Relationships};
use crate::model::{object_only, Id, Meta};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

pub type ResourceIdentifiers = Vec<ResourceIdentifier>;
pub type Resources = Vec<Resource>;

/// Attribute bag of a resource, kept exactly as sent. Values stay raw JSON until a field decoder
/// reads them, and keys such as `type` are ordinary attributes here.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Attributes(HashMap<String, Value>);

impl From<HashMap<String, Value>> for Attributes {
    fn from(map: HashMap<String, Value>) -> Self { Self(map) }
}

impl Attributes {
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }

    pub fn contains_key(&self, key: &str) -> bool { self.0.contains_key(key) }

    pub fn insert(&mut self, key: impl ToString, value: Value) -> Option<Value> {
        self.0.insert(key.to_string(), value)
    }
}

/// Resource Identifier
#[derive(Serialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: Id,
}

impl ResourceIdentifier {
    pub fn new(ty: impl Into<String>, id: impl Into<Id>) -> Self {
        Self { ty: ty.into(), id: id.into() }
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{type: {}, id: {}}}", self.ty, self.id)
    }
}

#[derive(Deserialize)]
struct RawIdentifier {
    #[serde(rename = "type")]
    ty: String,
    id: Id,
}

impl<'de> Deserialize<'de> for ResourceIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = object_only(deserializer, "a resource identifier object")?;
        let RawIdentifier { ty, id } =
            RawIdentifier::deserialize(object).map_err(de::Error::custom)?;
        Ok(Self { ty, id })
    }
}

/// JSON-API Resource
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Resource {
    #[serde(flatten)]
    pub id: ResourceIdentifier,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub relationships: Relationships,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub links: Links,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub meta: Meta,
}

impl Resource {
    pub fn new(id: ResourceIdentifier) -> Self {
        Self {
            id,
            attributes: Default::default(),
            relationships: Default::default(),
            links: Default::default(),
            meta: Default::default(),
        }
    }

    pub fn with_attribute(mut self, key: impl ToString, value: Value) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_relationship(mut self, name: impl ToString, relationship: Relationship) -> Self {
        self.relationships.insert(name.to_string(), relationship);
        self
    }

    pub fn is_resource_id(&self, id: &ResourceIdentifier) -> bool { &self.id == id }

    /// Field-by-field access used to build typed records
    pub fn fields(&self) -> Fields<'_> { Fields::new(self) }
}

/// Wire shape of a resource object before relationships are normalised
#[derive(Deserialize)]
struct RawResource {
    #[serde(rename = "type")]
    ty: String,
    id: Id,
    #[serde(default)]
    attributes: Option<Attributes>,
    #[serde(default)]
    relationships: Option<HashMap<String, RelationshipObject>>,
    #[serde(default, deserialize_with = "link::deserialize_links")]
    links: Links,
    #[serde(default)]
    meta: Option<Meta>,
}

impl From<RawResource> for Resource {
    fn from(raw: RawResource) -> Self {
        let RawResource { ty, id, attributes, relationships, links, meta } = raw;
        // a relationship object without `data` carries nothing we can follow
        let relationships = relationships
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(name, object)| object.data.map(|data| (name, data.into())))
            .collect();
        Self {
            id: ResourceIdentifier { ty, id },
            attributes: attributes.unwrap_or_default(),
            relationships,
            links,
            meta: meta.unwrap_or_default(),
        }
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = object_only(deserializer, "a resource object")?;
        RawResource::deserialize(object).map(Resource::from).map_err(de::Error::custom)
    }
}
