use crate::error::ShapeError;
use crate::model::link::{self, Links};
use crate::model::resource::{Resource, Resources};
use crate::model::version::JsonApiVersion;
use crate::model::{JsonApiInfo, Meta};
use core::fmt;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::slice;
use std::str::FromStr;

pub type Included = Vec<Resource>;

/// Top-level content of a response, exactly one of these matches a well-formed body
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentItem {
    One { data: Box<Resource>, included: Included },
    Many { data: Resources, included: Included },
    /// Raw entries of the `errors` member, see [`crate::model::error::ApiError`] for a typed view
    ApiErrors(Vec<Value>),
}

/// A parsed response body: primary data or errors, plus the top-level `links`, `meta` and `jsonapi` members
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub item: DocumentItem,
    pub links: Links,
    pub meta: Meta,
    pub jsonapi: Option<JsonApiInfo>,
}

impl Document {
    pub fn single_resource(resource: Resource, included: Included) -> Self {
        Self::from_item(DocumentItem::One { data: Box::new(resource), included })
    }

    pub fn multiple_resources(resources: Resources, included: Included) -> Self {
        Self::from_item(DocumentItem::Many { data: resources, included })
    }

    pub fn api_errors(errors: Vec<Value>) -> Self { Self::from_item(DocumentItem::ApiErrors(errors)) }

    fn from_item(item: DocumentItem) -> Self {
        Self { item, links: Default::default(), meta: Default::default(), jsonapi: None }
    }

    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Primary resources in source order, empty for an error document
    pub fn primary(&self) -> &[Resource] {
        match &self.item {
            DocumentItem::One { data, .. } => slice::from_ref(data.as_ref()),
            DocumentItem::Many { data, .. } => data.as_slice(),
            DocumentItem::ApiErrors(_) => &[],
        }
    }

    /// Sideloaded resources in source order, empty for an error document
    pub fn included(&self) -> &[Resource] {
        match &self.item {
            DocumentItem::One { included, .. } | DocumentItem::Many { included, .. } => {
                included.as_slice()
            },
            DocumentItem::ApiErrors(_) => &[],
        }
    }

    pub fn is_api_errors(&self) -> bool { matches!(self.item, DocumentItem::ApiErrors(_)) }
}

impl FromStr for Document {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse_document(s) }
}

/// Parses a response body into the untyped document model
pub fn parse_document(json: &str) -> Result<Document, ShapeError> {
    let document: Document = serde_json::from_str(json)?;
    log_parsed(&document);
    Ok(document)
}

pub fn parse_document_slice(json: &[u8]) -> Result<Document, ShapeError> {
    let document: Document = serde_json::from_slice(json)?;
    log_parsed(&document);
    Ok(document)
}

fn log_parsed(document: &Document) {
    let version = match document.jsonapi.as_ref().and_then(JsonApiInfo::version) {
        Some(Ok(version)) if version.is_supported() => version,
        Some(Ok(version)) => {
            warn!("Document announces JSON:API {}, decoding it as {}", version, JsonApiVersion::V1_1);
            version
        },
        Some(Err(err)) => {
            warn!("{}, decoding the document as JSON:API {}", err, JsonApiVersion::default());
            JsonApiVersion::default()
        },
        None => JsonApiVersion::default(),
    };
    match &document.item {
        DocumentItem::ApiErrors(errors) => {
            debug!("Parsed error document with {} error(s), JSON:API {}", errors.len(), version)
        },
        _ => debug!(
            "Parsed document with {} primary and {} included resource(s), JSON:API {}",
            document.primary().len(),
            document.included().len(),
            version
        ),
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Document", 5)?;
        match &self.item {
            DocumentItem::One { data, included } => {
                state.serialize_field("data", data)?;
                if !included.is_empty() {
                    state.serialize_field("included", included)?;
                }
            },
            DocumentItem::Many { data, included } => {
                state.serialize_field("data", data)?;
                if !included.is_empty() {
                    state.serialize_field("included", included)?;
                }
            },
            DocumentItem::ApiErrors(errors) => {
                state.serialize_field("errors", errors)?;
            },
        }

        if !self.links.is_empty() {
            state.serialize_field("links", &self.links)?;
        }
        if !self.meta.is_empty() {
            state.serialize_field("meta", &self.meta)?;
        }
        if let Some(ref jsonapi) = self.jsonapi {
            state.serialize_field("jsonapi", jsonapi)?;
        }

        state.end()
    }
}

struct DocumentVisitor;

/// Top-level members as sent, before the document shape is decided
#[derive(Default)]
struct RawDocument {
    links: Option<Value>,
    meta: Option<Value>,
    jsonapi: Option<Value>,
    data: Option<Value>,
    included: Option<Value>,
    errors: Option<Value>,
}

impl RawDocument {
    fn into_document(self) -> Result<Document, serde_json::Error> {
        let RawDocument { links, meta, jsonapi, data, included, errors } = self;

        // `errors` excludes `data`, so it is tried first, then a single resource, then a list
        let item = match (errors, data) {
            (Some(errors), _) => DocumentItem::ApiErrors(serde_json::from_value(errors)?),
            (None, Some(data @ Value::Object(_))) => DocumentItem::One {
                data: Box::new(serde_json::from_value(data)?),
                included: parse_included(included)?,
            },
            (None, Some(data @ Value::Array(_))) => DocumentItem::Many {
                data: serde_json::from_value(data)?,
                included: parse_included(included)?,
            },
            (None, Some(_)) => {
                return Err(de::Error::custom(
                    "field `data` must be a resource object or an array of resource objects",
                ));
            },
            (None, None) => {
                return Err(de::Error::custom("document must contain either `data` or `errors`"));
            },
        };

        let links = match links {
            Some(links) => link::deserialize_links(links)?,
            None => Default::default(),
        };
        let meta = match meta {
            Some(meta) => serde_json::from_value::<Option<Meta>>(meta)?.unwrap_or_default(),
            None => Default::default(),
        };
        let jsonapi = match jsonapi {
            Some(jsonapi) => serde_json::from_value::<Option<JsonApiInfo>>(jsonapi)?,
            None => None,
        };

        Ok(Document { item, links, meta, jsonapi })
    }
}

fn parse_included(included: Option<Value>) -> Result<Included, serde_json::Error> {
    match included {
        Some(included) => serde_json::from_value(included),
        None => Ok(Default::default()),
    }
}

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a JSON:API document object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut raw = RawDocument::default();

        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            let slot = match key.as_str() {
                "links" => &mut raw.links,
                "meta" => &mut raw.meta,
                "jsonapi" => &mut raw.jsonapi,
                "data" => &mut raw.data,
                "included" => &mut raw.included,
                "errors" => &mut raw.errors,
                _ => continue,
            };
            if slot.is_some() {
                return Err(de::Error::custom(format!("duplicate field `{}`", key)));
            }
            *slot = Some(value);
        }

        raw.into_document().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DocumentVisitor)
    }
}
