use crate::decoder::error::{IdError, ResourceError};
use crate::decoder::identifier::IdentifierDecoder;
use crate::decoder::{DecodeResult, ResourceDecoder};
use crate::model::relationship::Relationship;
use crate::model::resource::{Resource, ResourceIdentifier};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

const EXACTLY_ONE: &str = "exactly one";
const ZERO_OR_ONE: &str = "zero or one";
const A_LIST: &str = "a list";

/// Read access to the parts of one resource, each accessor reads a disjoint part of it
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    resource: &'a Resource,
}

impl<'a> Fields<'a> {
    pub fn new(resource: &'a Resource) -> Self { Self { resource } }

    pub fn resource(&self) -> &'a Resource { self.resource }

    /// The resource's own identifier
    pub fn id<I>(&self, decoder: IdentifierDecoder<I>) -> DecodeResult<I> {
        decoder.decode(&self.resource.id).map_err(ResourceError::ResourceId)
    }

    pub fn attribute<T: DeserializeOwned>(&self, name: &str) -> DecodeResult<T> {
        self.attribute_with(name, |value| T::deserialize(value))
    }

    pub fn attribute_with<T, F>(&self, name: &str, decode: F) -> DecodeResult<T>
    where
        F: FnOnce(&Value) -> Result<T, serde_json::Error>,
    {
        let value = self
            .resource
            .attributes
            .get(name)
            .ok_or_else(|| ResourceError::AttributeMissing(name.into()))?;
        decode(value).map_err(|source| ResourceError::AttributeDecode { name: name.into(), source })
    }

    /// Absent and `null` attributes both decode to `None`
    pub fn attribute_maybe<T: DeserializeOwned>(&self, name: &str) -> DecodeResult<Option<T>> {
        match self.resource.attributes.get(name) {
            Some(value) => Option::<T>::deserialize(value)
                .map_err(|source| ResourceError::AttributeDecode { name: name.into(), source }),
            None => Ok(None),
        }
    }

    pub fn relationship_one<I>(&self, name: &str, decoder: IdentifierDecoder<I>) -> DecodeResult<I> {
        match self.resource.relationships.get(name) {
            Some(Relationship::One(id)) => related(name, decoder, id),
            _ => Err(wrong_shape(name, EXACTLY_ONE)),
        }
    }

    pub fn relationship_maybe<I>(
        &self, name: &str, decoder: IdentifierDecoder<I>,
    ) -> DecodeResult<Option<I>> {
        match self.resource.relationships.get(name) {
            Some(Relationship::One(id)) => related(name, decoder, id).map(Some),
            Some(Relationship::Missing) | None => Ok(None),
            Some(Relationship::Many(_)) => Err(wrong_shape(name, ZERO_OR_ONE)),
        }
    }

    /// An absent relationship is an empty list, the order of the source array is kept
    pub fn relationship_many<I>(
        &self, name: &str, decoder: IdentifierDecoder<I>,
    ) -> DecodeResult<Vec<I>> {
        match self.resource.relationships.get(name) {
            Some(Relationship::Many(ids)) => ids.iter().map(|id| related(name, decoder, id)).collect(),
            None => Ok(Vec::new()),
            Some(_) => Err(wrong_shape(name, A_LIST)),
        }
    }
}

fn related<I>(
    name: &str, decoder: IdentifierDecoder<I>, id: &ResourceIdentifier,
) -> DecodeResult<I> {
    decoder
        .decode(id)
        .map_err(|source: IdError| ResourceError::RelationshipId { name: name.into(), source })
}

fn wrong_shape(name: &str, expected: &'static str) -> ResourceError {
    ResourceError::RelationshipNumber { name: name.into(), expected }
}

pub fn id<I>(decoder: IdentifierDecoder<I>) -> impl ResourceDecoder<Output = I> {
    move |resource: &Resource| -> DecodeResult<I> { resource.fields().id(decoder) }
}

pub fn attribute<T: DeserializeOwned>(name: &str) -> impl ResourceDecoder<Output = T> {
    let name = name.to_owned();
    move |resource: &Resource| -> DecodeResult<T> { resource.fields().attribute(&name) }
}

/// Like [`attribute`] with a hand-written value decoder instead of `Deserialize`
pub fn attribute_with<T, F>(name: &str, decode: F) -> impl ResourceDecoder<Output = T>
where
    F: Fn(&Value) -> Result<T, serde_json::Error>,
{
    let name = name.to_owned();
    move |resource: &Resource| -> DecodeResult<T> {
        resource.fields().attribute_with(&name, &decode)
    }
}

pub fn attribute_maybe<T: DeserializeOwned>(name: &str) -> impl ResourceDecoder<Output = Option<T>> {
    let name = name.to_owned();
    move |resource: &Resource| -> DecodeResult<Option<T>> {
        resource.fields().attribute_maybe(&name)
    }
}

pub fn relationship_one<I>(
    name: &str, decoder: IdentifierDecoder<I>,
) -> impl ResourceDecoder<Output = I> {
    let name = name.to_owned();
    move |resource: &Resource| -> DecodeResult<I> {
        resource.fields().relationship_one(&name, decoder)
    }
}

pub fn relationship_maybe<I>(
    name: &str, decoder: IdentifierDecoder<I>,
) -> impl ResourceDecoder<Output = Option<I>> {
    let name = name.to_owned();
    move |resource: &Resource| -> DecodeResult<Option<I>> {
        resource.fields().relationship_maybe(&name, decoder)
    }
}

pub fn relationship_many<I>(
    name: &str, decoder: IdentifierDecoder<I>,
) -> impl ResourceDecoder<Output = Vec<I>> {
    let name = name.to_owned();
    move |resource: &Resource| -> DecodeResult<Vec<I>> {
        resource.fields().relationship_many(&name, decoder)
    }
}
