use crate::decoder::error::IdError;
use crate::model::resource::ResourceIdentifier;
use crate::model::Id;
use std::fmt;

/// Turns an untyped `(type, id)` pair into the typed identifier `I`
///
/// This is the only place where JSON:API identifiers become domain identifiers, the field
/// decoders for ids and relationships all go through it.
pub struct IdentifierDecoder<I> {
    expected_type: &'static str,
    construct: fn(Id) -> I,
}

impl<I> IdentifierDecoder<I> {
    pub const fn new(expected_type: &'static str, construct: fn(Id) -> I) -> Self {
        Self { expected_type, construct }
    }

    pub fn expected_type(&self) -> &'static str { self.expected_type }

    pub fn decode(&self, identifier: &ResourceIdentifier) -> Result<I, IdError> {
        if identifier.ty == self.expected_type {
            Ok((self.construct)(identifier.id.clone()))
        } else {
            Err(IdError {
                expected_type: self.expected_type.into(),
                actual_type: identifier.ty.clone(),
                actual_id: identifier.id.clone(),
            })
        }
    }
}

impl<I> Clone for IdentifierDecoder<I> {
    fn clone(&self) -> Self { *self }
}

impl<I> Copy for IdentifierDecoder<I> {}

impl<I> fmt::Debug for IdentifierDecoder<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierDecoder").field("expected_type", &self.expected_type).finish()
    }
}

/// Implemented by the identifiers declared with [`typed_id!`](crate::typed_id)
pub trait TypedId: Sized {
    const RESOURCE_TYPE: &'static str;

    fn decoder() -> IdentifierDecoder<Self>;

    fn as_str(&self) -> &str;
}
