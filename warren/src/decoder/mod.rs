//! Typed decoding of resources and documents.
//!
//! A [`ResourceDecoder`] turns one [`Resource`] into one record. Decoders are either plain
//! functions reading the resource through [`Resource::fields`]:
//!
//! ```
//! use warren::decoder::error::ResourceError;
//! use warren::model::resource::Resource;
//!
//! warren::typed_id!(pub StopId => "stop");
//!
//! struct Stop {
//!     id: StopId,
//!     name: String,
//!     parent_station: Option<StopId>,
//! }
//!
//! fn stop(resource: &Resource) -> Result<Stop, ResourceError> {
//!     let fields = resource.fields();
//!     Ok(Stop {
//!         id: fields.id(StopId::DECODER)?,
//!         name: fields.attribute("name")?,
//!         parent_station: fields.relationship_maybe("parent_station", StopId::DECODER)?,
//!     })
//! }
//!
//! let json = r#"{"data": {"type": "stop", "id": "70070", "attributes": {"name": "Central"}}}"#;
//! let stop = warren::decode_one_str(json, stop).unwrap();
//! assert_eq!(stop.name, "Central");
//! ```
//!
//! or values built from the combinators in this module (`id`, `attribute`,
//! `relationship_one`, ...) joined with [`ResourceDecoder::and`] and finished with
//! [`ResourceDecoder::map`]. Both forms stop at the first failing field, in field order.

pub mod document;
pub mod error;
pub mod field;
pub mod identifier;
pub mod included;

pub use self::field::{
    attribute, attribute_maybe, attribute_with, id, relationship_many, relationship_maybe,
    relationship_one, Fields,
};
pub use self::identifier::{IdentifierDecoder, TypedId};
pub use self::included::IncludedDecoders;

use crate::decoder::error::ResourceError;
use crate::model::resource::Resource;

pub type DecodeResult<T> = Result<T, ResourceError>;

/// Boxed decoder, handy for storing decoders of different shapes side by side
pub type BoxedDecoder<'a, T> = Box<dyn Fn(&Resource) -> DecodeResult<T> + Send + Sync + 'a>;

pub trait ResourceDecoder {
    type Output;

    fn decode(&self, resource: &Resource) -> DecodeResult<Self::Output>;

    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { decoder: self, f }
    }

    /// Picks the next decoder from the value decoded so far, both run on the same resource
    fn and_then<F, D>(self, f: F) -> AndThen<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> D,
        D: ResourceDecoder,
    {
        AndThen { decoder: self, f }
    }

    /// Pairs two decoders, `self` runs first and its error wins
    fn and<D>(self, other: D) -> And<Self, D>
    where
        Self: Sized,
        D: ResourceDecoder,
    {
        And { first: self, second: other }
    }

    fn boxed<'a>(self) -> BoxedDecoder<'a, Self::Output>
    where
        Self: Sized + Send + Sync + 'a,
    {
        Box::new(move |resource: &Resource| self.decode(resource))
    }
}

impl<F, T> ResourceDecoder for F
where
    F: Fn(&Resource) -> DecodeResult<T>,
{
    type Output = T;

    fn decode(&self, resource: &Resource) -> DecodeResult<T> { self(resource) }
}

#[derive(Debug, Clone)]
pub struct Map<D, F> {
    decoder: D,
    f: F,
}

impl<D, F, U> ResourceDecoder for Map<D, F>
where
    D: ResourceDecoder,
    F: Fn(D::Output) -> U,
{
    type Output = U;

    fn decode(&self, resource: &Resource) -> DecodeResult<U> {
        self.decoder.decode(resource).map(&self.f)
    }
}

#[derive(Debug, Clone)]
pub struct AndThen<D, F> {
    decoder: D,
    f: F,
}

impl<D, F, E> ResourceDecoder for AndThen<D, F>
where
    D: ResourceDecoder,
    F: Fn(D::Output) -> E,
    E: ResourceDecoder,
{
    type Output = E::Output;

    fn decode(&self, resource: &Resource) -> DecodeResult<E::Output> {
        let value = self.decoder.decode(resource)?;
        (self.f)(value).decode(resource)
    }
}

#[derive(Debug, Clone)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A, B> ResourceDecoder for And<A, B>
where
    A: ResourceDecoder,
    B: ResourceDecoder,
{
    type Output = (A::Output, B::Output);

    fn decode(&self, resource: &Resource) -> DecodeResult<Self::Output> {
        let first = self.first.decode(resource)?;
        let second = self.second.decode(resource)?;
        Ok((first, second))
    }
}

/// Splices in an arbitrary decoding function, mostly useful to give closures the right
/// signature
pub fn custom<F, T>(f: F) -> F
where
    F: Fn(&Resource) -> DecodeResult<T>,
{
    f
}

/// Always decodes to `value`
pub fn succeed<T: Clone>(value: T) -> impl ResourceDecoder<Output = T> {
    move |_: &Resource| -> DecodeResult<T> { Ok(value.clone()) }
}

/// Always fails with `message`
pub fn fail<T>(message: &str) -> impl ResourceDecoder<Output = T> {
    let message = message.to_owned();
    move |_: &Resource| -> DecodeResult<T> { Err(ResourceError::custom(&message)) }
}
