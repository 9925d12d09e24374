use crate::decoder::error::DocumentError;
use thiserror::Error;

/// The raw payload is not a JSON:API document this crate understands
#[derive(Error, Debug)]
#[error("Invalid JSON:API document: {0}")]
pub struct ShapeError(#[from] pub serde_json::Error);

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("Invalid JSON:API version: {0}, the valid format: `<major>.<minor>`")]
    InvalidJsonApiVersion(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self { Error::Shape(err.into()) }
}
