#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[macro_use]
pub mod macros;
pub mod decoder;
pub mod error;
pub mod model;
pub mod settings;

pub use crate::decoder::document::{decode_many_str, decode_one_str, Decoded};
pub use crate::model::document::{parse_document, parse_document_slice};
