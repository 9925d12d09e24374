use crate::decoder::error::DocumentError;
use crate::decoder::included::IncludedDecoders;
use crate::decoder::ResourceDecoder;
use crate::model::document::{parse_document, Document, DocumentItem};
use crate::Result;

/// Typed primary data together with the typed sideloaded resources of the same response
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T, I> {
    pub data: T,
    pub included: I,
}

impl Document {
    /// Decodes the primary data of a single-resource response
    pub fn decode_one<D>(&self, decoder: D) -> std::result::Result<D::Output, DocumentError>
    where
        D: ResourceDecoder,
    {
        match &self.item {
            DocumentItem::One { data, .. } => Ok(decoder.decode(data)?),
            DocumentItem::Many { .. } => Err(DocumentError::ExpectedOne),
            DocumentItem::ApiErrors(errors) => Err(DocumentError::ApiErrors(errors.clone())),
        }
    }

    /// Decodes the primary data of a collection response, the first failing resource fails
    /// the whole call
    pub fn decode_many<D>(&self, decoder: D) -> std::result::Result<Vec<D::Output>, DocumentError>
    where
        D: ResourceDecoder,
    {
        match &self.item {
            DocumentItem::Many { data, .. } => {
                let records = data
                    .iter()
                    .map(|resource| decoder.decode(resource))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(records)
            },
            DocumentItem::One { .. } => Err(DocumentError::ExpectedMany),
            DocumentItem::ApiErrors(errors) => Err(DocumentError::ApiErrors(errors.clone())),
        }
    }

    /// Folds the sideloaded resources (and the primary ones when the table's settings ask for
    /// it) into `init`
    pub fn decode_included<I>(
        &self, decoders: &IncludedDecoders<I>, init: I,
    ) -> std::result::Result<I, DocumentError> {
        if let DocumentItem::ApiErrors(errors) = &self.item {
            return Err(DocumentError::ApiErrors(errors.clone()));
        }
        let included = self.included().iter();
        if decoders.settings().fold_primary {
            decoders.accumulate(self.primary().iter().chain(included), init)
        } else {
            decoders.accumulate(included, init)
        }
    }

    pub fn decode_one_with_included<D, I>(
        &self, decoder: D, decoders: &IncludedDecoders<I>,
    ) -> std::result::Result<Decoded<D::Output, I>, DocumentError>
    where
        D: ResourceDecoder,
        I: Default,
    {
        let data = self.decode_one(decoder)?;
        let included = self.decode_included(decoders, I::default())?;
        Ok(Decoded { data, included })
    }

    pub fn decode_many_with_included<D, I>(
        &self, decoder: D, decoders: &IncludedDecoders<I>,
    ) -> std::result::Result<Decoded<Vec<D::Output>, I>, DocumentError>
    where
        D: ResourceDecoder,
        I: Default,
    {
        let data = self.decode_many(decoder)?;
        let included = self.decode_included(decoders, I::default())?;
        Ok(Decoded { data, included })
    }
}

/// Parses `json` and decodes its single primary resource
pub fn decode_one_str<D: ResourceDecoder>(json: &str, decoder: D) -> Result<D::Output> {
    Ok(parse_document(json)?.decode_one(decoder)?)
}

/// Parses `json` and decodes its list of primary resources
pub fn decode_many_str<D: ResourceDecoder>(json: &str, decoder: D) -> Result<Vec<D::Output>> {
    Ok(parse_document(json)?.decode_many(decoder)?)
}
