use crate::decoder::error::{DocumentError, ResourceError};
use crate::decoder::identifier::TypedId;
use crate::decoder::ResourceDecoder;
use crate::model::resource::Resource;
use crate::settings::{DecodeSettings, IncludedPolicy};
use std::collections::HashMap;
use std::fmt;

type Update<I> = Box<dyn Fn(&Resource, &mut I) -> Result<(), ResourceError> + Send + Sync>;

/// Type label to decoder table used to fold sideloaded resources into a caller-defined `I`
///
/// `I` is usually a struct holding one `HashMap<TypedId, Record>` per known resource type.
/// Resources whose type has no entry are skipped, so new types on the server side never break
/// the resources the caller asked for.
pub struct IncludedDecoders<I> {
    decoders: HashMap<String, Update<I>>,
    settings: DecodeSettings,
}

impl<I> Default for IncludedDecoders<I> {
    fn default() -> Self { Self::with_settings(Default::default()) }
}

impl<I> fmt::Debug for IncludedDecoders<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<&String> = self.decoders.keys().collect();
        types.sort();
        f.debug_struct("IncludedDecoders")
            .field("types", &types)
            .field("settings", &self.settings)
            .finish()
    }
}

impl<I> IncludedDecoders<I> {
    pub fn new() -> Self { Default::default() }

    pub fn with_settings(settings: DecodeSettings) -> Self {
        Self { decoders: Default::default(), settings }
    }

    pub fn settings(&self) -> &DecodeSettings { &self.settings }

    /// Registers `decoder` for resources of type `ty`, `insert` stores the decoded record
    ///
    /// A later registration for the same type replaces the earlier one.
    pub fn register<D, F>(mut self, ty: &str, decoder: D, insert: F) -> Self
    where
        D: ResourceDecoder + Send + Sync + 'static,
        F: Fn(&mut I, D::Output) + Send + Sync + 'static,
        I: 'static,
    {
        let update = move |resource: &Resource, included: &mut I| -> Result<(), ResourceError> {
            let record = decoder.decode(resource)?;
            insert(included, record);
            Ok(())
        };
        self.decoders.insert(ty.into(), Box::new(update));
        self
    }

    /// Same as [`register`](Self::register) with the type label taken from the typed id
    pub fn register_typed<Id, D, F>(self, decoder: D, insert: F) -> Self
    where
        Id: TypedId,
        D: ResourceDecoder + Send + Sync + 'static,
        F: Fn(&mut I, D::Output) + Send + Sync + 'static,
        I: 'static,
    {
        self.register(Id::RESOURCE_TYPE, decoder, insert)
    }

    pub fn is_registered(&self, ty: &str) -> bool { self.decoders.contains_key(ty) }

    /// Applies the table to `resources` in order, so a duplicate id ends up holding the last
    /// resource seen
    pub fn accumulate<'r, R>(&self, resources: R, mut included: I) -> Result<I, DocumentError>
    where
        R: IntoIterator<Item = &'r Resource>,
    {
        for resource in resources {
            self.apply(resource, &mut included)?;
        }
        Ok(included)
    }

    fn apply(&self, resource: &Resource, included: &mut I) -> Result<(), DocumentError> {
        let update = match self.decoders.get(&resource.id.ty) {
            Some(update) => update,
            None => {
                debug!("Skipping included resource {}, its type is not registered", resource.id);
                return Ok(());
            },
        };

        match (update(resource, included), self.settings.included) {
            (Ok(()), _) => Ok(()),
            (Err(source), IncludedPolicy::Strict) => {
                Err(DocumentError::Included { resource: resource.id.clone(), source })
            },
            (Err(err), IncludedPolicy::Lenient) => {
                warn!("Skipping included resource {}: {}", resource.id, err);
                Ok(())
            },
        }
    }
}
