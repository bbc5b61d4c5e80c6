//! Entity kind registry and type-erased decoding.

use crate::contract::{RawObject, Serializable};
use crate::envelope::TaggedEntity;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};
use vaultwire_encoding::{EncodingError, EncodingResult};

/// Canonical tag for a kind name: ASCII lowercase with everything but
/// letters and digits removed (`"VaultItem"` becomes `"vaultitem"`).
#[must_use]
pub fn canonical_type_tag(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Object-safe view of a [`Serializable`] entity whose kind is only known
/// at runtime.
pub trait DynEntity: Any + Send + Sync {
    /// The entity's type tag.
    fn entity_type(&self) -> &'static str;

    /// Runs the entity's invariant check.
    fn is_valid(&self) -> bool;

    /// The entity's raw value.
    fn raw(&self) -> EncodingResult<RawObject>;

    /// Borrows the entity as [`Any`], for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Converts the boxed entity into a boxed [`Any`], for downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<E: Serializable + Send + Sync + 'static> DynEntity for E {
    fn entity_type(&self) -> &'static str {
        E::TYPE
    }

    fn is_valid(&self) -> bool {
        self.validate()
    }

    fn raw(&self) -> EncodingResult<RawObject> {
        self.to_raw()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn DynEntity {
    /// Borrows the entity as `E` if that is its concrete kind.
    #[must_use]
    pub fn downcast_ref<E: 'static>(&self) -> Option<&E> {
        self.as_any().downcast_ref()
    }

    /// Takes the entity as `E` if that is its concrete kind.
    #[must_use]
    pub fn into_entity<E: 'static>(self: Box<Self>) -> Option<E> {
        self.into_any().downcast::<E>().ok().map(|boxed| *boxed)
    }
}

impl fmt::Debug for dyn DynEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynEntity")
            .field("type", &self.entity_type())
            .finish_non_exhaustive()
    }
}

type Decoder = fn(&RawObject) -> EncodingResult<Box<dyn DynEntity>>;

fn decode_as<E: Serializable + Send + Sync + 'static>(
    raw: &RawObject,
) -> EncodingResult<Box<dyn DynEntity>> {
    Ok(Box::new(E::restore(raw)?))
}

/// The set of entity kinds known to a domain, keyed by type tag.
///
/// Registration rejects empty, non-canonical and duplicate tags, so every
/// tag maps to exactly one kind.
#[derive(Default)]
pub struct EntityRegistry {
    decoders: BTreeMap<&'static str, Decoder>,
}

impl EntityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers entity kind `E` under `E::TYPE`.
    pub fn register<E: Serializable + Send + Sync + 'static>(&mut self) -> EncodingResult<&mut Self> {
        let tag = E::TYPE;
        if tag.is_empty() {
            return Err(EncodingError::Registry("empty type tag".into()));
        }
        if canonical_type_tag(tag) != tag {
            return Err(EncodingError::Registry(format!(
                "type tag `{tag}` is not canonical (expected `{}`)",
                canonical_type_tag(tag)
            )));
        }
        if self.decoders.contains_key(tag) {
            warn!(type_tag = tag, "duplicate entity registration");
            return Err(EncodingError::Registry(format!(
                "type tag `{tag}` is already registered"
            )));
        }
        self.decoders.insert(tag, decode_as::<E>);
        debug!(type_tag = tag, "entity kind registered");
        Ok(self)
    }

    /// Whether `tag` is registered.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.decoders.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Restores an entity of the kind registered under `tag`.
    pub fn decode(&self, tag: &str, raw: &RawObject) -> EncodingResult<Box<dyn DynEntity>> {
        let decoder = self
            .decoders
            .get(tag)
            .ok_or_else(|| EncodingError::Registry(format!("unknown type tag `{tag}`")))?;
        decoder(raw)
    }

    /// Restores the entity carried by a tagged envelope.
    pub fn decode_tagged(&self, tagged: &TaggedEntity) -> EncodingResult<Box<dyn DynEntity>> {
        self.decode(&tagged.type_tag, &tagged.data)
    }
}

impl fmt::Debug for EntityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityRegistry")
            .field("tags", &self.decoders.keys().collect::<Vec<_>>())
            .finish()
    }
}
