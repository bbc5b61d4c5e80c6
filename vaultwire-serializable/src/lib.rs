//! The serialization contract shared by every Vaultwire entity.
//!
//! Accounts, vault items, crypto envelopes and sync payloads all implement
//! [`Serializable`], which gives them one conversion pipeline:
//!
//! ```text
//! entity ──to_raw──▶ RawObject ──marshal──▶ JSON text ──UTF-8──▶ bytes
//! entity ◀─from_raw── RawObject ◀─unmarshal── JSON text ◀─UTF-8── bytes
//! ```
//!
//! - [`Serializable`] — explicit per-entity field mapping plus derived
//!   JSON/byte conversions; every restore passes the validation gate
//! - [`FieldWriter`] / [`FieldReader`] — the mapping surface, enforcing
//!   private-name and exclusion rules and recursing into nested entities
//! - [`EntityRegistry`] — unique type tags and type-erased decoding
//! - [`TaggedEntity`] — `{"type", "data"}` wrapper for heterogeneous payloads

mod contract;
mod envelope;
mod fields;
mod registry;

pub use contract::{RawObject, Serializable};
pub use envelope::TaggedEntity;
pub use fields::{FieldReader, FieldWriter, PRIVATE_PREFIX};
pub use registry::{canonical_type_tag, DynEntity, EntityRegistry};

pub use vaultwire_encoding::{EncodingError, EncodingResult};
