//! Entity model for entkit.
//!
//! Defines the record type that carries loosely-typed data through an
//! application without a fixed schema:
//! - [`Entity`]: type tag, dynamically-typed fields, named child relations, dirty flag
//! - [`EntityArray`]: the ordered children stored under one relation name
//! - [`EntityError`]: coercion, lookup and serialization failures, annotated with the field name
//! - [`EncodeConfig`]: JSON export layout
//!
//! Typed accessors (`get_i64`, `get_string`, …) coerce the stored
//! [`Value`] per the rules in `entkit-types`. Deep copies go through the
//! JSON representation, which is also the export format.

mod array;
mod config;
mod entity;
mod error;

pub use array::EntityArray;
pub use config::EncodeConfig;
pub use entity::Entity;
pub use entkit_types::{Opaque, Timestamp, Value};
pub use error::{EntityError, ErrorKind, Result};
