use std::collections::BTreeMap;

use entkit_types::{Timestamp, Value};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{EncodeConfig, EntityArray, EntityError, Result};

/// A dynamically-typed record moved through the application without a fixed
/// schema, e.g. a database row or a decoded wire payload.
///
/// Fields and relations are kept in name order, so equal entities always
/// encode to the same bytes. The entity owns its fields and children
/// outright. [`Entity::get`] hands out a live reference;
/// [`Entity::try_clone`] is the only way to obtain an independent copy.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    entity_type: String,
    #[serde(default)]
    fields: BTreeMap<String, Value>,
    #[serde(default)]
    children: BTreeMap<String, EntityArray>,
    #[serde(default = "not_yet_persisted")]
    dirty: bool,
}

fn not_yet_persisted() -> bool {
    true
}

impl Entity {
    /// Creates an empty entity of the given type. New entities start dirty.
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            fields: BTreeMap::new(),
            children: BTreeMap::new(),
            dirty: true,
        }
    }

    /// The logical kind of this record (e.g. "person").
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// All fields by name.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Nested one-to-many relations by name.
    pub fn children(&self) -> &BTreeMap<String, EntityArray> {
        &self.children
    }

    /// Mutable access to the relations; the caller manages their content.
    pub fn children_mut(&mut self) -> &mut BTreeMap<String, EntityArray> {
        &mut self.children
    }

    /// Inserts or overwrites a field. The stored type may change freely and
    /// the dirty flag is left alone.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Raw lookup without coercion. `None` means absent; a present null is
    /// `Some(&Value::Null)`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns true if the field is present, even when it holds null.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Removes a field, returning its value. The dirty flag is left alone.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    pub fn get_i64(&self, name: &str) -> Result<i64> {
        self.lookup(name)?
            .coerce_i64()
            .map_err(|e| EntityError::coerce(name, e))
    }

    pub fn get_u64(&self, name: &str) -> Result<u64> {
        self.lookup(name)?
            .coerce_u64()
            .map_err(|e| EntityError::coerce(name, e))
    }

    pub fn get_f64(&self, name: &str) -> Result<f64> {
        self.lookup(name)?
            .coerce_f64()
            .map_err(|e| EntityError::coerce(name, e))
    }

    /// Floats come back in fixed six-decimal notation and booleans as
    /// `"true"`/`"false"`.
    pub fn get_string(&self, name: &str) -> Result<String> {
        self.lookup(name)?
            .coerce_string()
            .map_err(|e| EntityError::coerce(name, e))
    }

    /// Only stored timestamps qualify. A cloned entity holds its timestamps
    /// as text, which this accessor rejects.
    pub fn get_time(&self, name: &str) -> Result<Timestamp> {
        self.lookup(name)?
            .coerce_time()
            .map_err(|e| EntityError::coerce(name, e))
    }

    fn lookup(&self, name: &str) -> Result<&Value> {
        self.fields
            .get(name)
            .ok_or_else(|| EntityError::KeyMissing(name.to_owned()))
    }

    /// Sets the dirty flag unconditionally.
    pub fn mark_dirty(&mut self, status: bool) {
        self.dirty = status;
    }

    /// Returns true while the entity has changes not yet written back.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Deep copy through the JSON representation.
    ///
    /// The copy shares nothing with `self`, but only carries what JSON can
    /// express: bytes and timestamps come back as strings, integer widths
    /// widen to 64 bits. Fails if any field cannot be encoded.
    pub fn try_clone(&self) -> Result<Self> {
        let data = self.to_json()?;
        let copy = Self::from_json(&data)?;
        trace!("Cloned {} entity ({} bytes)", self.entity_type, data.len());
        Ok(copy)
    }

    /// Encodes the entity in its canonical compact form.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.to_json_with(&EncodeConfig::compact())
    }

    /// Encodes the entity with the given layout.
    pub fn to_json_with(&self, config: &EncodeConfig) -> Result<Vec<u8>> {
        let encoded = if config.pretty {
            serde_json::to_vec_pretty(self)
        } else {
            serde_json::to_vec(self)
        };
        encoded.map_err(|e| {
            debug!("Failed to encode {} entity: {}", self.entity_type, e);
            EntityError::from(e)
        })
    }

    /// Decodes an entity from its JSON representation. Missing `fields` and
    /// `children` decode as empty; a missing `dirty` decodes as dirty.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| {
            debug!("Failed to decode entity: {}", e);
            EntityError::from(e)
        })
    }
}
