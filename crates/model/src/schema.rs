//! Loading field descriptors from a JSON schema document.
//!
//! A schema is an array of entries:
//!
//! ```json
//! [
//!   { "name": "message", "type": "String" },
//!   { "name": "payload", "type": "String", "jsonstring": true },
//!   { "name": "level", "type": "Enum8", "values": ["info", "error"] }
//! ]
//! ```

use crate::{
    core::field::{Field, FieldMap},
    error::ModelError,
};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: String,
    #[serde(default)]
    pub jsonstring: bool,
    #[serde(default)]
    pub values: Vec<String>,
}

impl From<FieldConfig> for Field {
    fn from(config: FieldConfig) -> Self {
        Field::new(
            config.name,
            config.jsonstring,
            &config.declared_type,
            config.values,
        )
    }
}

/// Indexes fields by name, rejecting duplicates.
pub fn build_field_map(fields: impl IntoIterator<Item = Field>) -> Result<FieldMap, ModelError> {
    let mut map = FieldMap::new();
    for field in fields {
        match map.entry(field.name().to_string()) {
            Entry::Occupied(entry) => return Err(ModelError::DuplicateField(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(field);
            }
        }
    }
    Ok(map)
}

/// Parses a JSON array of [`FieldConfig`] entries into a [`FieldMap`].
pub fn load_fields(json: &str) -> Result<FieldMap, ModelError> {
    let configs: Vec<FieldConfig> = serde_json::from_str(json)?;
    build_field_map(configs.into_iter().map(Field::from))
}
