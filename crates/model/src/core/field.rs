use crate::core::data_type::{NormalizedType, normalize_type};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// Field name -> descriptor lookup consulted while rendering.
pub type FieldMap = HashMap<String, Field>;

/// Schema entry for one queryable column.
///
/// Everything is derived at construction; the descriptor is read-only
/// afterwards and can be shared between concurrent renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    name: String,
    jsonstring: bool,
    declared_type: String,
    values: BTreeSet<String>,
    normalized_type: Option<NormalizedType>,
    is_map: bool,
    is_array: bool,
}

impl Field {
    pub fn new<I, S>(name: impl Into<String>, jsonstring: bool, declared_type: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let normalized_type = normalize_type(declared_type);
        if normalized_type.is_none() {
            warn!(
                field = %name,
                declared_type,
                "Unrecognized column type, operation checks disabled for this field"
            );
        }

        Field {
            name,
            jsonstring,
            declared_type: declared_type.to_string(),
            values: values.into_iter().map(Into::into).collect(),
            normalized_type,
            is_map: normalized_type == Some(NormalizedType::Map),
            is_array: normalized_type == Some(NormalizedType::Array),
        }
    }

    /// A field without an allowed-values restriction.
    pub fn unrestricted(name: impl Into<String>, jsonstring: bool, declared_type: &str) -> Self {
        Field::new(name, jsonstring, declared_type, Vec::<String>::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the column holds a JSON document stored as a string.
    pub fn jsonstring(&self) -> bool {
        self.jsonstring
    }

    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    pub fn values(&self) -> &BTreeSet<String> {
        &self.values
    }

    pub fn normalized_type(&self) -> Option<NormalizedType> {
        self.normalized_type
    }

    pub fn is_map(&self) -> bool {
        self.is_map
    }

    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// True when the field is unrestricted or `value` is one of its values.
    pub fn allows(&self, value: &str) -> bool {
        self.values.is_empty() || self.values.contains(value)
    }

    /// Whether `field:path` access is meaningful for this field.
    pub fn supports_path(&self) -> bool {
        self.jsonstring || self.is_map || self.is_array
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation_basic() {
        let field = Field::unrestricted("test_field", false, "String");
        assert_eq!(field.name(), "test_field");
        assert!(!field.jsonstring());
        assert_eq!(field.declared_type(), "String");
        assert!(field.values().is_empty());
        assert_eq!(field.normalized_type(), Some(NormalizedType::String));
        assert!(!field.is_map());
        assert!(!field.is_array());
        assert!(!field.supports_path());
    }

    #[test]
    fn test_field_creation_with_values() {
        let field = Field::new("enum_field", false, "Enum8", ["value1", "value2"]);
        assert_eq!(field.values().len(), 2);
        assert!(field.allows("value1"));
        assert!(!field.allows("value3"));
    }

    #[test]
    fn test_unrestricted_field_allows_anything() {
        let field = Field::unrestricted("message", false, "String");
        assert!(field.allows("anything"));
    }

    #[test]
    fn test_field_creation_map() {
        let field = Field::unrestricted("map_field", false, "Map(String, Int64)");
        assert_eq!(field.normalized_type(), Some(NormalizedType::Map));
        assert!(field.is_map());
        assert!(!field.is_array());
        assert!(field.supports_path());
    }

    #[test]
    fn test_field_creation_array() {
        let field = Field::unrestricted("array_field", false, "Array(String)");
        assert_eq!(field.normalized_type(), Some(NormalizedType::Array));
        assert!(!field.is_map());
        assert!(field.is_array());
    }

    #[test]
    fn test_field_creation_json_string() {
        let field = Field::unrestricted("json_field", true, "String");
        assert!(field.jsonstring());
        assert_eq!(field.normalized_type(), Some(NormalizedType::String));
        assert!(field.supports_path());
    }

    #[test]
    fn test_field_creation_numeric_types() {
        for declared in ["Int64", "UInt32", "BIGINT", "Nullable(Int8)"] {
            let field = Field::unrestricted("int_field", false, declared);
            assert_eq!(field.normalized_type(), Some(NormalizedType::Int));
        }
        for declared in ["Float64", "Decimal(10,2)", "DOUBLE PRECISION"] {
            let field = Field::unrestricted("float_field", false, declared);
            assert_eq!(field.normalized_type(), Some(NormalizedType::Float));
        }
    }

    #[test]
    fn test_field_creation_unknown_type() {
        let field = Field::unrestricted("unknown_field", false, "SomeUnknownType");
        assert_eq!(field.normalized_type(), None);
        assert!(!field.is_map());
        assert!(!field.is_array());
    }
}
