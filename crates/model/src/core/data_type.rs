use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};

/// Coarse type category every backend column type collapses into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizedType {
    String,
    Int,
    Float,
    Bool,
    Date,
    Array,
    Map,
    Tuple,
    Geometry,
    Interval,
    Special,
}

const STRING_TYPES: &[&str] = &[
    "string",
    "fixedstring",
    "longtext",
    "mediumtext",
    "tinytext",
    "text",
    "longblob",
    "mediumblob",
    "tinyblob",
    "blob",
    "varchar",
    "char",
    "char large object",
    "char varying",
    "character",
    "character large object",
    "character varying",
    "nchar large object",
    "nchar varying",
    "national character large object",
    "national character varying",
    "national char varying",
    "national character",
    "national char",
    "binary large object",
    "binary varying",
    "clob",
    "nchar",
    "nvarchar",
    "varchar2",
    "binary",
    "varbinary",
    "bytea",
    "uuid",
    "ipv4",
    "ipv6",
    "enum8",
    "enum16",
    "json",
];

const INT_TYPES: &[&str] = &[
    "int8",
    "int16",
    "int32",
    "int64",
    "int128",
    "int256",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uint128",
    "uint256",
    "tinyint",
    "smallint",
    "mediumint",
    "int",
    "integer",
    "bigint",
    "tinyint signed",
    "tinyint unsigned",
    "smallint signed",
    "smallint unsigned",
    "mediumint signed",
    "mediumint unsigned",
    "int signed",
    "int unsigned",
    "integer signed",
    "integer unsigned",
    "bigint signed",
    "bigint unsigned",
    "int1",
    "int1 signed",
    "int1 unsigned",
    "byte",
    "signed",
    "unsigned",
    "bit",
    "set",
    "time",
];

const FLOAT_TYPES: &[&str] = &[
    "float32",
    "float64",
    "float",
    "double",
    "double precision",
    "real",
    "decimal",
    "decimal32",
    "decimal64",
    "decimal128",
    "decimal256",
    "dec",
    "numeric",
    "fixed",
    "single",
];

const BOOL_TYPES: &[&str] = &["bool", "boolean"];

const DATE_TYPES: &[&str] = &[
    "date",
    "date32",
    "datetime",
    "datetime32",
    "datetime64",
    "timestamp",
    "year",
];

const INTERVAL_TYPES: &[&str] = &[
    "intervalday",
    "intervalhour",
    "intervalmicrosecond",
    "intervalmillisecond",
    "intervalminute",
    "intervalmonth",
    "intervalnanosecond",
    "intervalquarter",
    "intervalsecond",
    "intervalweek",
    "intervalyear",
];

const GEOMETRY_TYPES: &[&str] = &[
    "geometry",
    "point",
    "polygon",
    "multipolygon",
    "linestring",
    "ring",
];

const SPECIAL_TYPES: &[&str] = &["nothing", "nested", "object", "dynamic", "variant"];

lazy_static! {
    static ref WRAPPER: Regex = Regex::new(
        r"^(nullable|lowcardinality|simpleaggregatefunction|aggregatefunction)\s*\(\s*(.+)\s*\)"
    )
    .expect("invalid wrapper pattern");

    /// Parameterized spellings, checked in order before the name table.
    static ref PARAMETERIZED: Vec<(Regex, NormalizedType)> = build_parameterized_patterns();

    static ref TYPE_MAP: HashMap<&'static str, NormalizedType> = build_type_map();
}

impl NormalizedType {
    pub const ALL: [NormalizedType; 11] = [
        NormalizedType::String,
        NormalizedType::Int,
        NormalizedType::Float,
        NormalizedType::Bool,
        NormalizedType::Date,
        NormalizedType::Array,
        NormalizedType::Map,
        NormalizedType::Tuple,
        NormalizedType::Geometry,
        NormalizedType::Interval,
        NormalizedType::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizedType::String => "string",
            NormalizedType::Int => "int",
            NormalizedType::Float => "float",
            NormalizedType::Bool => "bool",
            NormalizedType::Date => "date",
            NormalizedType::Array => "array",
            NormalizedType::Map => "map",
            NormalizedType::Tuple => "tuple",
            NormalizedType::Geometry => "geometry",
            NormalizedType::Interval => "interval",
            NormalizedType::Special => "special",
        }
    }

    /// Plain (unparameterized) type names that map to this category.
    ///
    /// Array, map and tuple are recognized by their constructor syntax only,
    /// so their vocabulary is empty.
    pub fn vocabulary(&self) -> &'static [&'static str] {
        match self {
            NormalizedType::String => STRING_TYPES,
            NormalizedType::Int => INT_TYPES,
            NormalizedType::Float => FLOAT_TYPES,
            NormalizedType::Bool => BOOL_TYPES,
            NormalizedType::Date => DATE_TYPES,
            NormalizedType::Geometry => GEOMETRY_TYPES,
            NormalizedType::Interval => INTERVAL_TYPES,
            NormalizedType::Special => SPECIAL_TYPES,
            NormalizedType::Array | NormalizedType::Map | NormalizedType::Tuple => &[],
        }
    }
}

impl fmt::Display for NormalizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NormalizedType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown normalized type: {s}"))
    }
}

/// Maps a backend type spelling to its category.
///
/// Case and surrounding whitespace are ignored and one level of
/// `Nullable(..)`, `LowCardinality(..)`, `SimpleAggregateFunction(..)` or
/// `AggregateFunction(..)` is unwrapped. Returns `None` for anything not in
/// the vocabulary.
pub fn normalize_type(type_name: &str) -> Option<NormalizedType> {
    let normalized = type_name.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    let inner = match WRAPPER.captures(&normalized) {
        Some(caps) => caps
            .get(2)
            .map_or(normalized.as_str(), |m| m.as_str())
            .trim(),
        None => normalized.as_str(),
    };

    PARAMETERIZED
        .iter()
        .find(|(pattern, _)| pattern.is_match(inner))
        .map(|(_, normalized_type)| *normalized_type)
        .or_else(|| TYPE_MAP.get(inner).copied())
}

fn build_parameterized_patterns() -> Vec<(Regex, NormalizedType)> {
    use NormalizedType::*;

    let entries = [
        (r"^(varchar|char|fixedstring)\s*\(\s*\d+\s*\)", String),
        (
            r"^(tinyint|smallint|mediumint|int|integer|bigint)\s*\(\s*\d+\s*\)",
            Int,
        ),
        (r"^(decimal|numeric|dec)\d*\s*\(\s*\d+\s*(,\s*\d+)?\s*\)", Float),
        (r"^datetime64\s*\(\s*\d+\s*(,\s*.+)?\s*\)", Date),
        (r"^array\s*\(", Array),
        (r"^map\s*\(", Map),
        (r"^tuple\s*\(", Tuple),
    ];

    entries
        .into_iter()
        .map(|(pattern, normalized_type)| {
            (
                Regex::new(pattern).expect("invalid type pattern"),
                normalized_type,
            )
        })
        .collect()
}

fn build_type_map() -> HashMap<&'static str, NormalizedType> {
    let mut map = HashMap::new();
    for normalized_type in NormalizedType::ALL {
        for name in normalized_type.vocabulary() {
            map.insert(*name, normalized_type);
        }
    }
    map
}
