//! Column type normalization and field descriptors.

pub mod core;
pub mod error;
pub mod schema;

pub use crate::core::{
    data_type::{NormalizedType, normalize_type},
    field::{Field, FieldMap},
};
pub use error::ModelError;
