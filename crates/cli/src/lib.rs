//! Command implementations behind the `flyql` binary.

use crate::{error::CliError, output::NormalizedRow};
use flyql_syntax::Node;
use generator::{FilterCompiler, SqlFilterCompiler};
use model::{FieldMap, normalize_type, schema::load_fields};
use std::path::Path;
use tracing::info;

pub mod commands;
pub mod error;
pub mod output;

pub fn load_field_map(path: &Path) -> Result<FieldMap, CliError> {
    let source = std::fs::read_to_string(path)?;
    let fields = load_fields(&source)?;
    info!(path = %path.display(), count = fields.len(), "Loaded field schema");
    Ok(fields)
}

pub fn load_tree(path: &Path) -> Result<Node, CliError> {
    let source = std::fs::read_to_string(path)?;
    let tree = serde_json::from_str(&source)?;
    Ok(tree)
}

/// Compiles the tree at `tree_path` against the schema at `fields_path`.
pub fn render(fields_path: &Path, tree_path: &Path, where_clause: bool) -> Result<String, CliError> {
    let fields = load_field_map(fields_path)?;
    let tree = load_tree(tree_path)?;

    let filter = SqlFilterCompiler::clickhouse(&fields).compile(&tree)?;
    if where_clause {
        Ok(filter.to_sql().trim_start().to_string())
    } else {
        Ok(filter.to_string())
    }
}

pub fn normalize<S: AsRef<str>>(types: &[S]) -> Vec<NormalizedRow> {
    types
        .iter()
        .map(|declared| NormalizedRow {
            declared_type: declared.as_ref().to_string(),
            normalized_type: normalize_type(declared.as_ref()),
        })
        .collect()
}

pub fn describe_fields(fields_path: &Path) -> Result<String, CliError> {
    let fields = load_field_map(fields_path)?;
    output::fields_json(&fields)
}
