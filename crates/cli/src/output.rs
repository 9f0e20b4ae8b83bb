use crate::error::CliError;
use model::{Field, FieldMap, NormalizedType};
use serde::Serialize;
use std::path::Path;

/// One line of `flyql normalize` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRow {
    pub declared_type: String,
    pub normalized_type: Option<NormalizedType>,
}

pub fn format_normalized(rows: &[NormalizedRow]) -> String {
    rows.iter()
        .map(|row| {
            let normalized = row
                .normalized_type
                .map_or("unknown", |t| t.as_str());
            format!("{}\t{normalized}", row.declared_type)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fields sorted by name, as pretty JSON.
pub fn fields_json(fields: &FieldMap) -> Result<String, CliError> {
    let mut sorted: Vec<&Field> = fields.values().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    serde_json::to_string_pretty(&sorted).map_err(CliError::JsonSerialize)
}

pub fn write_sql(sql: &str, path: &Path) -> Result<(), CliError> {
    std::fs::write(path, format!("{sql}\n"))?;
    Ok(())
}

pub fn print_sql(sql: &str) {
    if !sql.is_empty() {
        println!("{sql}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_normalized() {
        let rows = vec![
            NormalizedRow {
                declared_type: "Nullable(Int64)".to_string(),
                normalized_type: Some(NormalizedType::Int),
            },
            NormalizedRow {
                declared_type: "Foo".to_string(),
                normalized_type: None,
            },
        ];
        assert_eq!(format_normalized(&rows), "Nullable(Int64)\tint\nFoo\tunknown");
    }
}
