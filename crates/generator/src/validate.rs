use crate::error::{GeneratorError, Result};
use flyql_syntax::{Literal, Operator, ValueKind};
use model::NormalizedType;

/// Whether comparing a field of `normalized_type` against a `kind` literal
/// with `operator` is meaningless for the backend.
pub fn is_forbidden(normalized_type: NormalizedType, operator: Operator, kind: ValueKind) -> bool {
    match (normalized_type, kind) {
        // ordering a string column against a number
        (NormalizedType::String, ValueKind::Int | ValueKind::Float) => operator.is_ordering(),
        // regex over a numeric column
        (NormalizedType::Int | NormalizedType::Float, ValueKind::String) => operator.is_regex(),
        // ordering booleans
        (NormalizedType::Bool, ValueKind::Bool) => operator.is_ordering(),
        _ => false,
    }
}

/// Checks `value operator field` against the forbidden combinations.
///
/// Fields of unrecognized type and null literals are never rejected.
pub fn validate_operation(
    value: &Literal,
    normalized_type: Option<NormalizedType>,
    operator: Operator,
) -> Result<()> {
    let (Some(normalized_type), Some(kind)) = (normalized_type, value.kind()) else {
        return Ok(());
    };

    if is_forbidden(normalized_type, operator, kind) {
        return Err(GeneratorError::ForbiddenOperation {
            normalized_type,
            operator,
        });
    }
    Ok(())
}
