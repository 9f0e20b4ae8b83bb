use crate::{
    dialect::ClickHouse,
    error::{GeneratorError, Result},
    render::ExpressionRenderer,
};
use flyql_syntax::Node;
use model::FieldMap;
use tracing::trace;

/// Renders a boolean tree into one predicate.
///
/// Both non-empty children combine into `(left op right)`. When only one
/// child renders to something it replaces the node unchanged, without the
/// operator; a node with no non-empty child keeps its own expression.
pub fn render_tree(node: &Node, renderer: &ExpressionRenderer<'_>) -> Result<String> {
    let own = match &node.expression {
        Some(expr) => renderer.render(expr)?,
        None => String::new(),
    };
    let left = match &node.left {
        Some(child) => render_tree(child, renderer)?,
        None => String::new(),
    };
    let right = match &node.right {
        Some(child) => render_tree(child, renderer)?,
        None => String::new(),
    };

    let sql = match (left.is_empty(), right.is_empty()) {
        (false, false) => {
            let op = node
                .bool_operator
                .ok_or(GeneratorError::MissingBoolOperator)?;
            trace!(%op, "Combining subtrees");
            format!("({left} {op} {right})")
        }
        (false, true) => left,
        (true, false) => right,
        (true, true) => own,
    };
    Ok(sql)
}

/// Renders `root` with the ClickHouse dialect.
pub fn to_sql(root: &Node, fields: &FieldMap) -> Result<String> {
    render_tree(root, &ExpressionRenderer::new(&ClickHouse, fields))
}

/// `" WHERE <predicate>"`, or an empty string when the tree renders to nothing.
pub fn to_where_clause(root: &Node, fields: &FieldMap) -> Result<String> {
    let predicate = to_sql(root, fields)?;
    if predicate.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!(" WHERE {predicate}"))
    }
}
