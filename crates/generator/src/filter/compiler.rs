use super::SqlFilter;
use crate::{
    dialect::{ClickHouse, Dialect},
    error::Result,
    render::ExpressionRenderer,
    tree::render_tree,
};
use flyql_syntax::{Expression, Node};
use model::FieldMap;
use tracing::debug;

/// A trait for compiling flyql trees into a specific filter format.
pub trait FilterCompiler {
    /// The type of filter that this compiler produces.
    type Filter;

    /// Compile the tree into a filter.
    fn compile(&self, root: &Node) -> Result<Self::Filter>;
}

/// Compiles trees into SQL predicates for one dialect and field map.
///
/// Holds only shared references, so a single compiler can serve
/// concurrent compilations.
#[derive(Clone, Copy)]
pub struct SqlFilterCompiler<'a> {
    renderer: ExpressionRenderer<'a>,
}

impl<'a> SqlFilterCompiler<'a> {
    pub fn new(dialect: &'a dyn Dialect, fields: &'a FieldMap) -> Self {
        SqlFilterCompiler {
            renderer: ExpressionRenderer::new(dialect, fields),
        }
    }

    pub fn clickhouse(fields: &'a FieldMap) -> Self {
        SqlFilterCompiler::new(&ClickHouse, fields)
    }

    /// Renders a single expression outside of any tree.
    pub fn expression(&self, expr: &Expression) -> Result<String> {
        self.renderer.render(expr)
    }
}

impl FilterCompiler for SqlFilterCompiler<'_> {
    type Filter = SqlFilter;

    fn compile(&self, root: &Node) -> Result<SqlFilter> {
        debug!(
            dialect = self.renderer.dialect().name(),
            depth = root.depth(),
            "Compiling filter tree"
        );
        let predicate = render_tree(root, &self.renderer)?;
        Ok(SqlFilter::with_predicate(predicate))
    }
}
