//! Compiles flyql expression trees into SQL predicates.

pub mod dialect;
pub mod error;
pub mod escape;
pub mod filter;
pub mod render;
pub mod tree;
pub mod validate;

pub use dialect::{ClickHouse, Dialect};
pub use error::GeneratorError;
pub use filter::{
    SqlFilter,
    compiler::{FilterCompiler, SqlFilterCompiler},
};
pub use render::{ExpressionRenderer, expression_to_sql};
pub use tree::{to_sql, to_where_clause};
