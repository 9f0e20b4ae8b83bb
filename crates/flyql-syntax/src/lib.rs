//! Input AST for the flyql filter language.
//!
//! The types in this crate are what an upstream flyql parser produces: leaf
//! [`ast::expr::Expression`]s combined into a binary [`ast::tree::Node`] tree.
//! Everything is serde-friendly so a parsed tree can be handed over as JSON.

pub mod ast;
pub mod error;

pub use ast::{
    expr::Expression,
    literal::{Literal, ValueKind},
    operator::{BoolOperator, Operator},
    tree::Node,
};
pub use error::SyntaxError;
