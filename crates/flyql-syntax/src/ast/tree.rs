use crate::ast::{expr::Expression, operator::BoolOperator};
use serde::{Deserialize, Serialize};

/// Node of the boolean expression tree produced by the flyql parser.
///
/// A well-formed node is either a leaf holding an [`Expression`] or a branch
/// holding a [`BoolOperator`] and both children. The fields stay optional
/// because that is the shape the parser hands over; consumers must cope with
/// a branch that has only one child.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool_operator: Option<BoolOperator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn leaf(expression: Expression) -> Self {
        Node {
            expression: Some(expression),
            ..Default::default()
        }
    }

    pub fn branch(bool_operator: BoolOperator, left: Node, right: Node) -> Self {
        Node {
            bool_operator: Some(bool_operator),
            expression: None,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn and(left: Node, right: Node) -> Self {
        Node::branch(BoolOperator::And, left, right)
    }

    pub fn or(left: Node, right: Node) -> Self {
        Node::branch(BoolOperator::Or, left, right)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels below and including this node.
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.depth());
        let right = self.right.as_ref().map_or(0, |n| n.depth());
        1 + left.max(right)
    }

    /// Leaf expressions in left-to-right order.
    pub fn expressions(&self) -> Vec<&Expression> {
        let mut out = Vec::new();
        self.collect_expressions(&mut out);
        out
    }

    fn collect_expressions<'a>(&'a self, out: &mut Vec<&'a Expression>) {
        if let Some(expr) = &self.expression {
            out.push(expr);
        }
        if let Some(left) = &self.left {
            left.collect_expressions(out);
        }
        if let Some(right) = &self.right {
            right.collect_expressions(out);
        }
    }
}
