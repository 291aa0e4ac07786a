//! Generic tree traversal for boolean expressions

use super::Expr;

/// Node shape for expression tree folding
///
/// This enum mirrors the structure of an expression node with child subtrees
/// replaced by the results already computed for them. It is consumed by
/// [`Expr::fold`] to traverse and transform expression trees bottom-up without
/// the caller needing to recurse by hand.
///
/// Matching on `ExprNode` is exhaustive over the six node kinds, so adding a
/// kind is a compile error for every fold in the crate and its users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// Logical AND with results from left and right subtrees
    And(T, T),
    /// Logical OR with results from left and right subtrees
    Or(T, T),
    /// Logical XOR with results from left and right subtrees
    Xor(T, T),
    /// Logical NOT with result from the inner subtree
    Not(T),
    /// A variable with the given name
    Variable(&'a str),
    /// A constant boolean value
    Constant(bool),
}

impl Expr {
    /// Fold the expression tree depth-first from leaves to root
    ///
    /// The function `f` is called once per node with an [`ExprNode`] carrying
    /// the node kind and the accumulated results of its children, and returns
    /// a caller-chosen result type. Printing, evaluating, and counting are all
    /// folds; the expression type knows nothing about those concerns.
    ///
    /// # Examples
    ///
    /// Count the number of operations in an expression:
    ///
    /// ```
    /// use qmc_logic::{Expr, ExprNode};
    ///
    /// let a = Expr::variable("a");
    /// let b = Expr::variable("b");
    /// let expr = a.and(&b).not();
    ///
    /// let ops = expr.fold(|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) | ExprNode::Xor(l, r) => l + r + 1,
    ///     ExprNode::Not(inner) => inner + 1,
    /// });
    ///
    /// assert_eq!(ops, 2); // AND and NOT
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T + Copy,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match self {
            Expr::And(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::And(left_result, right_result))
            }
            Expr::Or(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Or(left_result, right_result))
            }
            Expr::Xor(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Xor(left_result, right_result))
            }
            Expr::Not(inner) => {
                let inner_result = inner.fold_impl(f);
                f(ExprNode::Not(inner_result))
            }
            Expr::Variable(name) => f(ExprNode::Variable(name)),
            Expr::Constant(value) => f(ExprNode::Constant(*value)),
        }
    }
}
