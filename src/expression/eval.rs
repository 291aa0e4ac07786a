//! Evaluation and inspection helpers for boolean expressions

use super::{Expr, ExprNode};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

impl Expr {
    /// Evaluate the expression with a given variable assignment
    ///
    /// Variables missing from the assignment read as `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Expr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let a = Expr::variable("a");
    /// let b = Expr::variable("b");
    /// let expr = a.and(&b);
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assignment.insert(Arc::from("b"), true);
    /// assert!(expr.evaluate(&assignment));
    ///
    /// assignment.insert(Arc::from("b"), false);
    /// assert!(!expr.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        match self {
            Expr::And(left, right) => left.evaluate(assignment) && right.evaluate(assignment),
            Expr::Or(left, right) => left.evaluate(assignment) || right.evaluate(assignment),
            Expr::Xor(left, right) => left.evaluate(assignment) ^ right.evaluate(assignment),
            Expr::Not(inner) => !inner.evaluate(assignment),
            Expr::Variable(name) => assignment.get(&**name).copied().unwrap_or(false),
            Expr::Constant(value) => *value,
        }
    }

    /// Evaluate the expression against one row of a truth table
    ///
    /// Bit 0 of `row` corresponds to the rightmost input column, so
    /// `input_labels[i]` reads bit `input_labels.len() - 1 - i`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Expr;
    /// use std::sync::Arc;
    ///
    /// let labels: Vec<Arc<str>> = vec![Arc::from("a"), Arc::from("b")];
    /// let expr = Expr::variable("a").and(&Expr::variable("b"));
    ///
    /// assert!(expr.evaluate_row(0b11, &labels));
    /// assert!(!expr.evaluate_row(0b10, &labels)); // a=1, b=0
    /// ```
    pub fn evaluate_row(&self, row: usize, input_labels: &[Arc<str>]) -> bool {
        let count = input_labels.len();
        let mut assignment = HashMap::with_capacity(count);
        for (i, label) in input_labels.iter().enumerate() {
            let bit = count - 1 - i;
            assignment.insert(Arc::clone(label), (row >> bit) & 1 == 1);
        }
        self.evaluate(&assignment)
    }

    /// All variable names appearing in the expression, sorted and de-duplicated
    pub fn variables(&self) -> Vec<Arc<str>> {
        let names: BTreeSet<Arc<str>> = self.fold(|node| match node {
            ExprNode::Variable(name) => {
                let mut set = BTreeSet::new();
                set.insert(Arc::from(name));
                set
            }
            ExprNode::Constant(_) => BTreeSet::new(),
            ExprNode::Not(inner) => inner,
            ExprNode::And(mut left, right)
            | ExprNode::Or(mut left, right)
            | ExprNode::Xor(mut left, right) => {
                left.extend(right);
                left
            }
        });
        names.into_iter().collect()
    }

    /// Whether the expression mentions the given variable
    pub fn contains(&self, name: &str) -> bool {
        self.fold(|node| match node {
            ExprNode::Variable(var) => var == name,
            ExprNode::Constant(_) => false,
            ExprNode::Not(inner) => inner,
            ExprNode::And(left, right)
            | ExprNode::Or(left, right)
            | ExprNode::Xor(left, right) => left || right,
        })
    }

    /// Number of operator nodes (AND/OR/XOR/NOT) in the expression
    pub fn op_count(&self) -> usize {
        self.fold(|node| match node {
            ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::And(left, right)
            | ExprNode::Or(left, right)
            | ExprNode::Xor(left, right) => left + right + 1,
        })
    }
}
