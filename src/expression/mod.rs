//! Boolean expression trees with structural equality and operator overloading
//!
//! This module provides [`Expr`], an immutable abstract syntax tree for
//! combinational Boolean expressions. Expressions can be constructed three ways:
//!
//! 1. Method API: `a.and(&b).or(&c)`
//! 2. Operator overloading: `&a * &b + &c` (`*` AND, `+` OR, `^` XOR, `!` NOT)
//! 3. Identity-folding combinators: [`Expr::and_opt`] and friends, which treat
//!    an absent operand as the identity element so a sequence of terms can be
//!    folded without special-casing the first one
//!
//! Equality and hashing are *structural*: `a * b` and `b * a` are distinct
//! trees even though they denote the same function. Callers that need semantic
//! equivalence should normalize first (for instance by minimizing both sides).
//!
//! # Examples
//!
//! ```
//! use qmc_logic::Expr;
//!
//! let a = Expr::variable("a");
//! let b = Expr::variable("b");
//! let expr = a.and(&b).or(&a.not().and(&b.not()));
//! println!("{}", expr);  // a * b + ~a * ~b
//! ```

mod display;
mod eval;
mod operators;
mod visit;

pub use visit::ExprNode;

use std::sync::Arc;

/// Binding strength of an expression node, loosest to tightest
///
/// Used only for display grouping: a child whose precedence is lower than its
/// parent context is parenthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Logical OR (`+`), the loosest binding
    Or,
    /// Logical XOR (`^`)
    Xor,
    /// Logical AND (`*`)
    And,
    /// Logical NOT (`~`)
    Not,
    /// Variables and constants, the tightest binding
    Atom,
}

/// An immutable Boolean expression tree
///
/// Children are held behind [`Arc`], so cloning an expression is cheap and no
/// node is ever mutated after construction. `PartialEq`/`Eq`/`Hash` are derived
/// and therefore purely structural.
///
/// # Examples
///
/// ```
/// use qmc_logic::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
///
/// // Structural equality does not commute operand order
/// assert_eq!(a.and(&b), a.and(&b));
/// assert_ne!(a.and(&b), b.and(&a));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Logical AND of two expressions
    And(Arc<Expr>, Arc<Expr>),
    /// Logical OR of two expressions
    Or(Arc<Expr>, Arc<Expr>),
    /// Logical XOR of two expressions
    Xor(Arc<Expr>, Arc<Expr>),
    /// Logical NOT of an expression
    Not(Arc<Expr>),
    /// A named variable
    Variable(Arc<str>),
    /// A constant value (`false` displays as `0`, `true` as `1`)
    Constant(bool),
}

impl Expr {
    /// Create a variable expression with the given name
    pub fn variable(name: &str) -> Self {
        Expr::Variable(Arc::from(name))
    }

    /// Create a constant expression
    pub fn constant(value: bool) -> Self {
        Expr::Constant(value)
    }

    /// Logical AND: a new expression that is the conjunction of this and another
    pub fn and(&self, other: &Expr) -> Expr {
        Expr::And(Arc::new(self.clone()), Arc::new(other.clone()))
    }

    /// Logical OR: a new expression that is the disjunction of this and another
    pub fn or(&self, other: &Expr) -> Expr {
        Expr::Or(Arc::new(self.clone()), Arc::new(other.clone()))
    }

    /// Logical XOR: a new expression that is the exclusive-or of this and another
    pub fn xor(&self, other: &Expr) -> Expr {
        Expr::Xor(Arc::new(self.clone()), Arc::new(other.clone()))
    }

    /// Logical NOT: a new expression that is the negation of this one
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Expr {
        Expr::Not(Arc::new(self.clone()))
    }

    /// Conjunction treating an absent operand as the identity element
    ///
    /// `and_opt(None, b)` is `b` and `and_opt(a, None)` is `a`, so a sequence
    /// of literals can be folded into a product term starting from `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Expr;
    ///
    /// let literals = ["a", "b", "c"].map(Expr::variable);
    /// let mut term = None;
    /// for lit in literals {
    ///     term = Expr::and_opt(term, Some(lit));
    /// }
    /// assert_eq!(term.unwrap().to_string(), "a * b * c");
    /// ```
    pub fn and_opt(a: Option<Expr>, b: Option<Expr>) -> Option<Expr> {
        match (a, b) {
            (None, b) => b,
            (a, None) => a,
            (Some(a), Some(b)) => Some(a.and(&b)),
        }
    }

    /// Disjunction treating an absent operand as the identity element
    pub fn or_opt(a: Option<Expr>, b: Option<Expr>) -> Option<Expr> {
        match (a, b) {
            (None, b) => b,
            (a, None) => a,
            (Some(a), Some(b)) => Some(a.or(&b)),
        }
    }

    /// Exclusive-or treating an absent operand as the identity element
    pub fn xor_opt(a: Option<Expr>, b: Option<Expr>) -> Option<Expr> {
        match (a, b) {
            (None, b) => b,
            (a, None) => a,
            (Some(a), Some(b)) => Some(a.xor(&b)),
        }
    }

    /// Negation of an optional expression; `not_opt(None)` is `None`
    pub fn not_opt(a: Option<Expr>) -> Option<Expr> {
        a.map(|e| e.not())
    }

    /// Binding strength of this node, used for display grouping
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Or(_, _) => Precedence::Or,
            Expr::Xor(_, _) => Precedence::Xor,
            Expr::And(_, _) => Precedence::And,
            Expr::Not(_) => Precedence::Not,
            Expr::Variable(_) | Expr::Constant(_) => Precedence::Atom,
        }
    }
}
