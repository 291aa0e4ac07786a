//! Display and Debug formatting for boolean expressions

use super::{Expr, Precedence};
use std::fmt;

impl Expr {
    /// Format with operator precedence context to minimize parentheses
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, context: Precedence) -> fmt::Result {
        let needs_parens = self.precedence() < context;
        if needs_parens {
            write!(f, "(")?;
        }
        match self {
            Expr::And(left, right) => {
                left.fmt_with_context(f, Precedence::And)?;
                write!(f, " * ")?;
                right.fmt_with_context(f, Precedence::And)?;
            }
            Expr::Or(left, right) => {
                left.fmt_with_context(f, Precedence::Or)?;
                write!(f, " + ")?;
                right.fmt_with_context(f, Precedence::Or)?;
            }
            Expr::Xor(left, right) => {
                left.fmt_with_context(f, Precedence::Xor)?;
                write!(f, " ^ ")?;
                right.fmt_with_context(f, Precedence::Xor)?;
            }
            Expr::Not(inner) => {
                write!(f, "~")?;
                inner.fmt_with_context(f, Precedence::Not)?;
            }
            Expr::Variable(name) => write!(f, "{}", name)?,
            Expr::Constant(value) => write!(f, "{}", if *value { "1" } else { "0" })?,
        }
        if needs_parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Debug formatting for boolean expressions
///
/// Formats expressions with minimal parentheses based on operator precedence.
/// Uses standard boolean algebra notation: `*` for AND, `+` for OR, `^` for
/// XOR, `~` for NOT, and `0`/`1` for constants.
///
/// # Examples
///
/// ```
/// use qmc_logic::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
/// let c = Expr::variable("c");
/// let expr = a.and(&b).or(&c);
///
/// assert_eq!(format!("{:?}", expr), "a * b + c");
/// assert_eq!(format!("{:?}", a.or(&b).and(&c)), "(a + b) * c");
/// ```
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, Precedence::Or)
    }
}

/// Display formatting for boolean expressions
///
/// Delegates to the `Debug` implementation. Use `{}` or `{:?}` interchangeably.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
