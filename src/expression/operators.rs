//! Operator overloading for boolean expressions

use super::Expr;
use std::ops::{Add, BitXor, Mul, Not};

/// Logical AND operator for references: `&a * &b`
///
/// # Examples
///
/// ```
/// use qmc_logic::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
/// let result = &a * &b;  // Equivalent to a.and(&b)
/// ```
impl Mul for &Expr {
    type Output = Expr;

    fn mul(self, rhs: &Expr) -> Expr {
        self.and(rhs)
    }
}

/// Logical AND operator: `a * b` (delegates to the reference version)
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        self.and(&rhs)
    }
}

/// Logical OR operator for references: `&a + &b`
///
/// # Examples
///
/// ```
/// use qmc_logic::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
/// let result = &a + &b;  // Equivalent to a.or(&b)
/// ```
impl Add for &Expr {
    type Output = Expr;

    fn add(self, rhs: &Expr) -> Expr {
        self.or(rhs)
    }
}

/// Logical OR operator: `a + b` (delegates to the reference version)
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        self.or(&rhs)
    }
}

/// Logical XOR operator for references: `&a ^ &b`
///
/// # Examples
///
/// ```
/// use qmc_logic::Expr;
///
/// let a = Expr::variable("a");
/// let b = Expr::variable("b");
/// let result = &a ^ &b;  // Equivalent to a.xor(&b)
/// ```
impl BitXor for &Expr {
    type Output = Expr;

    fn bitxor(self, rhs: &Expr) -> Expr {
        self.xor(rhs)
    }
}

/// Logical XOR operator: `a ^ b` (delegates to the reference version)
impl BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Expr) -> Expr {
        self.xor(&rhs)
    }
}

/// Logical NOT operator for references: `!&a`
///
/// # Examples
///
/// ```
/// use qmc_logic::Expr;
///
/// let a = Expr::variable("a");
/// let result = !&a;  // Equivalent to a.not()
/// ```
impl Not for &Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(self)
    }
}

/// Logical NOT operator: `!a` (delegates to the reference version)
impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(&self)
    }
}
