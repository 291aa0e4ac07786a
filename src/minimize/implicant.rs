//! Cube representation of product terms over truth-table input bits

use crate::expression::Expr;
use crate::table::TruthTable;
use std::cmp::Ordering;
use std::sync::Arc;

/// A product term (cube) over at most [`MAX_INPUTS`] input bits
///
/// The cube is a pair of bitmasks. Where bit `i` of `unknowns` is 0, bit `i`
/// of `values` holds the required value of input bit `i`; where it is 1, input
/// `i` is a don't-care for this cube and the corresponding `values` bit is 0.
/// A cube therefore denotes the set of `2^popcount(unknowns)` rows consistent
/// with its fixed bits.
///
/// Ordering is by `values` first, then `unknowns`, both ascending, which gives
/// every cube list a deterministic, reproducible sort.
///
/// [`MAX_INPUTS`]: crate::table::MAX_INPUTS
///
/// # Examples
///
/// ```
/// use qmc_logic::Implicant;
///
/// // Fixed a=1, b=1 over two inputs: exactly row 3
/// let cube = Implicant::new(0b00, 0b11);
/// assert_eq!(cube.row(), Some(3));
///
/// // b=1 with a unconstrained: rows 1 and 3
/// let cube = Implicant::new(0b10, 0b01);
/// assert_eq!(cube.row(), None);
/// assert!(cube.covers(1) && cube.covers(3));
/// assert!(!cube.covers(0) && !cube.covers(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Implicant {
    unknowns: u32,
    values: u32,
}

impl Implicant {
    /// Create a cube from its don't-care mask and fixed values
    ///
    /// `values` must be 0 on every don't-care position.
    pub fn new(unknowns: u32, values: u32) -> Self {
        debug_assert_eq!(values & unknowns, 0, "values set on don't-care bits");
        Implicant { unknowns, values }
    }

    /// The cube denoting exactly one truth-table row
    pub fn of_row(row: usize) -> Self {
        Implicant {
            unknowns: 0,
            values: row as u32,
        }
    }

    /// Don't-care bitmask: set bits are unconstrained inputs
    pub fn unknowns(&self) -> u32 {
        self.unknowns
    }

    /// Required values on the constrained input bits
    pub fn values(&self) -> u32 {
        self.values
    }

    /// The single row this cube denotes, if it has no don't-care bits
    pub fn row(&self) -> Option<usize> {
        if self.unknowns == 0 {
            Some(self.values as usize)
        } else {
            None
        }
    }

    /// Whether the given row is consistent with this cube's fixed bits
    pub fn covers(&self, row: usize) -> bool {
        (row as u32) & !self.unknowns == self.values
    }

    /// Number of rows this cube covers
    pub fn term_count(&self) -> usize {
        1 << self.unknowns.count_ones()
    }

    /// Lazy sequence of every row covered by this cube, as single-row cubes
    ///
    /// Enumerates each concrete assignment of the don't-care bits by walking
    /// a counter restricted to those bit positions, ascending; a plain
    /// increment would touch fixed bits, so the walk skips them. The iterator
    /// is finite (`2^popcount(unknowns)` items) and restartable: each call to
    /// `terms` starts a fresh pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Implicant;
    ///
    /// let cube = Implicant::new(0b101, 0b010);
    /// let rows: Vec<usize> = cube.terms().map(|t| t.row().unwrap()).collect();
    /// assert_eq!(rows, [0b010, 0b011, 0b110, 0b111]);
    /// ```
    pub fn terms(&self) -> Terms {
        Terms {
            base: self.values,
            mask: self.unknowns,
            next: Some(0),
        }
    }

    /// Render this cube as an AND of literals
    ///
    /// Input bits are scanned from most significant to least significant,
    /// matching the truth table's column order: bit `b` is the column named
    /// `input_labels[input_labels.len() - 1 - b]`. Each constrained bit emits
    /// a positive or negated variable; don't-care bits are omitted. A cube
    /// with every bit don't-care yields the constant `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Implicant;
    /// use std::sync::Arc;
    ///
    /// let labels: Vec<Arc<str>> = vec![Arc::from("a"), Arc::from("b")];
    /// assert_eq!(Implicant::new(0b00, 0b11).to_expression(&labels).to_string(), "a * b");
    /// assert_eq!(Implicant::new(0b10, 0b01).to_expression(&labels).to_string(), "b");
    /// assert_eq!(Implicant::new(0b00, 0b10).to_expression(&labels).to_string(), "a * ~b");
    /// assert_eq!(Implicant::new(0b11, 0b00).to_expression(&labels).to_string(), "1");
    /// ```
    pub fn to_expression(&self, input_labels: &[Arc<str>]) -> Expr {
        let count = input_labels.len();
        let mut term: Option<Expr> = None;
        for bit in (0..count).rev() {
            let mask = 1u32 << bit;
            if self.unknowns & mask != 0 {
                continue;
            }
            let variable = Expr::Variable(Arc::clone(&input_labels[count - 1 - bit]));
            let literal = if self.values & mask != 0 {
                variable
            } else {
                variable.not()
            };
            term = Expr::and_opt(term, Some(literal));
        }
        term.unwrap_or_else(|| Expr::constant(true))
    }
}

impl Ord for Implicant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values
            .cmp(&other.values)
            .then(self.unknowns.cmp(&other.unknowns))
    }
}

impl PartialOrd for Implicant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Iterator over the rows covered by a cube; see [`Implicant::terms`]
#[derive(Debug, Clone)]
pub struct Terms {
    base: u32,
    mask: u32,
    next: Option<u32>,
}

impl Iterator for Terms {
    type Item = Implicant;

    fn next(&mut self) -> Option<Implicant> {
        let current = self.next?;
        // Advance the counter within the don't-care positions only: adding
        // the complement of the mask carries straight through the fixed bits.
        self.next = if current == self.mask {
            None
        } else {
            Some(current.wrapping_sub(self.mask) & self.mask)
        };
        Some(Implicant::new(0, self.base | current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            // Remaining count is not cheap to compute mid-walk; the total is
            // bounded by the full subset count.
            Some(_) => (1, Some(1 << self.mask.count_ones())),
        }
    }
}

/// OR together each cube's literal conjunction, in list order
///
/// `None` yields `None` (no expression at all); a present but empty list
/// yields the constant `0`, the empty sum.
///
/// # Examples
///
/// ```
/// use qmc_logic::{sum_to_expression, Implicant};
/// use std::sync::Arc;
///
/// let labels: Vec<Arc<str>> = vec![Arc::from("a"), Arc::from("b")];
/// let cubes = [Implicant::new(0b00, 0b11), Implicant::new(0b01, 0b00)];
/// let expr = sum_to_expression(Some(&cubes), &labels).unwrap();
/// assert_eq!(expr.to_string(), "a * b + ~a");
///
/// assert_eq!(sum_to_expression(None, &labels), None);
/// assert_eq!(sum_to_expression(Some(&[]), &labels).unwrap().to_string(), "0");
/// ```
pub fn sum_to_expression(
    implicants: Option<&[Implicant]>,
    input_labels: &[Arc<str>],
) -> Option<Expr> {
    let implicants = implicants?;
    if implicants.is_empty() {
        return Some(Expr::constant(false));
    }
    let mut sum: Option<Expr> = None;
    for implicant in implicants {
        sum = Expr::or_opt(sum, Some(implicant.to_expression(input_labels)));
    }
    sum
}

/// Convenience wrapper rendering a cube against a table's input labels
pub fn table_sum_to_expression<T: TruthTable + ?Sized>(
    implicants: Option<&[Implicant]>,
    table: &T,
) -> Option<Expr> {
    sum_to_expression(implicants, table.input_labels())
}
