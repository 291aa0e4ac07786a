//! # Quine-McCluskey logic minimization
//!
//! This crate derives sum-of-products expressions for combinational Boolean
//! functions specified by truth tables with optional don't-care cells:
//!
//! - [`compute_sum`] builds the direct sum of products covering exactly the
//!   rows marked ONE, one product term per row.
//! - [`compute_minimal`] runs Quine-McCluskey minimization: prime-implicant
//!   extraction over the ONE and DONT_CARE rows, essential-implicant
//!   selection, and a greedy fallback cover for whatever remains.
//!
//! Results come back as [`Implicant`] cubes, compact `(unknowns, values)`
//! bitmask pairs, which render themselves into [`Expr`] trees on demand. The
//! expression type carries its own evaluation, display, and generic fold, so
//! the minimizer knows nothing about those concerns.
//!
//! ## Minimizing a truth table
//!
//! ```
//! use qmc_logic::{compute_minimal, sum_to_expression, Entry, TableData, TruthTable};
//!
//! // Two inputs, output 1 only where both are 1
//! let mut table = TableData::new(&["a", "b"], &["out"]).unwrap();
//! table
//!     .set_output_column(0, &[Entry::Zero, Entry::Zero, Entry::Zero, Entry::One])
//!     .unwrap();
//!
//! let minimal = compute_minimal(&table, "out").unwrap();
//! let expr = sum_to_expression(Some(&minimal), table.input_labels()).unwrap();
//! assert_eq!(expr.to_string(), "a * b");
//! ```
//!
//! Don't-care cells let the minimizer choose whichever value yields fewer,
//! larger cubes:
//!
//! ```
//! use qmc_logic::{compute_minimal, sum_to_expression, Entry, TableData, TruthTable};
//!
//! let mut table = TableData::new(&["a", "b"], &["out"]).unwrap();
//! table
//!     .set_output_column(0, &[Entry::Zero, Entry::DontCare, Entry::Zero, Entry::One])
//!     .unwrap();
//!
//! let minimal = compute_minimal(&table, "out").unwrap();
//! let expr = sum_to_expression(Some(&minimal), table.input_labels()).unwrap();
//! assert_eq!(expr.to_string(), "b");
//! ```
//!
//! ## Building expressions directly
//!
//! ```
//! use qmc_logic::Expr;
//!
//! let a = Expr::variable("a");
//! let b = Expr::variable("b");
//! let expr = &a * &b + &(!&a) * &(!&b);
//! assert_eq!(expr.to_string(), "a * b + ~a * ~b");
//! ```
//!
//! ## Tracking variable names
//!
//! [`VariableList`] keeps the ordered, de-duplicated name list that maps bit
//! positions to display names, and notifies registered observers of every
//! change so dependent views can update incrementally:
//!
//! ```
//! use qmc_logic::{VariableList, MAX_INPUTS};
//!
//! let mut inputs = VariableList::new(MAX_INPUTS);
//! inputs.set_all(&["a", "b", "c"]).unwrap();
//! inputs.shift("c", -1).unwrap();
//! let names: Vec<&str> = inputs.names().iter().map(|n| n.as_ref()).collect();
//! assert_eq!(names, ["a", "c", "b"]);
//! ```
//!
//! ## Scope
//!
//! Everything is a synchronous, single-threaded pure function of a truth
//! table snapshot; tables are bounded at [`MAX_INPUTS`] input columns (4096
//! rows), so every intermediate fits in 32-bit bitmasks. Parsing expression
//! text and persisting expressions are out of scope.

// Public modules
pub mod expression;
pub mod minimize;
pub mod table;
pub mod variables;

// Re-export high-level public API
pub use expression::{Expr, ExprNode, Precedence};
pub use minimize::{
    compute_minimal, compute_sum, sum_to_expression, table_sum_to_expression, Implicant, Terms,
};
pub use table::{Entry, TableData, TableError, TruthTable, MAX_INPUTS, MAX_OUTPUTS};
pub use variables::{VariableEvent, VariableList, VariableListError};
