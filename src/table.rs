//! Truth table cell values and the read contract the minimizer consumes
//!
//! The minimization engine never owns or mutates a truth table; it only reads
//! the number of input columns, the `2^inputs` row count, the three-valued
//! [`Entry`] for a `(row, output column)` pair, and the ordered display names
//! of the columns. That read contract is the [`TruthTable`] trait.
//!
//! [`TableData`] is a plain in-memory implementation of the contract, used by
//! this crate's tests, benches, and doc examples and suitable as a backing
//! store for hosts that do not bring their own table.

use std::fmt;
use std::io;
use std::sync::Arc;

/// Upper bound on input columns; `2^12 = 4096` rows keep row indices and cube
/// bitmasks comfortably inside 32 bits.
pub const MAX_INPUTS: usize = 12;

/// Upper bound on output columns.
pub const MAX_OUTPUTS: usize = 12;

/// Value of one truth-table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    /// The output is required to be 0 on this row
    Zero,
    /// The output is required to be 1 on this row
    One,
    /// The output is unconstrained on this row
    DontCare,
}

impl Entry {
    /// Whether this cell constrains the function (`Zero` or `One`)
    pub fn is_determined(&self) -> bool {
        !matches!(self, Entry::DontCare)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Entry::Zero => '0',
            Entry::One => '1',
            Entry::DontCare => '-',
        };
        write!(f, "{}", c)
    }
}

/// Read-only view of a truth table
///
/// Row indices follow the bit convention `row = sum(bit_i * 2^i)` where bit 0
/// corresponds to the rightmost input column.
pub trait TruthTable {
    /// Number of input columns
    fn input_count(&self) -> usize;

    /// Number of rows, always `2^input_count`
    fn row_count(&self) -> usize {
        1 << self.input_count()
    }

    /// Cell value for the given row and output column
    fn output_entry(&self, row: usize, column: usize) -> Entry;

    /// Ordered display names of the input columns
    fn input_labels(&self) -> &[Arc<str>];

    /// Ordered display names of the output columns
    fn output_labels(&self) -> &[Arc<str>];

    /// Resolve an output column index from its display name
    fn output_index(&self, name: &str) -> Option<usize> {
        self.output_labels()
            .iter()
            .position(|label| label.as_ref() == name)
    }
}

/// Errors related to truth table construction and cell updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// More input columns than [`MAX_INPUTS`]
    TooManyInputs {
        /// The number of inputs that was requested
        count: usize,
    },
    /// More output columns than [`MAX_OUTPUTS`]
    TooManyOutputs {
        /// The number of outputs that was requested
        count: usize,
    },
    /// A row index beyond the table's `2^inputs` rows
    RowOutOfBounds {
        /// The row that was requested
        row: usize,
        /// The number of rows in the table
        rows: usize,
    },
    /// An output column index beyond the table's outputs
    ColumnOutOfBounds {
        /// The column that was requested
        column: usize,
        /// The number of output columns in the table
        columns: usize,
    },
    /// A bulk column update whose length does not match the row count
    ColumnLengthMismatch {
        /// The number of rows the table has
        expected: usize,
        /// The number of entries that was supplied
        actual: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::TooManyInputs { count } => {
                write!(f, "Table has {} inputs, maximum is {}", count, MAX_INPUTS)
            }
            TableError::TooManyOutputs { count } => {
                write!(f, "Table has {} outputs, maximum is {}", count, MAX_OUTPUTS)
            }
            TableError::RowOutOfBounds { row, rows } => {
                write!(f, "Row {} out of bounds (table has {} rows)", row, rows)
            }
            TableError::ColumnOutOfBounds { column, columns } => write!(
                f,
                "Output column {} out of bounds (table has {} outputs)",
                column, columns
            ),
            TableError::ColumnLengthMismatch { expected, actual } => write!(
                f,
                "Column update has {} entries, table has {} rows",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for TableError {}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// In-memory truth table storing one [`Entry`] column per output
///
/// Freshly created tables have every cell set to [`Entry::DontCare`].
///
/// # Examples
///
/// ```
/// use qmc_logic::{Entry, TableData, TruthTable};
///
/// let mut table = TableData::new(&["a", "b"], &["out"]).unwrap();
/// assert_eq!(table.row_count(), 4);
///
/// // Output is 1 only where both inputs are 1
/// table
///     .set_output_column(0, &[Entry::Zero, Entry::Zero, Entry::Zero, Entry::One])
///     .unwrap();
/// assert_eq!(table.output_entry(3, 0), Entry::One);
/// ```
#[derive(Debug, Clone)]
pub struct TableData {
    input_labels: Vec<Arc<str>>,
    output_labels: Vec<Arc<str>>,
    /// One column of `2^inputs` entries per output
    columns: Vec<Vec<Entry>>,
}

impl TableData {
    /// Create a table with the given column names, every cell a don't-care
    pub fn new<S: AsRef<str>>(
        input_labels: &[S],
        output_labels: &[S],
    ) -> Result<Self, TableError> {
        if input_labels.len() > MAX_INPUTS {
            return Err(TableError::TooManyInputs {
                count: input_labels.len(),
            });
        }
        if output_labels.len() > MAX_OUTPUTS {
            return Err(TableError::TooManyOutputs {
                count: output_labels.len(),
            });
        }
        let rows = 1 << input_labels.len();
        Ok(TableData {
            input_labels: input_labels.iter().map(|s| Arc::from(s.as_ref())).collect(),
            output_labels: output_labels
                .iter()
                .map(|s| Arc::from(s.as_ref()))
                .collect(),
            columns: vec![vec![Entry::DontCare; rows]; output_labels.len()],
        })
    }

    /// Set one cell
    pub fn set_output_entry(
        &mut self,
        row: usize,
        column: usize,
        entry: Entry,
    ) -> Result<(), TableError> {
        let rows = self.row_count();
        if column >= self.columns.len() {
            return Err(TableError::ColumnOutOfBounds {
                column,
                columns: self.columns.len(),
            });
        }
        if row >= rows {
            return Err(TableError::RowOutOfBounds { row, rows });
        }
        self.columns[column][row] = entry;
        Ok(())
    }

    /// Replace an entire output column, one entry per row
    pub fn set_output_column(&mut self, column: usize, entries: &[Entry]) -> Result<(), TableError> {
        let rows = self.row_count();
        if column >= self.columns.len() {
            return Err(TableError::ColumnOutOfBounds {
                column,
                columns: self.columns.len(),
            });
        }
        if entries.len() != rows {
            return Err(TableError::ColumnLengthMismatch {
                expected: rows,
                actual: entries.len(),
            });
        }
        self.columns[column].copy_from_slice(entries);
        Ok(())
    }
}

impl TruthTable for TableData {
    fn input_count(&self) -> usize {
        self.input_labels.len()
    }

    fn output_entry(&self, row: usize, column: usize) -> Entry {
        self.columns
            .get(column)
            .and_then(|entries| entries.get(row))
            .copied()
            .unwrap_or(Entry::DontCare)
    }

    fn input_labels(&self) -> &[Arc<str>] {
        &self.input_labels
    }

    fn output_labels(&self) -> &[Arc<str>] {
        &self.output_labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_all_dont_care() {
        let table = TableData::new(&["a", "b", "c"], &["x", "y"]).unwrap();
        assert_eq!(table.input_count(), 3);
        assert_eq!(table.row_count(), 8);
        for row in 0..table.row_count() {
            assert_eq!(table.output_entry(row, 0), Entry::DontCare);
            assert_eq!(table.output_entry(row, 1), Entry::DontCare);
        }
    }

    #[test]
    fn test_too_many_inputs_rejected() {
        let labels: Vec<String> = (0..13).map(|i| format!("x{}", i)).collect();
        let outputs = vec!["out".to_string()];
        let err = TableData::new(&labels, &outputs).unwrap_err();
        assert_eq!(err, TableError::TooManyInputs { count: 13 });
    }

    #[test]
    fn test_too_many_outputs_rejected() {
        let inputs = vec!["a".to_string()];
        let labels: Vec<String> = (0..13).map(|i| format!("y{}", i)).collect();
        let err = TableData::new(&inputs, &labels).unwrap_err();
        assert_eq!(err, TableError::TooManyOutputs { count: 13 });
    }

    #[test]
    fn test_set_entry_bounds() {
        let mut table = TableData::new(&["a"], &["out"]).unwrap();
        table.set_output_entry(1, 0, Entry::One).unwrap();
        assert_eq!(table.output_entry(1, 0), Entry::One);

        let err = table.set_output_entry(2, 0, Entry::One).unwrap_err();
        assert_eq!(err, TableError::RowOutOfBounds { row: 2, rows: 2 });

        let err = table.set_output_entry(0, 1, Entry::One).unwrap_err();
        assert_eq!(err, TableError::ColumnOutOfBounds { column: 1, columns: 1 });
    }

    #[test]
    fn test_set_column_length_checked() {
        let mut table = TableData::new(&["a", "b"], &["out"]).unwrap();
        let err = table
            .set_output_column(0, &[Entry::One, Entry::Zero])
            .unwrap_err();
        assert_eq!(
            err,
            TableError::ColumnLengthMismatch {
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_output_index_lookup() {
        let table = TableData::new(&["a"], &["x", "y"]).unwrap();
        assert_eq!(table.output_index("x"), Some(0));
        assert_eq!(table.output_index("y"), Some(1));
        assert_eq!(table.output_index("z"), None);
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(Entry::Zero.to_string(), "0");
        assert_eq!(Entry::One.to_string(), "1");
        assert_eq!(Entry::DontCare.to_string(), "-");
        assert!(Entry::Zero.is_determined());
        assert!(Entry::One.is_determined());
        assert!(!Entry::DontCare.is_determined());
    }

    #[test]
    fn test_error_display_and_io_conversion() {
        let err = TableError::RowOutOfBounds { row: 9, rows: 8 };
        assert!(err.to_string().contains("Row 9"));
        let io_err: std::io::Error = err.into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
