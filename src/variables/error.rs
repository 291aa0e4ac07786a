//! Error types for variable list operations

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to variable list mutation
///
/// Every failed operation leaves the list unchanged and delivers no change
/// notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableListError {
    /// Attempted to grow the list beyond its fixed capacity
    CapacityExceeded {
        /// The number of names the operation would have produced
        requested: usize,
        /// The list's capacity
        max_size: usize,
    },
    /// Attempted to add or rename to a name already in the list
    DuplicateName {
        /// The conflicting name
        name: Arc<str>,
    },
    /// Attempted to remove, move, or rename a name not in the list
    NotFound {
        /// The name that was not found
        name: Arc<str>,
    },
    /// Attempted to move a name to a position outside the list
    MoveOutOfRange {
        /// Current index of the name
        index: usize,
        /// The requested signed offset
        delta: isize,
        /// The number of names in the list
        len: usize,
    },
}

impl fmt::Display for VariableListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableListError::CapacityExceeded { requested, max_size } => write!(
                f,
                "Variable list holds at most {} names, {} requested",
                max_size, requested
            ),
            VariableListError::DuplicateName { name } => {
                write!(f, "Variable '{}' is already in the list", name)
            }
            VariableListError::NotFound { name } => {
                write!(f, "Variable '{}' not found in the list", name)
            }
            VariableListError::MoveOutOfRange { index, delta, len } => write!(
                f,
                "Moving index {} by {} leaves the valid range 0..{}",
                index, delta, len
            ),
        }
    }
}

impl std::error::Error for VariableListError {}

impl From<VariableListError> for io::Error {
    fn from(err: VariableListError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
