//! Ordered, capacity-bounded variable name lists with change notification
//!
//! [`VariableList`] owns the ordered sequence of unique variable names whose
//! positions define the bit-to-variable mapping used by the minimizer. Every
//! successful mutation delivers a [`VariableEvent`] to each registered
//! observer before the call returns, carrying enough detail for a dependent
//! view to update incrementally instead of re-reading the whole list. Failed
//! operations change nothing and notify nothing.
//!
//! Notification is synchronous on the caller's thread. An observer must not
//! mutate the same list from inside its callback; that is a precondition of
//! the contract, not a recoverable condition.
//!
//! # Examples
//!
//! ```
//! use qmc_logic::{VariableEvent, VariableList};
//!
//! let mut inputs = VariableList::new(12);
//! inputs.observe(|event| {
//!     if let VariableEvent::Added { name } = event {
//!         println!("new input: {}", name);
//!     }
//! });
//! inputs.add("a").unwrap();
//! inputs.add("b").unwrap();
//! assert_eq!(inputs.len(), 2);
//! ```

pub mod error;

pub use error::VariableListError;

use std::fmt;
use std::sync::Arc;

/// Change notification emitted by a [`VariableList`] mutation
///
/// Each variant carries the affected name plus whatever ancillary index or
/// offset a dependent view needs to mirror the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableEvent {
    /// The entire contents were replaced by [`VariableList::set_all`]
    AllReplaced,
    /// A name was appended at the end
    Added {
        /// The appended name
        name: Arc<str>,
    },
    /// A name was removed
    Removed {
        /// The removed name
        name: Arc<str>,
        /// The index it was removed from
        index: usize,
    },
    /// A name was reordered by a signed offset
    Moved {
        /// The moved name
        name: Arc<str>,
        /// How far it moved (negative is toward the front)
        delta: isize,
    },
    /// A name was replaced in place
    Renamed {
        /// The new name
        name: Arc<str>,
        /// The position that was renamed
        index: usize,
    },
}

/// Ordered, de-duplicated, capacity-bounded sequence of variable names
///
/// Order is significant: position `i` in the list is the display name for
/// input column `i` of the truth table (and therefore bit
/// `input_count - 1 - i` of a row index).
pub struct VariableList {
    max_size: usize,
    names: Vec<Arc<str>>,
    observers: Vec<Box<dyn FnMut(&VariableEvent)>>,
}

impl VariableList {
    /// Create an empty list holding at most `max_size` names
    pub fn new(max_size: usize) -> Self {
        VariableList {
            max_size,
            names: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer invoked synchronously after every mutation
    pub fn observe<F>(&mut self, observer: F)
    where
        F: FnMut(&VariableEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Number of names currently in the list
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The list's fixed capacity
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// The names in order
    pub fn names(&self) -> &[Arc<str>] {
        &self.names
    }

    /// Name at the given position
    pub fn get(&self, index: usize) -> Option<&Arc<str>> {
        self.names.get(index)
    }

    /// Position of a name, if present
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.as_ref() == name)
    }

    /// Whether a name is present
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Atomically replace the entire contents
    ///
    /// Fails if `names` exceeds the capacity or contains duplicates. Fires a
    /// single [`VariableEvent::AllReplaced`].
    pub fn set_all<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), VariableListError> {
        if names.len() > self.max_size {
            return Err(VariableListError::CapacityExceeded {
                requested: names.len(),
                max_size: self.max_size,
            });
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].iter().any(|n| n.as_ref() == name.as_ref()) {
                return Err(VariableListError::DuplicateName {
                    name: Arc::from(name.as_ref()),
                });
            }
        }
        self.names = names.iter().map(|s| Arc::from(s.as_ref())).collect();
        self.notify(&VariableEvent::AllReplaced);
        Ok(())
    }

    /// Append a name at the end
    ///
    /// Fails if the list is full or the name is already present. Fires
    /// [`VariableEvent::Added`].
    pub fn add(&mut self, name: &str) -> Result<(), VariableListError> {
        if self.names.len() >= self.max_size {
            return Err(VariableListError::CapacityExceeded {
                requested: self.names.len() + 1,
                max_size: self.max_size,
            });
        }
        if self.contains(name) {
            return Err(VariableListError::DuplicateName {
                name: Arc::from(name),
            });
        }
        let name: Arc<str> = Arc::from(name);
        self.names.push(Arc::clone(&name));
        self.notify(&VariableEvent::Added { name });
        Ok(())
    }

    /// Remove a name
    ///
    /// Fails if the name is absent. Fires [`VariableEvent::Removed`] carrying
    /// the index it was removed from.
    pub fn remove(&mut self, name: &str) -> Result<(), VariableListError> {
        let index = self.index_of(name).ok_or_else(|| VariableListError::NotFound {
            name: Arc::from(name),
        })?;
        let name = self.names.remove(index);
        self.notify(&VariableEvent::Removed { name, index });
        Ok(())
    }

    /// Reorder a name by a signed offset
    ///
    /// Fails if the name is absent or `index + delta` falls outside the list.
    /// A zero offset is a no-op and fires no event; otherwise the name is
    /// removed and reinserted at the new position and a
    /// [`VariableEvent::Moved`] fires with the signed offset.
    pub fn shift(&mut self, name: &str, delta: isize) -> Result<(), VariableListError> {
        let index = self.index_of(name).ok_or_else(|| VariableListError::NotFound {
            name: Arc::from(name),
        })?;
        if delta == 0 {
            return Ok(());
        }
        let target = index as isize + delta;
        if target < 0 || target >= self.names.len() as isize {
            return Err(VariableListError::MoveOutOfRange {
                index,
                delta,
                len: self.names.len(),
            });
        }
        let name = self.names.remove(index);
        self.names.insert(target as usize, Arc::clone(&name));
        self.notify(&VariableEvent::Moved { name, delta });
        Ok(())
    }

    /// Replace a name in place, keeping its position
    ///
    /// Fails if `old` is absent, or if `new` already names a different entry.
    /// Renaming a variable to itself is a no-op and fires no event; otherwise
    /// a [`VariableEvent::Renamed`] fires with the index.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), VariableListError> {
        let index = self.index_of(old).ok_or_else(|| VariableListError::NotFound {
            name: Arc::from(old),
        })?;
        if old == new {
            return Ok(());
        }
        if self.contains(new) {
            return Err(VariableListError::DuplicateName {
                name: Arc::from(new),
            });
        }
        let name: Arc<str> = Arc::from(new);
        self.names[index] = Arc::clone(&name);
        self.notify(&VariableEvent::Renamed { name, index });
        Ok(())
    }

    fn notify(&mut self, event: &VariableEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}

impl fmt::Debug for VariableList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableList")
            .field("max_size", &self.max_size)
            .field("names", &self.names)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
