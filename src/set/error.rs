//! Error types for set operations.

/// Represents an attempt to pop from a set with no elements.
///
/// This is the only failure any [`Set`](super::Set) operation can report;
/// every other operation is total over its inputs.
///
/// # Examples
///
/// ```rust
/// use setwise::set::{EmptySetError, Set};
///
/// let mut set: Set<i32> = Set::new();
/// assert_eq!(set.pop(), Err(EmptySetError));
/// assert_eq!(format!("{}", EmptySetError), "cannot pop from an empty set");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptySetError;

impl std::fmt::Display for EmptySetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "cannot pop from an empty set")
    }
}

impl std::error::Error for EmptySetError {}
