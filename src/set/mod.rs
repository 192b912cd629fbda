//! Mathematical sets.
//!
//! This module provides [`Set`], an unordered collection of unique
//! elements backed by a hash table, together with the helpers it uses to
//! accept heterogeneous inputs:
//!
//! - [`Set`]: the set itself, with mutating (`update`, `difference_update`,
//!   `intersection_update`, `symmetric_difference_update`) and derived
//!   (`union`, `difference`, `intersection`, `symmetric_difference`)
//!   algebra
//! - [`Source`]: a type-erased source of elements for mixing sets,
//!   sequences and iterators in a single call (see [`sources!`](crate::sources))
//! - [`RenderElement`]: how elements appear in the `Display` form
//! - [`EmptySetError`]: returned by [`Set::pop`] on an empty set
//!
//! # Sources
//!
//! Every operation documented as taking a *source* accepts any
//! [`IntoIterator`] whose items implement [`Borrow<T>`](std::borrow::Borrow):
//! another `Set` (owned or borrowed), a `Vec`, an array, a slice, a range,
//! or any iterator. Multi-source operations take a sequence of sources and
//! apply them in order.
//!
//! ```rust
//! use setwise::set::Set;
//! use setwise::sources;
//!
//! let low: Set<i32> = (1..=250).collect();
//! let middle: Vec<i32> = (125..=375).collect();
//!
//! let union = low.union(sources![&low, middle, 251..=500]);
//! assert_eq!(union.count(), 500);
//! assert!(union.equals(1..=500));
//! ```
//!
//! # Hashing
//!
//! The hash builder used by default is [`DefaultHashBuilder`], selected by
//! cargo features: `fxhash` picks `rustc_hash::FxBuildHasher`, `ahash`
//! picks `ahash::RandomState`, and otherwise the standard library's
//! `RandomState` is used.

// =============================================================================
// Hash Builder Selection
// =============================================================================

/// Hash builder used by [`Set`] unless another one is given.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`Set`] unless another one is given.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hash builder used by [`Set`] unless another one is given.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

// =============================================================================
// Tracing
// =============================================================================

#[cfg(feature = "tracing")]
macro_rules! trace_operation {
    ($($field:tt)*) => {
        tracing::trace!(target: "setwise::set", $($field)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_operation {
    ($($field:tt)*) => {};
}

mod error;
mod hashset;
mod ops;
mod render;
mod source;

pub use error::EmptySetError;
pub use hashset::Set;
pub use hashset::SetIntoIterator;
pub use hashset::SetIterator;
pub use render::RenderElement;
pub use source::Source;
