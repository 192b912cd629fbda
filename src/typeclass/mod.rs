//! Type class traits for algebraic structure over collections.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Foldable`]: Folding over structures to produce summary values
//!
//! [`Set`](crate::set::Set) is a monoid under union with the empty set as
//! identity, and is foldable over its elements in unspecified order.
//!
//! # Examples
//!
//! ```rust
//! use setwise::set::Set;
//! use setwise::typeclass::{Foldable, Monoid, Semigroup};
//!
//! let evens = Set::from([2, 4]);
//! let odds = Set::from([1, 3]);
//! assert_eq!(evens.clone().combine(odds.clone()), Set::from([1, 2, 3, 4]));
//!
//! let all = Set::combine_all([evens, odds, Set::empty()]);
//! assert_eq!(all.fold_left(0, |accumulator, element| accumulator + element), 10);
//! ```

mod foldable;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
