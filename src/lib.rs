//! # setwise
//!
//! A mathematical set type for Rust: an unordered collection of unique
//! elements with the classical set algebra, membership, cardinality and
//! in-place mutation, interoperating with any iterable source.
//!
//! ## Overview
//!
//! - **[`Set`](set::Set)**: hash-backed set with union, intersection,
//!   difference and symmetric difference, each available as a mutating
//!   `*_update` form and a non-mutating derived form
//! - **Sources**: every multi-source operation accepts sets, native
//!   sequences and arbitrary iterators, owned or borrowed
//! - **Type Classes**: `Semigroup`, `Monoid` and `Foldable` instances for
//!   sets (union as combine, empty set as identity)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup, Monoid and Foldable (enabled by default)
//! - `fxhash`: back sets with `rustc_hash::FxBuildHasher`
//! - `ahash`: back sets with `ahash::RandomState`
//! - `tracing`: emit trace events from bulk mutators
//! - `full`: `typeclass` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let mut primes = Set::from([2, 3, 5, 7]);
//! primes.update([vec![11, 13], vec![17]]);
//!
//! let odd = primes.difference([[2]]);
//! assert_eq!(odd.to_sorted_vec(), vec![3, 5, 7, 11, 13, 17]);
//! assert!(primes.is_superset(&odd));
//! assert_eq!(format!("{odd}"), "{3, 5, 7, 11, 13, 17}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {

    pub use crate::set::*;
    pub use crate::sources;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod set;

#[cfg(feature = "typeclass")]
pub mod typeclass;
