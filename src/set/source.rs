//! Type-erased element sources.
//!
//! Set operations are generic over their sources, which is all that is
//! needed when every source in a call has the same type. [`Source`] erases
//! the concrete type so that sets, sequences and iterators can be mixed in
//! one argument list; [`sources!`](crate::sources) builds such a list.

use std::borrow::{Borrow, Cow};
use std::fmt;

/// A boxed, single-pass source of elements of type `T`.
///
/// Elements are yielded as [`Cow`] so that [`Source::borrowed`] can hand
/// out references without copying, while [`Source::new`] accepts anything
/// that produces borrowable elements and copies them out.
///
/// # Examples
///
/// ```rust
/// use setwise::set::{Set, Source};
///
/// let evens: Set<u32> = (0..10).step_by(2).collect();
/// let extra = vec![1, 3];
///
/// let mixed = evens.union([
///     Source::borrowed(&evens),
///     Source::new(extra),
///     Source::new((10..12).into_iter()),
/// ]);
/// assert_eq!(mixed.to_sorted_vec(), vec![0, 1, 2, 3, 4, 6, 8, 10, 11]);
/// ```
pub struct Source<'a, T: Clone> {
    elements: Box<dyn Iterator<Item = Cow<'a, T>> + 'a>,
}

impl<'a, T: Clone + 'a> Source<'a, T> {
    /// Wraps any source whose items can be borrowed as `T`.
    ///
    /// Each element is cloned out of the item that produced it.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator + 'a,
        I::Item: Borrow<T>,
    {
        Self {
            elements: Box::new(
                source
                    .into_iter()
                    .map(|element| Cow::Owned(<I::Item as Borrow<T>>::borrow(&element).clone())),
            ),
        }
    }

    /// Wraps a source of references that outlive the `Source`.
    ///
    /// No element is cloned until an operation needs an owned copy.
    pub fn borrowed<I>(source: I) -> Self
    where
        I: IntoIterator<Item = &'a T> + 'a,
    {
        Self {
            elements: Box::new(source.into_iter().map(Cow::Borrowed)),
        }
    }
}

impl<'a, T: Clone> Iterator for Source<'a, T> {
    type Item = Cow<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T: Clone> fmt::Debug for Source<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Source").finish_non_exhaustive()
    }
}

/// Builds an array of [`Source`]s from heterogeneous arguments.
///
/// `sources![a, b, c]` expands to `[Source::new(a), Source::new(b), Source::new(c)]`,
/// which every multi-source [`Set`](crate::set::Set) operation accepts.
///
/// # Examples
///
/// ```rust
/// use setwise::set::Set;
/// use setwise::sources;
///
/// let mut set: Set<i32> = Set::from([1, 2]);
/// let other: Set<i32> = Set::from([3]);
///
/// set.update(sources![&other, vec![4, 5], [6].iter()]);
/// assert_eq!(set.to_sorted_vec(), vec![1, 2, 3, 4, 5, 6]);
/// ```
#[macro_export]
macro_rules! sources {
    ($($source:expr),* $(,)?) => {
        [$($crate::set::Source::new($source)),*]
    };
}
