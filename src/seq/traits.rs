/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Sequence Protocols
//!
//! Each collection capability of the runtime is a separate trait, so a type
//! implements only what it can do efficiently and generic code asks for the
//! capability it needs rather than a concrete type.
//!
//! # Author
//!
//! Haixing Hu

use std::iter::FusedIterator;
use std::ops::ControlFlow;
use std::sync::Arc;

use crate::error::Result;
use crate::seq::meta::Meta;

/// The seq protocol: traversal as an immutable linked sequence.
///
/// The empty sequence is `None`; a value implementing `Seq` is normally
/// non-empty.
///
/// # Author
///
/// Haixing Hu
pub trait Seq: Sized {
    /// The element type.
    type Item;

    /// Returns the first element, or `None` if the sequence is empty.
    fn first(&self) -> Option<Self::Item>;

    /// Returns the sequence of the remaining elements, or `None` if there
    /// are none. Never mutates the receiver.
    fn rest(&self) -> Option<Self>;
}

/// The counted protocol: element count in constant time.
pub trait Counted {
    /// Returns the number of elements. Must be O(1).
    fn count(&self) -> usize;
}

/// The indexed protocol: random access by position.
pub trait Indexed {
    /// The element type.
    type Item;

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) if
    /// `index >= count`.
    fn nth(&self, index: usize) -> Result<Self::Item>;
}

/// The reducible protocol: an internal left fold driven by the collection.
///
/// # Author
///
/// Haixing Hu
pub trait Reducible {
    /// The element type.
    type Item;

    /// Folds the elements left to right without a seed.
    ///
    /// The accumulator starts as the first element and `f(acc, x)` is
    /// applied to every following element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySeq`](crate::Error::EmptySeq) if there is no first
    /// element.
    fn reduce<A, F>(&self, f: F) -> Result<A>
    where
        A: From<Self::Item>,
        F: FnMut(A, Self::Item) -> A;

    /// Folds the elements left to right starting from `seed`.
    ///
    /// Returns `seed` untouched, without calling `f`, if there are no
    /// elements.
    fn reduce_with_seed<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A;

    /// Like [`reduce_with_seed`](Reducible::reduce_with_seed), but stops as
    /// soon as `f` returns `ControlFlow::Break`, whose payload becomes the
    /// result.
    fn try_reduce_with_seed<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, Self::Item) -> ControlFlow<A, A>;
}

/// A pull-based cursor that may be advanced from many threads at once.
///
/// `next` takes `&self`: implementations hand every element out at most once
/// across all callers. `None` is the end-of-stream marker and, once
/// returned, is returned forever.
pub trait Stream {
    /// The element type.
    type Item;

    /// Takes the next element, or `None` at end of stream.
    fn next(&self) -> Option<Self::Item>;
}

/// The streamable protocol: produces a fresh [`Stream`] over the elements.
pub trait Streamable {
    /// The cursor type.
    type Stream: Stream;

    /// Creates a new cursor positioned at the first element.
    fn stream(&self) -> Self::Stream;
}

/// The metadata protocol.
///
/// Metadata never takes part in equality or hashing.
///
/// # Author
///
/// Haixing Hu
pub trait WithMeta {
    /// Returns the attached metadata, if any.
    fn meta(&self) -> Option<&Arc<Meta>>;

    /// Returns a value with the given metadata and otherwise identical
    /// contents.
    ///
    /// When `meta` is the very same object as the current metadata (or both
    /// are absent) the receiver itself is returned, so callers can detect a
    /// no-op with `Arc::ptr_eq`.
    fn with_meta(self: Arc<Self>, meta: Option<Arc<Meta>>) -> Arc<Self>;
}

/// Walks any [`Seq`] through `first`/`rest`.
///
/// This is how generic runtime code (printers, `take`-style combinators)
/// traverses a sequence it knows nothing else about.
///
/// # Example
///
/// ```rust
/// use prism3_seq::seq::{walk, IntRange};
///
/// let items: Vec<i32> = walk(IntRange::seq(0, 3)).collect();
/// assert_eq!(items, vec![0, 1, 2]);
/// ```
pub fn walk<S: Seq>(seq: Option<S>) -> Walk<S> {
    Walk { seq }
}

/// Iterator returned by [`walk`].
#[derive(Debug, Clone)]
pub struct Walk<S> {
    seq: Option<S>,
}

impl<S: Seq> Iterator for Walk<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        let current = self.seq.take()?;
        let item = current.first();
        self.seq = current.rest();
        item
    }
}

impl<S: Seq> FusedIterator for Walk<S> {}
