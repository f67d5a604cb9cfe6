/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Integer Range
//!
//! An immutable, lazily traversed sequence of the integers in
//! `[start, end)`. No element is ever stored: `count` and `nth` are
//! arithmetic, `rest` allocates only the next small range value, and `reduce`
//! is a plain counted loop.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::hash::{
    Hash,
    Hasher,
};
use std::iter::FusedIterator;
use std::ops::ControlFlow;
use std::sync::Arc;

use log::{
    debug,
    trace,
};

use crate::error::{
    Error,
    Result,
};
use crate::seq::meta::{
    same_meta,
    Meta,
};
use crate::seq::range_cursor::RangeCursor;
use crate::seq::traits::{
    Counted,
    Indexed,
    Reducible,
    Seq,
    Streamable,
    WithMeta,
};

/// The half-open integer interval `[start, end)` as a persistent sequence.
///
/// Bounds are `i32`; counts are computed in `i64` and returned as `usize`,
/// so the full `i32` span never overflows.
///
/// Values are immutable and `Send + Sync`. Two ranges are equal when their
/// bounds are equal, whatever their metadata.
///
/// A range built with `start == end` is a valid empty range, but `rest`
/// never produces one: the empty remainder is `None`.
///
/// # Example
///
/// ```rust
/// use prism3_seq::seq::{IntRange, Reducible, Seq};
///
/// let r = IntRange::new(0, 5)?;
/// assert_eq!(r.count(), 5);
/// assert_eq!(r.first(), Some(0));
/// assert_eq!(r.rest().and_then(|r| r.first()), Some(1));
/// assert_eq!(r.reduce_with_seed(0i64, |acc, x| acc + x as i64), 10);
/// # Ok::<(), prism3_seq::Error>(())
/// ```
///
/// # Author
///
/// Haixing Hu
#[derive(Clone)]
pub struct IntRange {
    start: i32,
    end: i32,
    meta: Option<Arc<Meta>>,
}

impl IntRange {
    /// Creates the range `[start, end)`.
    ///
    /// # Errors
    ///
    /// [`Error::InvertedBounds`] if `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            debug!("rejected inverted range bounds [{}, {})", start, end);
            return Err(Error::InvertedBounds { start, end });
        }
        Ok(Self {
            start,
            end,
            meta: None,
        })
    }

    /// Returns the range `[start, end)` as a sequence, or `None` if it has
    /// no elements.
    ///
    /// Inverted bounds are treated as empty here, as the runtime's `range`
    /// function does.
    pub fn seq(start: i32, end: i32) -> Option<Self> {
        (start < end).then(|| Self {
            start,
            end,
            meta: None,
        })
    }

    /// The inclusive lower bound.
    #[inline]
    pub fn start(&self) -> i32 {
        self.start
    }

    /// The exclusive upper bound.
    #[inline]
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Whether the range has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `max(0, end - start)` in constant time.
    #[inline]
    pub fn count(&self) -> usize {
        (self.end as i64 - self.start as i64).max(0) as usize
    }

    /// Returns `start`, or `None` if the range is empty.
    #[inline]
    pub fn first(&self) -> Option<i32> {
        (!self.is_empty()).then_some(self.start)
    }

    /// Returns `[start + 1, end)` with the same metadata, or `None` if no
    /// element remains after the first.
    pub fn rest(&self) -> Option<IntRange> {
        if self.is_empty() || self.start + 1 >= self.end {
            return None;
        }
        Some(Self {
            start: self.start + 1,
            end: self.end,
            meta: self.meta.clone(),
        })
    }

    /// Returns the element at `index` in constant time.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index >= count()`.
    pub fn nth(&self, index: usize) -> Result<i32> {
        let count = self.count();
        if index >= count {
            return Err(Error::IndexOutOfBounds { index, count });
        }
        // start + index < end, so the sum fits back into i32.
        Ok((self.start as i64 + index as i64) as i32)
    }

    /// Whether `x` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, x: i32) -> bool {
        self.start <= x && x < self.end
    }

    /// Returns the attached metadata, if any.
    #[inline]
    pub fn meta(&self) -> Option<&Arc<Meta>> {
        self.meta.as_ref()
    }

    /// Returns a range with the same bounds and the given metadata.
    ///
    /// If `meta` is the very same object as the current metadata, `self` is
    /// returned unchanged. The receiver is never modified.
    pub fn with_meta(self: Arc<Self>, meta: Option<Arc<Meta>>) -> Arc<Self> {
        if same_meta(self.meta.as_ref(), meta.as_ref()) {
            return self;
        }
        Arc::new(Self {
            start: self.start,
            end: self.end,
            meta,
        })
    }

    /// Folds without a seed: `acc = start`, then `acc = f(acc, x)` for every
    /// following element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySeq`] if the range is empty; `f` is not called.
    pub fn reduce<A, F>(&self, mut f: F) -> Result<A>
    where
        A: From<i32>,
        F: FnMut(A, i32) -> A,
    {
        if self.is_empty() {
            return Err(Error::EmptySeq { op: "reduce" });
        }
        let mut acc = A::from(self.start);
        for x in self.start + 1..self.end {
            acc = f(acc, x);
        }
        Ok(acc)
    }

    /// Folds starting from `seed`: `acc = f(seed, start)`, then
    /// `acc = f(acc, x)` for every following element. An empty range returns
    /// `seed` without calling `f`.
    pub fn reduce_with_seed<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, i32) -> A,
    {
        let mut acc = seed;
        for x in self.start..self.end {
            acc = f(acc, x);
        }
        acc
    }

    /// Seeded fold that stops at the first `ControlFlow::Break`.
    pub fn try_reduce_with_seed<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, i32) -> ControlFlow<A, A>,
    {
        let mut acc = seed;
        for x in self.start..self.end {
            match f(acc, x) {
                ControlFlow::Continue(next) => acc = next,
                ControlFlow::Break(done) => return done,
            }
        }
        acc
    }

    /// Creates a new thread-safe cursor over the range.
    pub fn stream(&self) -> RangeCursor {
        trace!("stream over [{}, {})", self.start, self.end);
        RangeCursor::new(self.start, self.end)
    }

    /// Returns a single-owner iterator over the elements.
    ///
    /// Use [`stream`](IntRange::stream) instead when several threads must
    /// share one traversal.
    #[inline]
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            front: self.start,
            back: self.end.max(self.start),
        }
    }
}

impl Seq for IntRange {
    type Item = i32;

    #[inline]
    fn first(&self) -> Option<i32> {
        self.first()
    }

    #[inline]
    fn rest(&self) -> Option<Self> {
        self.rest()
    }
}

impl Counted for IntRange {
    #[inline]
    fn count(&self) -> usize {
        self.count()
    }
}

impl Indexed for IntRange {
    type Item = i32;

    #[inline]
    fn nth(&self, index: usize) -> Result<i32> {
        self.nth(index)
    }
}

impl Reducible for IntRange {
    type Item = i32;

    #[inline]
    fn reduce<A, F>(&self, f: F) -> Result<A>
    where
        A: From<i32>,
        F: FnMut(A, i32) -> A,
    {
        self.reduce(f)
    }

    #[inline]
    fn reduce_with_seed<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, i32) -> A,
    {
        self.reduce_with_seed(seed, f)
    }

    #[inline]
    fn try_reduce_with_seed<A, F>(&self, seed: A, f: F) -> A
    where
        F: FnMut(A, i32) -> ControlFlow<A, A>,
    {
        self.try_reduce_with_seed(seed, f)
    }
}

impl Streamable for IntRange {
    type Stream = RangeCursor;

    #[inline]
    fn stream(&self) -> RangeCursor {
        self.stream()
    }
}

impl WithMeta for IntRange {
    #[inline]
    fn meta(&self) -> Option<&Arc<Meta>> {
        self.meta()
    }

    #[inline]
    fn with_meta(self: Arc<Self>, meta: Option<Arc<Meta>>) -> Arc<Self> {
        IntRange::with_meta(self, meta)
    }
}

impl PartialEq for IntRange {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for IntRange {}

impl Hash for IntRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Debug for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("meta", &self.meta)
            .finish()
    }
}

/// Prints the elements the way the runtime printer shows a seq: `(0 1 2)`.
impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

impl<'a> IntoIterator for &'a IntRange {
    type Item = i32;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Single-owner iterator over an [`IntRange`].
#[derive(Debug, Clone)]
pub struct RangeIter {
    front: i32,
    back: i32,
}

impl Iterator for RangeIter {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        if self.front >= self.back {
            return None;
        }
        let x = self.front;
        self.front += 1;
        Some(x)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.back as i64 - self.front as i64).max(0) as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for RangeIter {
    #[inline]
    fn next_back(&mut self) -> Option<i32> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.back)
    }
}

impl ExactSizeIterator for RangeIter {}

impl FusedIterator for RangeIter {}
