/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Range Cursor
//!
//! The external-iteration side of [`IntRange`](crate::seq::IntRange). One
//! cursor can be pulled from any number of threads; each element is handed
//! to exactly one caller, which makes it a lock-free work distributor over a
//! bounded index space.
//!
//! # Author
//!
//! Haixing Hu

use std::iter::FusedIterator;

use log::trace;

use crate::atomic::AtomicCounter;
use crate::seq::traits::Stream;

/// Thread-safe pull cursor over `[start, end)`.
///
/// Every [`next`](RangeCursor::next) performs exactly one atomic
/// fetch-and-increment, so the values handed out across all callers are
/// exactly `start..end` with no duplicates and no gaps. Once a caller sees
/// the end, every later call on any thread sees it too: the position only
/// grows. Delivery is at-most-once; a taken value cannot be given back.
///
/// # Example
///
/// ```rust
/// use prism3_seq::seq::IntRange;
/// use std::thread;
///
/// let cursor = IntRange::new(0, 100)?.stream();
/// let sums: Vec<i64> = thread::scope(|s| {
///     let workers: Vec<_> = (0..4)
///         .map(|_| s.spawn(|| cursor.values().map(i64::from).sum::<i64>()))
///         .collect();
///     workers.into_iter().map(|w| w.join().unwrap()).collect()
/// });
/// assert_eq!(sums.iter().sum::<i64>(), 4950);
/// # Ok::<(), prism3_seq::Error>(())
/// ```
///
/// # Author
///
/// Haixing Hu
#[derive(Debug)]
pub struct RangeCursor {
    position: AtomicCounter,
    end: i32,
}

impl RangeCursor {
    pub(crate) fn new(start: i32, end: i32) -> Self {
        Self {
            position: AtomicCounter::new(start as i64),
            end,
        }
    }

    /// Takes the next value, or returns `None` once the range is exhausted.
    ///
    /// Never blocks and never fails.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<i32> {
        let i = self.position.get_and_increment();
        let end = self.end as i64;
        if i < end {
            // start <= i < end, so i is a valid i32.
            return Some(i as i32);
        }
        if i == end {
            trace!("range cursor exhausted at {}", end);
        }
        None
    }

    /// Whether every value has been handed out.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position.get() >= self.end as i64
    }

    /// A snapshot of how many values have not been handed out yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        (self.end as i64 - self.position.get()).max(0) as usize
    }

    /// Returns an iterator that pulls values from this cursor.
    ///
    /// Iterators created on different threads share the cursor, so each of
    /// them sees a disjoint part of the range.
    #[inline]
    pub fn values(&self) -> Values<'_> {
        Values { cursor: self }
    }
}

impl Stream for RangeCursor {
    type Item = i32;

    #[inline]
    fn next(&self) -> Option<i32> {
        RangeCursor::next(self)
    }
}

/// Iterator returned by [`RangeCursor::values`].
#[derive(Debug, Clone)]
pub struct Values<'a> {
    cursor: &'a RangeCursor,
}

impl Iterator for Values<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.cursor.next()
    }
}

impl FusedIterator for Values<'_> {}
