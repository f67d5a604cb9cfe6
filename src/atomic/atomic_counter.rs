/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Counter
//!
//! A 64-bit signed integer cell that is only ever mutated through atomic
//! instructions. It is the primitive the runtime uses for lock-free
//! identities, version stamps and position hand-out (see
//! [`RangeCursor`](crate::seq::RangeCursor)).
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::{
    AtomicI64,
    Ordering,
};

use crate::atomic::traits::{
    Atomic,
    AtomicInteger,
    UpdatableAtomic,
};

/// Lock-free 64-bit signed counter.
///
/// All operations are linearizable with respect to each other on the same
/// instance, never block and never allocate. Arithmetic wraps on overflow
/// following two's-complement semantics; this is documented behavior, not an
/// error.
///
/// # Memory Ordering Strategy
///
/// - **Reads** (`get`): `Acquire`.
/// - **Read-modify-write** (`set`, increments, adds, CAS): `AcqRel`, with
///   `Acquire` on CAS failure.
///
/// A counter used to hand out positions is often the only synchronization
/// between the threads that consume those positions, so increments use
/// `AcqRel` rather than `Relaxed`.
///
/// # Example
///
/// ```rust
/// use prism3_seq::AtomicCounter;
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(AtomicCounter::new(0));
/// let mut handles = vec![];
///
/// for _ in 0..10 {
///     let counter = counter.clone();
///     handles.push(thread::spawn(move || {
///         for _ in 0..100 {
///             counter.get_and_increment();
///         }
///     }));
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(counter.get(), 1000);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicCounter {
    inner: AtomicI64,
}

impl AtomicCounter {
    /// Creates a new counter.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self {
            inner: AtomicI64::new(value),
        }
    }

    /// Gets the current value.
    ///
    /// Uses `Acquire` ordering so that writes published by a `Release` (or
    /// stronger) operation on another thread are visible afterwards.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn get(&self) -> i64 {
        self.inner.load(Ordering::Acquire)
    }

    /// Atomically replaces the value, returning the previous one.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The value that was overwritten.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_seq::AtomicCounter;
    ///
    /// let counter = AtomicCounter::new(10);
    /// assert_eq!(counter.set(20), 10);
    /// assert_eq!(counter.get(), 20);
    /// ```
    #[inline]
    pub fn set(&self, value: i64) -> i64 {
        self.inner.swap(value, Ordering::AcqRel)
    }

    /// Compares and sets the value atomically.
    ///
    /// If the current value equals `expected`, replaces it with `new`.
    /// Among any number of threads racing with the same `expected` value,
    /// exactly one succeeds.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected current value.
    /// * `new` - The replacement value.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced, `false` if it was left unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_seq::AtomicCounter;
    ///
    /// let counter = AtomicCounter::new(10);
    /// assert!(counter.compare_and_set(10, 20));
    /// assert!(!counter.compare_and_set(10, 30));
    /// assert_eq!(counter.get(), 20);
    /// ```
    #[inline]
    pub fn compare_and_set(&self, expected: i64, new: i64) -> bool {
        self.inner
            .compare_exchange(expected, new, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Compares and exchanges the value atomically, returning the value the
    /// operation witnessed.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected current value.
    /// * `new` - The replacement value.
    ///
    /// # Returns
    ///
    /// The value before the operation. It equals `expected` if and only if
    /// the replacement happened.
    #[inline]
    pub fn compare_and_exchange(&self, expected: i64, new: i64) -> i64 {
        match self.inner.compare_exchange(
            expected,
            new,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(prev) => prev,
            Err(actual) => actual,
        }
    }

    /// Increments the value by 1, returning the value immediately prior to
    /// the increment.
    ///
    /// The increment is one indivisible fetch-add; no two callers ever
    /// observe the same prior value.
    ///
    /// # Returns
    ///
    /// The old value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_seq::AtomicCounter;
    ///
    /// let counter = AtomicCounter::new(10);
    /// assert_eq!(counter.get_and_increment(), 10);
    /// assert_eq!(counter.get(), 11);
    /// ```
    #[inline]
    pub fn get_and_increment(&self) -> i64 {
        self.inner.fetch_add(1, Ordering::AcqRel)
    }

    /// Increments the value by 1, returning the new value.
    ///
    /// The `+ 1` is applied to the value already obtained from the atomic
    /// fetch-add, so no second synchronization point is introduced.
    ///
    /// # Returns
    ///
    /// The new value.
    #[inline]
    pub fn increment_and_get(&self) -> i64 {
        self.get_and_increment().wrapping_add(1)
    }

    /// Decrements the value by 1, returning the old value.
    #[inline]
    pub fn get_and_decrement(&self) -> i64 {
        self.inner.fetch_sub(1, Ordering::AcqRel)
    }

    /// Decrements the value by 1, returning the new value.
    #[inline]
    pub fn decrement_and_get(&self) -> i64 {
        self.get_and_decrement().wrapping_sub(1)
    }

    /// Adds a delta to the value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add. May be negative.
    #[inline]
    pub fn get_and_add(&self, delta: i64) -> i64 {
        self.inner.fetch_add(delta, Ordering::AcqRel)
    }

    /// Adds a delta to the value, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add. May be negative.
    #[inline]
    pub fn add_and_get(&self, delta: i64) -> i64 {
        self.get_and_add(delta).wrapping_add(delta)
    }

    /// Updates the value with a function, returning the old value.
    ///
    /// Runs a weak CAS loop; `f` may be called more than once.
    ///
    /// # Parameters
    ///
    /// * `f` - Maps the current value to the new value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_seq::AtomicCounter;
    ///
    /// let counter = AtomicCounter::new(10);
    /// assert_eq!(counter.get_and_update(|x| x * 3), 10);
    /// assert_eq!(counter.get(), 30);
    /// ```
    #[inline]
    pub fn get_and_update<F>(&self, f: F) -> i64
    where
        F: Fn(i64) -> i64,
    {
        let mut current = self.get();
        loop {
            let new = f(current);
            match self.inner.compare_exchange_weak(
                current,
                new,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return current,
                Err(actual) => current = actual,
            }
        }
    }

    /// Updates the value with a function, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `f` - Maps the current value to the new value.
    #[inline]
    pub fn update_and_get<F>(&self, f: F) -> i64
    where
        F: Fn(i64) -> i64,
    {
        let mut current = self.get();
        loop {
            let new = f(current);
            match self.inner.compare_exchange_weak(
                current,
                new,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return new,
                Err(actual) => current = actual,
            }
        }
    }

    /// Combines the value with `x`, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `x` - The right-hand operand.
    /// * `f` - Called as `f(current, x)`.
    #[inline]
    pub fn get_and_accumulate<F>(&self, x: i64, f: F) -> i64
    where
        F: Fn(i64, i64) -> i64,
    {
        self.get_and_update(|current| f(current, x))
    }

    /// Combines the value with `x`, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `x` - The right-hand operand.
    /// * `f` - Called as `f(current, x)`.
    #[inline]
    pub fn accumulate_and_get<F>(&self, x: i64, f: F) -> i64
    where
        F: Fn(i64, i64) -> i64,
    {
        self.update_and_get(|current| f(current, x))
    }

    /// Gets a reference to the underlying `std::sync::atomic::AtomicI64`
    /// for callers that need explicit memory orderings.
    #[inline]
    pub fn inner(&self) -> &AtomicI64 {
        &self.inner
    }
}

// The trait implementations forward to the inherent methods, so that both
// `counter.get()` and generic `fn foo<T: AtomicInteger>(t: &T)` work.

impl Atomic for AtomicCounter {
    type Value = i64;

    #[inline]
    fn get(&self) -> i64 {
        self.get()
    }

    #[inline]
    fn set(&self, value: i64) -> i64 {
        self.set(value)
    }

    #[inline]
    fn compare_and_set(&self, expected: i64, new: i64) -> bool {
        self.compare_and_set(expected, new)
    }

    #[inline]
    fn compare_and_exchange(&self, expected: i64, new: i64) -> i64 {
        self.compare_and_exchange(expected, new)
    }
}

impl UpdatableAtomic for AtomicCounter {
    #[inline]
    fn get_and_update<F>(&self, f: F) -> i64
    where
        F: Fn(i64) -> i64,
    {
        self.get_and_update(f)
    }

    #[inline]
    fn update_and_get<F>(&self, f: F) -> i64
    where
        F: Fn(i64) -> i64,
    {
        self.update_and_get(f)
    }

    #[inline]
    fn get_and_accumulate<F>(&self, x: i64, f: F) -> i64
    where
        F: Fn(i64, i64) -> i64,
    {
        self.get_and_accumulate(x, f)
    }

    #[inline]
    fn accumulate_and_get<F>(&self, x: i64, f: F) -> i64
    where
        F: Fn(i64, i64) -> i64,
    {
        self.accumulate_and_get(x, f)
    }
}

impl AtomicInteger for AtomicCounter {
    #[inline]
    fn get_and_increment(&self) -> i64 {
        self.get_and_increment()
    }

    #[inline]
    fn increment_and_get(&self) -> i64 {
        self.increment_and_get()
    }

    #[inline]
    fn get_and_decrement(&self) -> i64 {
        self.get_and_decrement()
    }

    #[inline]
    fn decrement_and_get(&self) -> i64 {
        self.decrement_and_get()
    }

    #[inline]
    fn get_and_add(&self, delta: i64) -> i64 {
        self.get_and_add(delta)
    }

    #[inline]
    fn add_and_get(&self, delta: i64) -> i64 {
        self.add_and_get(delta)
    }
}

impl Default for AtomicCounter {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<i64> for AtomicCounter {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicCounter")
            .field("value", &self.get())
            .finish()
    }
}

impl fmt::Display for AtomicCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
