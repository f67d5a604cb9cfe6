/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines the capability traits of atomic cells, so that code elsewhere in
//! the runtime can be generic over "something that can be compared and set"
//! without caring about the concrete cell.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for all atomic cells.
///
/// Provides the basic atomic operations: get, exchange-style set and
/// compare-and-set.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Gets the current value.
    ///
    /// Uses `Acquire` ordering.
    ///
    /// # Returns
    ///
    /// The current value.
    fn get(&self) -> Self::Value;

    /// Replaces the current value, returning the value it overwrote.
    ///
    /// This is an atomic exchange, not a plain store: callers may rely on
    /// observing exactly what was overwritten.
    ///
    /// Uses `AcqRel` ordering.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The previous value.
    fn set(&self, value: Self::Value) -> Self::Value;

    /// Compares and sets the value atomically.
    ///
    /// If the current value equals `expected`, replaces it with `new` and
    /// returns `true`. Otherwise leaves the value unchanged and returns
    /// `false`.
    ///
    /// Uses `AcqRel` ordering on success and `Acquire` ordering on failure.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected current value.
    /// * `new` - The new value to set if the current value matches.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced.
    fn compare_and_set(&self, expected: Self::Value, new: Self::Value) -> bool;

    /// Compares and exchanges the value atomically, returning the value
    /// witnessed by the operation.
    ///
    /// Same as `compare_and_set`, but returns the actual value instead of a
    /// flag, which saves a reload in CAS retry loops.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected current value.
    /// * `new` - The new value to set if the current value matches.
    ///
    /// # Returns
    ///
    /// The value before the operation. If it equals `expected`, the
    /// operation succeeded.
    fn compare_and_exchange(&self, expected: Self::Value, new: Self::Value) -> Self::Value;
}

/// Trait for atomic cells that support functional updates.
///
/// Every method is a CAS retry loop, so the supplied functions may be called
/// more than once under contention and should be free of side effects.
///
/// # Author
///
/// Haixing Hu
pub trait UpdatableAtomic: Atomic {
    /// Updates the value using a function, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `f` - Maps the current value to the new value.
    ///
    /// # Returns
    ///
    /// The old value before the update.
    fn get_and_update<F>(&self, f: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;

    /// Updates the value using a function, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `f` - Maps the current value to the new value.
    ///
    /// # Returns
    ///
    /// The new value after the update.
    fn update_and_get<F>(&self, f: F) -> Self::Value
    where
        F: Fn(Self::Value) -> Self::Value;

    /// Combines the value with `x` using a binary function, returning the
    /// old value.
    ///
    /// # Parameters
    ///
    /// * `x` - The right-hand operand.
    /// * `f` - Called as `f(current, x)`.
    ///
    /// # Returns
    ///
    /// The old value before the update.
    fn get_and_accumulate<F>(&self, x: Self::Value, f: F) -> Self::Value
    where
        F: Fn(Self::Value, Self::Value) -> Self::Value;

    /// Combines the value with `x` using a binary function, returning the
    /// new value.
    ///
    /// # Parameters
    ///
    /// * `x` - The right-hand operand.
    /// * `f` - Called as `f(current, x)`.
    ///
    /// # Returns
    ///
    /// The new value after the update.
    fn accumulate_and_get<F>(&self, x: Self::Value, f: F) -> Self::Value
    where
        F: Fn(Self::Value, Self::Value) -> Self::Value;
}

/// Trait for atomic integer cells.
///
/// Every operation here is a single hardware read-modify-write, never an
/// optimistic retry loop. Arithmetic wraps on overflow.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicInteger: UpdatableAtomic {
    /// Increments the value by 1, returning the old value.
    fn get_and_increment(&self) -> Self::Value;

    /// Increments the value by 1, returning the new value.
    fn increment_and_get(&self) -> Self::Value;

    /// Decrements the value by 1, returning the old value.
    fn get_and_decrement(&self) -> Self::Value;

    /// Decrements the value by 1, returning the new value.
    fn decrement_and_get(&self) -> Self::Value;

    /// Adds a delta to the value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    fn get_and_add(&self, delta: Self::Value) -> Self::Value;

    /// Adds a delta to the value, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    fn add_and_get(&self, delta: Self::Value) -> Self::Value;
}
