/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-seq
//!
//! Lock-free counters and lazy persistent integer-range sequences for a
//! collection runtime.
//!
//! ## Design Goals
//!
//! - **Persistence**: sequence values never change; traversal returns new
//!   values and the old ones stay valid
//! - **Laziness**: ranges store two bounds, never their elements
//! - **Lock Freedom**: the only shared mutable state is an atomic counter
//! - **Protocols over Types**: seq, counted, reducible and streamable are
//!   separate traits
//!
//! ## Features
//!
//! - `AtomicCounter`: 64-bit counter with JDK-like atomic operations
//! - `IntRange`: the half-open interval `[start, end)` as a sequence with
//!   O(1) `count`, O(1) `first`/`rest` and allocation-free `reduce`
//! - `RangeCursor`: a cursor that hands every element of a range to exactly
//!   one of any number of concurrent callers
//!
//! ## Example
//!
//! ```rust
//! use prism3_seq::seq::{IntRange, Reducible, Seq};
//!
//! let r = IntRange::new(0, 5)?;
//! assert_eq!(r.count(), 5);
//! assert_eq!(r.reduce::<i64, _>(|acc, x| acc + x as i64)?, 10);
//!
//! let rest = r.rest().unwrap();
//! assert_eq!(rest.first(), Some(1));
//! assert_eq!(r.first(), Some(0));
//! # Ok::<(), prism3_seq::Error>(())
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod error;
pub mod seq;

pub use atomic::{
    Atomic,
    AtomicCounter,
    AtomicInteger,
    UpdatableAtomic,
};
pub use error::{
    Error,
    Result,
};
pub use seq::{
    IntRange,
    RangeCursor,
};
