/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Errors
//!
//! Caller misuse of the sequence types is reported through [`Error`]. The
//! atomic primitives and stream cursors have no error paths.

use thiserror::Error;

/// A list of possible errors returned by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A range was constructed with `start > end`.
    #[error("invalid range bounds: start {start} is greater than end {end}")]
    InvertedBounds {
        /// The requested inclusive lower bound.
        start: i32,
        /// The requested exclusive upper bound.
        end: i32,
    },
    /// An operation that needs at least one element was called on an empty
    /// sequence.
    #[error("{op} called on an empty sequence")]
    EmptySeq {
        /// The name of the offending operation.
        op: &'static str,
    },
    /// An index was outside of `0..count`.
    #[error("index {index} out of bounds for sequence of count {count}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of elements in the sequence.
        count: usize,
    },
}

/// A specialized [`Result`] type returned by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
