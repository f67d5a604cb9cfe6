/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Persistent Sequences
//!
//! Immutable sequence values and the protocols (seq, counted, indexed,
//! reducible, streamable, metadata) through which the rest of the runtime
//! consumes them.
//!
//! # Author
//!
//! Haixing Hu

mod int_range;
mod meta;
mod range_cursor;
mod traits;

pub use int_range::{
    IntRange,
    RangeIter,
};
pub use meta::{
    meta_from,
    Meta,
    MetaValue,
};
pub use range_cursor::{
    RangeCursor,
    Values,
};
pub use traits::{
    walk,
    Counted,
    Indexed,
    Reducible,
    Seq,
    Stream,
    Streamable,
    Walk,
    WithMeta,
};
