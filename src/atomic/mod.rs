/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Primitives
//!
//! Lock-free mutable cells built directly on `std::sync::atomic`, with a
//! JDK-like API (`get_and_increment`, `compare_and_set`, ...) and sensible
//! default memory orderings.
//!
//! # Author
//!
//! Haixing Hu

mod atomic_counter;
mod traits;

pub use atomic_counter::AtomicCounter;
pub use traits::{
    Atomic,
    AtomicInteger,
    UpdatableAtomic,
};
