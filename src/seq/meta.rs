/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Metadata
//!
//! Metadata is an immutable side map attached to a value. It never takes part
//! in equality or hashing; it is carried along by every derived value.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::Arc;

use im::OrdMap;

/// A metadata value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaValue {
    /// The absence of a value.
    Nil,
    /// A boolean flag.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A string.
    Str(Arc<str>),
    /// A keyword, printed with a leading colon.
    Keyword(Arc<str>),
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Nil => write!(f, "nil"),
            MetaValue::Bool(b) => write!(f, "{}", b),
            MetaValue::Int(n) => write!(f, "{}", n),
            MetaValue::Str(s) => write!(f, "{:?}", s),
            MetaValue::Keyword(k) => write!(f, ":{}", k),
        }
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}

impl From<i64> for MetaValue {
    fn from(n: i64) -> Self {
        MetaValue::Int(n)
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Str(Arc::from(s))
    }
}

/// Metadata map: persistent, ordered, keyed by name.
pub type Meta = OrdMap<Arc<str>, MetaValue>;

/// Builds a shared metadata map from key/value pairs.
///
/// Each call allocates a new `Arc`, so two maps built from the same pairs
/// are equal but not identical.
///
/// # Example
///
/// ```rust
/// use prism3_seq::seq::{meta_from, MetaValue};
///
/// let meta = meta_from([("doc", MetaValue::from("squares")), ("line", MetaValue::Int(3))]);
/// assert_eq!(meta.len(), 2);
/// ```
pub fn meta_from<K, I>(pairs: I) -> Arc<Meta>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, MetaValue)>,
{
    Arc::new(
        pairs
            .into_iter()
            .map(|(k, v)| (Arc::from(k.as_ref()), v))
            .collect(),
    )
}

/// Whether two optional metadata handles are the same object.
///
/// This is identity, not equality: two equal maps held in distinct `Arc`s
/// are not identical.
pub(crate) fn same_meta(a: Option<&Arc<Meta>>, b: Option<&Arc<Meta>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}
