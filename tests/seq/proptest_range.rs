/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! Property-based tests for the range invariants.

use prism3_seq::seq::{
    walk,
    IntRange,
};
use proptest::prelude::*;

/// Bounds small enough that traversal stays fast.
fn arb_bound() -> impl Strategy<Value = i32> {
    -500i32..500i32
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// count == max(0, end - start), and construction fails only when inverted
    #[test]
    fn count_matches_bounds(a in any::<i32>(), b in any::<i32>()) {
        match IntRange::new(a, b) {
            Ok(r) => prop_assert_eq!(r.count() as i64, (b as i64 - a as i64).max(0)),
            Err(_) => prop_assert!(a > b),
        }
    }

    /// first/rest, iter, stream and reduce all visit the same elements
    #[test]
    fn traversals_agree(a in arb_bound(), len in 0i32..200) {
        let r = IntRange::new(a, a + len).unwrap();
        let expected: Vec<i32> = (a..a + len).collect();

        let walked: Vec<i32> = walk(IntRange::seq(a, a + len)).collect();
        prop_assert_eq!(&walked, &expected);

        prop_assert_eq!(&r.iter().collect::<Vec<_>>(), &expected);

        let cursor = r.stream();
        prop_assert_eq!(&cursor.values().collect::<Vec<_>>(), &expected);

        let folded = r.reduce_with_seed(Vec::new(), |mut acc, x| {
            acc.push(x);
            acc
        });
        prop_assert_eq!(&folded, &expected);
    }

    /// rest never changes the receiver
    #[test]
    fn rest_is_persistent(a in arb_bound(), len in 1i32..200) {
        let r = IntRange::new(a, a + len).unwrap();
        let before = (r.first(), r.count());
        let rest = r.rest();
        prop_assert_eq!((r.first(), r.count()), before);
        prop_assert_eq!(rest.map(|s| s.count()).unwrap_or(0), r.count() - 1);
    }

    /// nth agrees with iteration
    #[test]
    fn nth_matches_iter(a in arb_bound(), len in 1i32..200, idx in 0usize..200) {
        let r = IntRange::new(a, a + len).unwrap();
        match r.iter().nth(idx) {
            Some(x) => prop_assert_eq!(r.nth(idx), Ok(x)),
            None => prop_assert!(r.nth(idx).is_err()),
        }
    }
}
