/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_seq::atomic::{
    Atomic,
    AtomicCounter,
    AtomicInteger,
    UpdatableAtomic,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_atomic_trait() {
    fn test_atomic<T: Atomic<Value = i64>>(atomic: &T) {
        assert_eq!(atomic.set(42), 0);
        assert_eq!(atomic.get(), 42);

        assert!(atomic.compare_and_set(42, 100));
        assert!(!atomic.compare_and_set(42, 200));
        assert_eq!(atomic.get(), 100);

        assert_eq!(atomic.compare_and_exchange(100, 300), 100);
        assert_eq!(atomic.get(), 300);
    }

    let atomic = AtomicCounter::new(0);
    test_atomic(&atomic);
}

#[test]
fn test_updatable_atomic_trait() {
    fn test_updatable<T: UpdatableAtomic<Value = i64>>(atomic: &T) {
        assert_eq!(atomic.get_and_update(|x| x + 5), 10);
        assert_eq!(atomic.update_and_get(|x| x * 2), 30);
        assert_eq!(atomic.get_and_accumulate(4, |a, b| a - b), 30);
        assert_eq!(atomic.accumulate_and_get(2, |a, b| a / b), 13);
    }

    let atomic = AtomicCounter::new(10);
    test_updatable(&atomic);
}

#[test]
fn test_atomic_integer_trait() {
    fn test_integer<T: AtomicInteger<Value = i64>>(atomic: &T) {
        assert_eq!(atomic.get_and_increment(), 0);
        assert_eq!(atomic.increment_and_get(), 2);
        assert_eq!(atomic.get_and_decrement(), 2);
        assert_eq!(atomic.decrement_and_get(), 0);
        assert_eq!(atomic.get_and_add(10), 0);
        assert_eq!(atomic.add_and_get(-3), 7);
    }

    let atomic = AtomicCounter::new(0);
    test_integer(&atomic);
}

// Generic id allocator written only against the trait
fn allocate_ids<T>(source: &T, n: usize) -> Vec<i64>
where
    T: AtomicInteger<Value = i64>,
{
    (0..n).map(|_| source.get_and_increment()).collect()
}

#[test]
fn test_generic_allocator_shared_across_threads() {
    let ids = Arc::new(AtomicCounter::new(1000));
    let mut handles = vec![];

    for _ in 0..4 {
        let ids = ids.clone();
        handles.push(thread::spawn(move || allocate_ids(&*ids, 250)));
    }

    let mut all: Vec<i64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort_unstable();
    assert_eq!(all, (1000..2000).collect::<Vec<_>>());
}
