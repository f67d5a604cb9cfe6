/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_seq::seq::{
    IntRange,
    RangeCursor,
    Stream,
    Streamable,
};
use std::collections::HashSet;
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_WORKERS: usize = 8;

fn stream(start: i32, end: i32) -> RangeCursor {
    IntRange::new(start, end).unwrap().stream()
}

#[test]
fn test_sequential_next() {
    crate::init_logger();
    let cursor = stream(3, 6);
    assert_eq!(cursor.remaining(), 3);
    assert_eq!(cursor.next(), Some(3));
    assert_eq!(cursor.next(), Some(4));
    assert_eq!(cursor.next(), Some(5));
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_empty_range_stream() {
    let cursor = stream(5, 5);
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.remaining(), 0);
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_negative_bounds() {
    let cursor = stream(-2, 1);
    assert_eq!(cursor.values().collect::<Vec<_>>(), vec![-2, -1, 0]);
}

#[test]
fn test_bounds_at_i32_max() {
    let cursor = stream(i32::MAX - 2, i32::MAX);
    assert_eq!(cursor.values().collect::<Vec<_>>(), vec![i32::MAX - 2, i32::MAX - 1]);
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_each_stream_is_independent() {
    let r = IntRange::new(0, 3).unwrap();
    let a = r.stream();
    let b = r.stream();
    assert_eq!(a.next(), Some(0));
    assert_eq!(a.next(), Some(1));
    assert_eq!(b.next(), Some(0));
    assert_eq!(r.first(), Some(0));
}

#[test]
fn test_streamable_protocol() {
    fn drain<S>(s: &S) -> Vec<i32>
    where
        S: Streamable,
        S::Stream: Stream<Item = i32>,
    {
        let cursor = s.stream();
        let mut out = vec![];
        while let Some(x) = cursor.next() {
            out.push(x);
        }
        out
    }

    assert_eq!(drain(&IntRange::new(7, 10).unwrap()), vec![7, 8, 9]);
}

// Every value goes to exactly one worker
#[test]
fn test_concurrent_workers_partition_the_range() {
    crate::init_logger();
    let cursor = Arc::new(stream(0, 100));
    let barrier = Arc::new(Barrier::new(NUM_WORKERS));
    let mut handles = vec![];

    for _ in 0..NUM_WORKERS {
        let cursor = cursor.clone();
        let barrier = barrier.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            let mut taken = vec![];
            while let Some(x) = cursor.next() {
                taken.push(x);
            }
            // after exhaustion the cursor stays exhausted
            for _ in 0..10 {
                assert_eq!(cursor.next(), None);
            }
            taken
        }));
    }

    let mut seen = HashSet::new();
    let mut total = 0;
    for handle in handles {
        for x in handle.join().unwrap() {
            assert!(seen.insert(x), "value {} handed out twice", x);
            total += 1;
        }
    }

    assert_eq!(total, 100);
    assert_eq!(seen, (0..100).collect::<HashSet<_>>());
    assert!(cursor.is_exhausted());
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_each_worker_sees_increasing_values() {
    let cursor = stream(0, 10_000);

    let per_worker: Vec<Vec<i32>> = thread::scope(|s| {
        let workers: Vec<_> = (0..NUM_WORKERS)
            .map(|_| s.spawn(|| cursor.values().collect::<Vec<_>>()))
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    for values in &per_worker {
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    let mut all: Vec<i32> = per_worker.into_iter().flatten().collect();
    all.sort_unstable();
    assert_eq!(all, (0..10_000).collect::<Vec<_>>());
}

#[test]
fn test_cursor_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RangeCursor>();
    assert_send_sync::<IntRange>();
}
