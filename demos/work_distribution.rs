/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Work Distribution Example
//!
//! Demonstrates sharing one range cursor between worker threads so that
//! every job index is processed exactly once, and an atomic counter handing
//! out ids.
//!
//! Run with `RUST_LOG=trace` to see cursor events.

use prism3_seq::seq::IntRange;
use prism3_seq::AtomicCounter;
use std::sync::Arc;
use std::thread;

fn main() -> Result<(), prism3_seq::Error> {
    env_logger::init();

    println!("=== Work Distribution Example ===\n");

    // Example 1: Ranges as persistent sequences
    println!("1. Range Sequence:");
    let jobs = IntRange::new(0, 20)?;
    println!("   Jobs: {}", jobs);
    println!("   Count: {}", jobs.count());
    if let Some(rest) = jobs.rest() {
        println!("   Rest: {} (original still starts at {:?})", rest, jobs.first());
    }
    let total = jobs.reduce_with_seed(0i64, |acc, x| acc + x as i64);
    println!("   Sum of job indices: {}", total);

    // Example 2: Sharing one cursor between workers
    println!("\n2. Concurrent Workers:");
    let cursor = Arc::new(jobs.stream());
    let worker_ids = Arc::new(AtomicCounter::new(1));
    let mut handles = vec![];

    for _ in 0..4 {
        let cursor = cursor.clone();
        let worker_ids = worker_ids.clone();
        let handle = thread::spawn(move || {
            let id = worker_ids.get_and_increment();
            let done: Vec<i32> = cursor.values().collect();
            (id, done)
        });
        handles.push(handle);
    }

    let mut processed = 0;
    for handle in handles {
        let (id, done) = handle.join().expect("worker panicked");
        println!("   Worker {} processed {:?}", id, done);
        processed += done.len();
    }
    println!(
        "   Processed {} jobs, cursor exhausted: {}",
        processed,
        cursor.is_exhausted()
    );

    Ok(())
}
