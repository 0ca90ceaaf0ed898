//! End-to-end usage of `ObjectPool` through its public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use recycle_pool::{Locking, ObjectPool, Pool};

#[test]
fn pool_of_byte_buffers_with_cap() {
    let pool = ObjectPool::builder(|| vec![0_u8; 16]).max_size(2).build();

    let a = pool.get();
    let b = pool.get();
    let c = pool.get();

    let a_address = a.as_ptr();
    let b_address = b.as_ptr();

    pool.release(a);
    pool.release(b);
    pool.release(c);

    let first = pool.get();
    let second = pool.get();
    let third = pool.get();

    assert_eq!(first.as_ptr(), b_address);
    assert_eq!(second.as_ptr(), a_address);
    assert_ne!(third.as_ptr(), a_address);
    assert_ne!(third.as_ptr(), b_address);
}

#[test]
fn released_beyond_cap_is_not_retrievable() {
    const MAX: usize = 5;

    let pool = ObjectPool::builder(|| usize::MAX).max_size(MAX).build();

    for value in 0..=MAX {
        pool.release(value);
    }

    let retrieved: Vec<_> = (0..=MAX).map(|_| pool.get()).collect();

    // Most recently released first, and the last one released was dropped.
    assert_eq!(retrieved, [4, 3, 2, 1, 0, usize::MAX]);
}

#[test]
fn reset_hook_sees_every_release_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let hook_seen = Arc::clone(&seen);

    let pool = ObjectPool::builder(|| 0_u32)
        .reset(move |item| hook_seen.lock().unwrap().push(*item))
        .max_size(1)
        .build();

    pool.release(10);
    pool.release(20);
    pool.release(30);

    assert_eq!(*seen.lock().unwrap(), [10, 20, 30]);
    assert_eq!(pool.get(), 10);
}

#[test]
fn serialized_pool_hands_each_instance_to_one_thread_at_a_time() {
    const THREADS: usize = 4;
    const ITERATIONS: usize = 500;

    // Every instance carries an "in use" flag that must never be observed as already set.
    let pool = ObjectPool::builder(|| Arc::new(AtomicUsize::new(0)))
        .locking(Locking::Serialized)
        .build();

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..ITERATIONS {
                    let item = pool.get();
                    assert_eq!(item.fetch_add(1, Ordering::SeqCst), 0);
                    item.fetch_sub(1, Ordering::SeqCst);
                    pool.release(item);
                }
            });
        }
    });
}

#[test]
fn generic_code_over_pool_trait() {
    fn fill_and_return<P: Pool<Vec<u32>>>(pool: &P, count: u32) {
        let mut items = pool.get();
        items.extend(0..count);
        pool.release(items);
    }

    let pool = ObjectPool::builder(Vec::<u32>::new).reset(Vec::clear).build();

    fill_and_return(&pool, 100);

    let items = pool.get();
    assert!(items.is_empty());
    assert!(items.capacity() >= 100);
}
