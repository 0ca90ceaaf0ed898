//! Shares a pool of scratch buffers between worker threads.
#![allow(
    missing_docs,
    reason = "No need for API documentation in example code"
)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use recycle_pool::{Locking, ObjectPool};

static BUFFERS_CREATED: AtomicUsize = AtomicUsize::new(0);

fn main() {
    let pool = ObjectPool::builder(|| {
        BUFFERS_CREATED.fetch_add(1, Ordering::Relaxed);
        Vec::<u8>::with_capacity(64 * 1024)
    })
    .reset(Vec::clear)
    .max_size(8)
    .locking(Locking::Serialized)
    .build();

    thread::scope(|scope| {
        for worker in 0..4_u8 {
            let pool = &pool;

            scope.spawn(move || {
                for round in 0..1000_u32 {
                    let mut buffer = pool.get_recycled();
                    buffer.extend_from_slice(&round.to_le_bytes());
                    buffer.push(worker);
                }
            });
        }
    });

    println!(
        "4000 buffer uses were served by {} allocated buffers",
        BUFFERS_CREATED.load(Ordering::Relaxed)
    );
    println!("{pool:?}");
}
