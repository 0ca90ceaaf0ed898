#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A cache of reusable objects that amortizes their construction cost.
//!
//! [`ObjectPool`] keeps a reservoir of idle instances. [`get()`][ObjectPool::get] hands out the
//! most recently released instance if there is one and constructs a new one otherwise;
//! [`release()`][ObjectPool::release] resets an instance and puts it back, unless the reservoir
//! is already at its maximum size, in which case the instance is dropped.
//!
//! ```
//! use recycle_pool::ObjectPool;
//!
//! let pool = ObjectPool::builder(|| Vec::<u8>::with_capacity(1024))
//!     .reset(Vec::clear)
//!     .max_size(16)
//!     .build();
//!
//! let mut buffer = pool.get();
//! buffer.extend_from_slice(b"hello");
//! pool.release(buffer);
//!
//! // The same allocation comes back, already cleared.
//! let buffer = pool.get();
//! assert!(buffer.is_empty());
//! assert!(buffer.capacity() >= 1024);
//! ```
//!
//! The pool does not track instances it has handed out. Releasing an instance twice or never
//! releasing it at all is not detected.
//!
//! # Thread safety
//!
//! The pool is thread-safe ([`Send`] and [`Sync`]) whenever `T` is [`Send`]. How it behaves
//! under concurrent use is chosen at construction time with [`Locking`]:
//!
//! * [`Locking::Unsynchronized`] (the default) never waits. The pool is meant to be used by one
//!   thread at a time and an overlapping call from another thread panics.
//! * [`Locking::Serialized`] makes callers wait for each other, so any number of threads may
//!   share the pool.
//!
//! # Scoped use
//!
//! [`get_recycled()`][ObjectPool::get_recycled] returns a [`Recycled`] guard that releases the
//! instance back to the pool when it is dropped.

mod builder;
mod locking;
mod pool;
mod recycled;

pub use builder::*;
pub use locking::*;
pub use pool::*;
pub use recycled::*;
