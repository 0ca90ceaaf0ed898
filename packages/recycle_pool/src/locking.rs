/// Selects how an [`ObjectPool`][crate::ObjectPool] handles calls from multiple threads.
///
/// # Examples
///
/// ```
/// use recycle_pool::{Locking, ObjectPool};
///
/// // The locking mode is set at pool creation time.
/// let pool = ObjectPool::builder(String::new)
///     .locking(Locking::Serialized)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum Locking {
    /// The pool never waits for the reservoir. It must not be used by more than one thread at
    /// a time; an overlapping call panics. This is the default.
    #[default]
    Unsynchronized,

    /// Calls from different threads wait for each other, so each `get()` and `release()`
    /// runs as a single critical section, factory and reset hook included. There is no
    /// fairness guarantee between waiting threads.
    Serialized,
}
