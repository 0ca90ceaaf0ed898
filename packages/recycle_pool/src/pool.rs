use std::fmt;

use parking_lot::{Mutex, MutexGuard};

use crate::{Locking, ObjectPoolBuilder, Recycled};

pub(crate) type Factory<T> = Box<dyn Fn() -> T + Send + Sync>;
pub(crate) type ResetHook<T> = Box<dyn Fn(&mut T) + Send + Sync>;

/// Hands out instances of `T` and takes them back.
///
/// This is the seam for code that wants to obtain and return reusable instances without
/// caring how (or whether) they are cached.
pub trait Pool<T> {
    /// Obtains an instance, either a recycled one or a newly constructed one.
    fn get(&self) -> T;

    /// Returns an instance so that a later [`get()`][Self::get] may hand it out again.
    fn release(&self, item: T);
}

/// A cache of idle instances of `T`, bounded by a maximum size.
///
/// Instances are reused in most-recently-released-first order. The pool only knows about
/// the instances currently idle in its reservoir; anything handed out by [`get()`][1] is the
/// caller's until it is passed to [`release()`][2].
///
/// # Example
///
/// ```
/// use recycle_pool::ObjectPool;
///
/// let pool = ObjectPool::new(|| Box::new([0_u64; 64]));
///
/// let first = pool.get();
/// let first_address = &raw const *first;
/// pool.release(first);
///
/// let second = pool.get();
/// assert_eq!(&raw const *second, first_address);
/// ```
///
/// # Panics
///
/// With [`Locking::Unsynchronized`], calling [`get()`][1] or [`release()`][2] while another
/// thread is inside one of them panics. Use [`Locking::Serialized`] to share the pool.
///
/// The factory and the reset hook run inside the pool's critical section, so they must not
/// call back into the same pool. Doing so deadlocks with [`Locking::Serialized`] and panics
/// with [`Locking::Unsynchronized`].
///
/// If the factory or the reset hook panics, the panic propagates to the caller unchanged.
/// The reservoir is left as it was: a failed `get()` removes nothing and a failed
/// `release()` adds nothing.
///
/// [1]: Self::get
/// [2]: Self::release
pub struct ObjectPool<T> {
    /// Idle instances, most recently released last.
    ///
    /// Both locking modes go through this one mutex and differ only in whether they wait for
    /// it. The guard is held across the whole of `get()` and `release()`, factory and reset
    /// hook included. Only surplus items are dropped after it is released.
    reservoir: Mutex<Vec<T>>,

    factory: Factory<T>,
    reset: Option<ResetHook<T>>,
    max_size: usize,
    locking: Locking,
}

impl<T> ObjectPool<T> {
    pub(crate) fn new_inner(
        factory: Factory<T>,
        reset: Option<ResetHook<T>>,
        capacity: usize,
        max_size: usize,
        locking: Locking,
    ) -> Self {
        Self {
            reservoir: Mutex::new(Vec::with_capacity(capacity.min(max_size))),
            factory,
            reset,
            max_size,
            locking,
        }
    }

    /// Creates a pool with the default configuration: no reset hook, no size limit and
    /// [`Locking::Unsynchronized`].
    ///
    /// # Example
    ///
    /// ```
    /// use recycle_pool::ObjectPool;
    ///
    /// let pool = ObjectPool::new(String::new);
    ///
    /// let text = pool.get();
    /// assert!(text.is_empty());
    /// ```
    #[must_use]
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::builder(factory).build()
    }

    /// Starts building a new [`ObjectPool`] that constructs new instances with `factory`.
    ///
    /// Use this when you want to customize the pool configuration beyond the defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use recycle_pool::{Locking, ObjectPool};
    ///
    /// let pool = ObjectPool::builder(|| vec![0_u8; 16])
    ///     .max_size(2)
    ///     .locking(Locking::Serialized)
    ///     .build();
    /// ```
    pub fn builder<F>(factory: F) -> ObjectPoolBuilder<T>
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        ObjectPoolBuilder::new(Box::new(factory))
    }

    /// Takes the most recently released idle instance, or constructs a new one if the
    /// reservoir is empty.
    ///
    /// # Panics
    ///
    /// Propagates any panic from the factory. See also the [type-level panic notes][1].
    ///
    /// [1]: ObjectPool#panics
    #[must_use]
    pub fn get(&self) -> T {
        let mut reservoir = self.lock_reservoir();

        reservoir.pop().unwrap_or_else(|| (self.factory)())
    }

    /// Resets `item` with the configured hook and stores it for reuse, or drops it if the
    /// reservoir already holds the maximum number of idle instances.
    ///
    /// The reset hook runs exactly once per call, whether or not the item is retained.
    ///
    /// # Panics
    ///
    /// Propagates any panic from the reset hook, in which case `item` is dropped without
    /// entering the reservoir. See also the [type-level panic notes][1].
    ///
    /// [1]: ObjectPool#panics
    pub fn release(&self, mut item: T) {
        let mut reservoir = self.lock_reservoir();

        if let Some(reset) = &self.reset {
            reset(&mut item);
        }

        if reservoir.len() < self.max_size {
            reservoir.push(item);
            return;
        }

        drop(reservoir);

        // Rejected items are dropped outside the lock.
        drop(item);
    }

    /// Takes an instance like [`get()`][1] and wraps it in a guard that releases it back to
    /// this pool when dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use recycle_pool::ObjectPool;
    ///
    /// let pool = ObjectPool::builder(String::new).reset(String::clear).build();
    ///
    /// {
    ///     let mut text = pool.get_recycled();
    ///     text.push_str("scratch space");
    /// } // Released here.
    ///
    /// assert!(pool.get().capacity() >= "scratch space".len());
    /// ```
    ///
    /// [1]: Self::get
    #[must_use]
    pub fn get_recycled(&self) -> Recycled<'_, T> {
        Recycled::new(self, self.get())
    }

    /// The locking mode the pool was created with.
    #[must_use]
    pub fn locking(&self) -> Locking {
        self.locking
    }

    /// Enters the pool's mutual exclusion domain for the duration of one `get()` or
    /// `release()`, including any factory or reset hook call made by it.
    fn lock_reservoir(&self) -> MutexGuard<'_, Vec<T>> {
        match self.locking {
            Locking::Serialized => self.reservoir.lock(),
            Locking::Unsynchronized => self
                .reservoir
                .try_lock()
                .expect("unsynchronized pool used concurrently; use Locking::Serialized"),
        }
    }

    #[cfg(test)]
    pub(crate) fn idle_count(&self) -> usize {
        self.reservoir.lock().len()
    }

    #[cfg(test)]
    pub(crate) fn reservoir_capacity(&self) -> usize {
        self.reservoir.lock().capacity()
    }
}

impl<T> Pool<T> for ObjectPool<T> {
    fn get(&self) -> T {
        Self::get(self)
    }

    fn release(&self, item: T) {
        Self::release(self, item);
    }
}

impl<T> fmt::Debug for ObjectPool<T> {
    #[cfg_attr(test, mutants::skip)] // Debug output is not part of the contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field(
                "item_type",
                &format_args!("{}", std::any::type_name::<T>()),
            )
            .field("idle", &self.reservoir.try_lock().map(|reservoir| reservoir.len()))
            .field("max_size", &self.max_size)
            .field("has_reset", &self.reset.is_some())
            .field("locking", &self.locking)
            .finish_non_exhaustive()
    }
}
