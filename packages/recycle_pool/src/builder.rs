use std::fmt;

use crate::{Factory, Locking, ObjectPool, ResetHook};

/// Builder for creating an instance of [`ObjectPool`].
///
/// The factory is mandatory and is supplied when the builder is created, whereas the other
/// settings are optional:
///
/// * [`reset()`][1] - a hook that restores released instances to a reusable state.
///   Without one, instances go back into the reservoir as they are.
/// * [`capacity()`][2] - how many idle instances to reserve room for up front.
/// * [`max_size()`][3] - the most idle instances the pool will retain. Unbounded by default.
/// * [`locking()`][4] - whether calls from multiple threads are serialized.
///
/// # Examples
///
/// ```
/// use recycle_pool::{Locking, ObjectPool};
///
/// let pool = ObjectPool::builder(|| vec![0_u8; 16])
///     .reset(|buffer| buffer.fill(0))
///     .capacity(4)
///     .max_size(32)
///     .locking(Locking::Serialized)
///     .build();
///
/// let buffer = pool.get();
/// assert_eq!(buffer.len(), 16);
/// ```
#[must_use]
pub struct ObjectPoolBuilder<T> {
    factory: Factory<T>,
    reset: Option<ResetHook<T>>,
    capacity: usize,
    max_size: usize,
    locking: Locking,
}

impl<T> fmt::Debug for ObjectPoolBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPoolBuilder")
            .field(
                "item_type",
                &format_args!("{}", std::any::type_name::<T>()),
            )
            .field("has_reset", &self.reset.is_some())
            .field("capacity", &self.capacity)
            .field("max_size", &self.max_size)
            .field("locking", &self.locking)
            .finish_non_exhaustive()
    }
}

impl<T> ObjectPoolBuilder<T> {
    pub(crate) fn new(factory: Factory<T>) -> Self {
        Self {
            factory,
            reset: None,
            capacity: 0,
            max_size: usize::MAX,
            locking: Locking::default(),
        }
    }

    /// Sets the hook that is called on every released instance before it is considered for
    /// the reservoir. It is called even when the instance is then dropped because the
    /// reservoir is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycle_pool::ObjectPool;
    ///
    /// let pool = ObjectPool::builder(String::new).reset(String::clear).build();
    ///
    /// pool.release("stale content".to_string());
    /// assert_eq!(pool.get(), "");
    /// ```
    pub fn reset<R>(mut self, reset: R) -> Self
    where
        R: Fn(&mut T) + Send + Sync + 'static,
    {
        self.reset = Some(Box::new(reset));
        self
    }

    /// Reserves room for `capacity` idle instances when the pool is created.
    ///
    /// This is only a hint. The reservoir grows on demand up to [`max_size()`][1] regardless.
    ///
    /// [1]: Self::max_size
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the maximum number of idle instances the pool retains.
    ///
    /// Instances released while the reservoir is full are dropped. A maximum of zero turns
    /// the pool into a plain factory that never reuses anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycle_pool::ObjectPool;
    ///
    /// let pool = ObjectPool::builder(|| 0_u32).max_size(1).build();
    ///
    /// pool.release(1);
    /// pool.release(2); // Dropped, the reservoir already holds one instance.
    ///
    /// assert_eq!(pool.get(), 1);
    /// assert_eq!(pool.get(), 0); // Freshly constructed.
    /// ```
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the [locking mode][Locking] of the pool.
    pub fn locking(mut self, locking: Locking) -> Self {
        self.locking = locking;
        self
    }

    /// Builds the pool with the specified configuration.
    #[must_use]
    pub fn build(self) -> ObjectPool<T> {
        ObjectPool::new_inner(
            self.factory,
            self.reset,
            self.capacity,
            self.max_size,
            self.locking,
        )
    }
}
