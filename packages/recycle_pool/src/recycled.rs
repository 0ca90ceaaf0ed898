use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::ObjectPool;

/// An instance taken from an [`ObjectPool`] that goes back to the pool when dropped.
///
/// Created by [`ObjectPool::get_recycled()`]. Dropping the guard is equivalent to calling
/// [`ObjectPool::release()`] with the instance, including the reset hook.
///
/// # Example
///
/// ```
/// use recycle_pool::ObjectPool;
///
/// let pool = ObjectPool::new(|| vec![0_u8; 4]);
///
/// let mut buffer = pool.get_recycled();
/// buffer[0] = 9;
///
/// // Keep the instance instead of returning it.
/// let owned: Vec<u8> = buffer.into_inner();
/// assert_eq!(owned, [9, 0, 0, 0]);
/// ```
pub struct Recycled<'a, T> {
    pool: &'a ObjectPool<T>,

    /// Only `None` after the instance has been moved out in `into_inner()` or `drop()`.
    item: Option<T>,
}

impl<'a, T> Recycled<'a, T> {
    pub(crate) fn new(pool: &'a ObjectPool<T>, item: T) -> Self {
        Self {
            pool,
            item: Some(item),
        }
    }

    /// Detaches the instance from the guard so that it is not released back to the pool.
    #[must_use]
    pub fn into_inner(mut self) -> T {
        self.item
            .take()
            .expect("the instance is present until the guard is consumed")
    }
}

impl<T> Deref for Recycled<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.item
            .as_ref()
            .expect("the instance is present until the guard is consumed")
    }
}

impl<T> DerefMut for Recycled<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.item
            .as_mut()
            .expect("the instance is present until the guard is consumed")
    }
}

impl<T> Drop for Recycled<'_, T> {
    fn drop(&mut self) {
        if let Some(item) = self.item.take() {
            self.pool.release(item);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Recycled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recycled")
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Recycled<'static, u32>: Send, Sync);

    #[test]
    fn drop_releases_to_pool() {
        let created = Arc::new(AtomicUsize::new(0));
        let factory_created = Arc::clone(&created);
        let pool = ObjectPool::new(move || factory_created.fetch_add(1, Ordering::Relaxed));

        {
            let item = pool.get_recycled();
            assert_eq!(*item, 0);
        }

        assert_eq!(*pool.get_recycled(), 0);
        assert_eq!(created.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn drop_runs_reset_hook() {
        let pool = ObjectPool::builder(String::new).reset(String::clear).build();

        {
            let mut text = pool.get_recycled();
            text.push_str("dirty");
            assert_eq!(&*text, "dirty");
        }

        assert_eq!(pool.get(), "");
    }

    #[test]
    fn into_inner_does_not_release() {
        let pool = ObjectPool::new(|| 5_u32);

        let item = pool.get_recycled().into_inner();
        assert_eq!(item, 5);

        assert_eq!(pool.idle_count(), 0);
    }

    #[test]
    fn guard_respects_max_size() {
        let pool = ObjectPool::builder(|| 1_u8).max_size(1).build();

        let a = pool.get_recycled();
        let b = pool.get_recycled();
        drop(a);
        drop(b);

        assert_eq!(pool.idle_count(), 1);
    }
}
