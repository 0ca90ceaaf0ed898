use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::{IndexOutOfRange, IntoIter, Iter, IterMut, Result};

/// The list never has fewer slots than this, even if asked for a smaller capacity.
pub const MIN_CAPACITY: usize = 4;

/// A list that removes items in O(1) time at the cost of changing the order of the list.
///
/// Items live in a buffer of slots. Slots `0..len()` hold the live items and are always
/// occupied. Slots from `len()` up to [`capacity()`][1] are vacant, except after
/// [`reset()`][2], which leaves the previous items in place (see [`buffer()`][3]).
///
/// Removal moves the last item into the vacated slot, so it does not preserve the relative
/// order of the remaining items. [`insert()`][4] does not preserve order either.
///
/// # Example
///
/// ```
/// use unstable_list::UnstableList;
///
/// let mut list = UnstableList::new();
/// list.push("a");
/// list.push("b");
/// list.push("c");
///
/// assert!(list.remove(&"a"));
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[0], "c");
/// ```
///
/// [1]: Self::capacity
/// [2]: Self::reset
/// [3]: Self::buffer
/// [4]: Self::insert
#[derive(Clone)]
pub struct UnstableList<T> {
    /// The length of this Vec is the capacity of the list. We never rely on the Vec's own
    /// spare capacity - every slot we consider part of the buffer is materialized.
    slots: Vec<Option<T>>,

    len: usize,
}

impl<T> UnstableList<T> {
    /// Creates an empty list with the minimum capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty list that can hold `capacity` items before it needs to grow.
    ///
    /// Values below [`MIN_CAPACITY`] are raised to it.
    ///
    /// # Example
    ///
    /// ```
    /// use unstable_list::UnstableList;
    ///
    /// let list = UnstableList::<u8>::with_capacity(1);
    /// assert_eq!(list.capacity(), 4);
    ///
    /// let list = UnstableList::<u8>::with_capacity(100);
    /// assert_eq!(list.capacity(), 100);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Self { slots, len: 0 }
    }

    /// The number of live items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no live items. It may still be holding capacity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of slots in the buffer.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The raw slot buffer, including vacant slots past the end of the list.
    ///
    /// Live items are `buffer()[..len()]` and are always `Some`. After [`clear()`][1] and
    /// [`remove_at()`][2] the vacated slots read as `None`. After [`reset()`][3] the previous
    /// items remain visible here until they are overwritten.
    ///
    /// [1]: Self::clear
    /// [2]: Self::remove_at
    /// [3]: Self::reset
    #[must_use]
    pub fn buffer(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Appends an item to the end of the list, doubling the capacity if the list is full.
    pub fn push(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.grow();
        }

        *self.slot_mut(self.len) = Some(item);

        self.len = self
            .len
            .checked_add(1)
            .expect("length cannot overflow because every item occupies a materialized slot");
    }

    /// Removes the item at `index` and returns it, moving the last item into its slot.
    ///
    /// This takes O(1) time and does not preserve the order of the remaining items.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `index >= len()`. The list is not modified.
    ///
    /// # Example
    ///
    /// ```
    /// use unstable_list::UnstableList;
    ///
    /// let mut list: UnstableList<_> = [10, 20, 30, 40].into_iter().collect();
    ///
    /// assert_eq!(list.remove_at(1), Ok(20));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 40, 30]);
    ///
    /// assert!(list.remove_at(3).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;

        let last = self
            .len
            .checked_sub(1)
            .expect("a valid index implies the list is not empty");

        self.slots.swap(index, last);
        self.len = last;

        Ok(self
            .slot_mut(last)
            .take()
            .expect("the swapped-out slot held a live item"))
    }

    /// Removes and returns the last item, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.len = last;
        self.slot_mut(last).take()
    }

    /// Removes the first item equal to `item`. Returns whether an item was removed.
    ///
    /// This scans the list and takes O(n) time. The removal itself behaves like
    /// [`remove_at()`][1].
    ///
    /// [1]: Self::remove_at
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_with(item, PartialEq::eq)
    }

    /// Removes the first item that `eq` considers equal to `item`.
    /// Returns whether an item was removed.
    ///
    /// # Example
    ///
    /// ```
    /// use unstable_list::UnstableList;
    ///
    /// let mut list: UnstableList<_> = ["Alpha", "beta"].into_iter().collect();
    ///
    /// assert!(list.remove_with(&"BETA", |a, b| a.eq_ignore_ascii_case(b)));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove_with(&mut self, item: &T, eq: impl Fn(&T, &T) -> bool) -> bool {
        match self.index_of_with(item, eq) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Whether the list contains an item equal to `item`. O(n).
    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Whether the list contains an item that `eq` considers equal to `item`. O(n).
    #[must_use]
    pub fn contains_with(&self, item: &T, eq: impl Fn(&T, &T) -> bool) -> bool {
        self.index_of_with(item, eq).is_some()
    }

    /// The index of the first item equal to `item`, if any. O(n).
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_with(item, PartialEq::eq)
    }

    /// The index of the first item that `eq` considers equal to `item`, if any. O(n).
    ///
    /// `eq` receives the candidate from the list first and `item` second.
    #[must_use]
    pub fn index_of_with(&self, item: &T, eq: impl Fn(&T, &T) -> bool) -> Option<usize> {
        self.iter().position(|candidate| eq(candidate, item))
    }

    /// Inserts `item` at `index`, moving the previous occupant of `index` to the end.
    ///
    /// Inserting at `index == len()` is the same as [`push()`][1] and is the only way to
    /// extend the list with this method. This does not preserve order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `index > len()`. The list is not modified.
    ///
    /// # Example
    ///
    /// ```
    /// use unstable_list::UnstableList;
    ///
    /// let mut list: UnstableList<_> = [1, 2, 3].into_iter().collect();
    ///
    /// list.insert(0, 9).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [9, 2, 3, 1]);
    ///
    /// list.insert(4, 7).unwrap();
    /// assert_eq!(list[4], 7);
    /// ```
    ///
    /// [1]: Self::push
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len {
            return Err(IndexOutOfRange::new(index, self.len));
        }

        let end = self.len;
        self.push(item);

        if index != end {
            self.slots.swap(index, end);
        }

        Ok(())
    }

    /// A shared reference to the item at `index`, or `None` if `index >= len()`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.live().get(index).and_then(Option::as_ref)
    }

    /// An exclusive reference to the item at `index`, or `None` if `index >= len()`.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.live_mut().get_mut(index).and_then(Option::as_mut)
    }

    /// Replaces the item at `index` with `value`, returning the previous item.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `index >= len()`. The list is not modified.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.check_index(index)?;

        Ok(mem::replace(self.slot_mut(index), Some(value))
            .expect("slots below the length always hold a live item"))
    }

    /// Removes all items and vacates every slot, including stale ones left behind by
    /// [`reset()`][Self::reset]. The capacity is retained.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| None);
        self.len = 0;
    }

    /// Sets the length to zero without vacating any slots.
    ///
    /// This is faster than [`clear()`][1] but the previous items are not dropped. They stay
    /// reachable through [`buffer()`][2] until a later operation overwrites their slots.
    ///
    /// # Example
    ///
    /// ```
    /// use unstable_list::UnstableList;
    ///
    /// let mut list: UnstableList<_> = [1, 2].into_iter().collect();
    /// list.reset();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.buffer()[0], Some(1));
    /// ```
    ///
    /// [1]: Self::clear
    /// [2]: Self::buffer
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Shrinks the capacity to `max(len(), MIN_CAPACITY)`.
    ///
    /// Stale items left behind by [`reset()`][1] in the released slots are dropped.
    ///
    /// [1]: Self::reset
    #[cfg_attr(test, mutants::skip)] // Allocator-level shrinking is not observable.
    pub fn truncate(&mut self) {
        self.slots.truncate(self.len.max(MIN_CAPACITY));
        self.slots.shrink_to_fit();
    }

    /// Copies the live items into `destination`, starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `destination` does not have room for `len()` items
    /// after `offset`. The destination is not modified in that case.
    pub fn copy_to(&self, destination: &mut [T], offset: usize) -> Result<()>
    where
        T: Clone,
    {
        let out_of_range = IndexOutOfRange::new(offset, destination.len());

        let end = offset.checked_add(self.len).ok_or(out_of_range)?;
        let target = destination.get_mut(offset..end).ok_or(out_of_range)?;

        for (target, item) in target.iter_mut().zip(self.iter()) {
            target.clone_from(item);
        }

        Ok(())
    }

    /// Iterates over the live items from the first slot to the last.
    ///
    /// Every call starts a fresh pass over the current contents.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.live())
    }

    /// Iterates over the live items from the first slot to the last, allowing modification.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.live_mut())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfRange::new(index, self.len))
        }
    }

    #[cfg_attr(test, mutants::skip)] // Can be mutated to infinitely growing memory use.
    fn grow(&mut self) {
        let new_capacity = self
            .slots
            .len()
            .checked_mul(2)
            .expect("capacity overflow: the list cannot grow beyond the address space");

        self.slots.resize_with(new_capacity, || None);
    }

    fn live(&self) -> &[Option<T>] {
        self.slots
            .get(..self.len)
            .expect("length never exceeds the number of slots")
    }

    fn live_mut(&mut self) -> &mut [Option<T>] {
        self.slots
            .get_mut(..self.len)
            .expect("length never exceeds the number of slots")
    }

    fn slot_mut(&mut self, index: usize) -> &mut Option<T> {
        self.slots
            .get_mut(index)
            .expect("caller guarantees the slot index is within capacity")
    }
}

impl<T> Default for UnstableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for UnstableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnstableList")
            .field("items", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for UnstableList<T> {
    /// Two lists are equal if they hold equal live items in the same slots.
    /// Capacity and stale slot contents do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.live() == other.live()
    }
}

impl<T: Eq> Eq for UnstableList<T> {}

impl<T> Index<usize> for UnstableList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!("{}", IndexOutOfRange::new(index, self.len)),
        }
    }
}

impl<T> IndexMut<usize> for UnstableList<T> {
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;

        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("{}", IndexOutOfRange::new(index, len)),
        }
    }
}

impl<T> From<Vec<T>> for UnstableList<T> {
    /// Takes over the items of the vector in their current order.
    fn from(items: Vec<T>) -> Self {
        let len = items.len();

        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        slots.resize_with(len.max(MIN_CAPACITY), || None);

        Self { slots, len }
    }
}

impl<T> FromIterator<T> for UnstableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for UnstableList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a UnstableList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut UnstableList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for UnstableList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.slots.truncate(self.len);
        IntoIter::new(self.slots)
    }
}
