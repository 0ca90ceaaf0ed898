use std::iter::FusedIterator;
use std::{slice, vec};

/// Iterator over shared references to the items of an [`UnstableList`][crate::UnstableList].
///
/// Created by [`UnstableList::iter()`][crate::UnstableList::iter].
#[derive(Debug)]
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(live: &'a [Option<T>]) -> Self {
        Self { slots: live.iter() }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over exclusive references to the items of an [`UnstableList`][crate::UnstableList].
///
/// Created by [`UnstableList::iter_mut()`][crate::UnstableList::iter_mut].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(live: &'a mut [Option<T>]) -> Self {
        Self {
            slots: live.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the items of an [`UnstableList`][crate::UnstableList].
///
/// Created by the [`IntoIterator`] implementation of the list. Stale slot contents left
/// behind by [`reset()`][crate::UnstableList::reset] are dropped without being yielded.
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(live: Vec<Option<T>>) -> Self {
        Self {
            slots: live.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
