#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A resizable list that removes items in O(1) time by giving up element order.
//!
//! [`UnstableList`] stores its items in a contiguous buffer of slots. Removing an item moves
//! the last item into the vacated slot instead of shifting every following item, so removal by
//! index costs the same regardless of list length. The price is that the relative order of the
//! remaining items changes.
//!
//! ```
//! use unstable_list::UnstableList;
//!
//! let mut list: UnstableList<i32> = [10, 20, 30, 40].into_iter().collect();
//!
//! let removed = list.remove_at(1).unwrap();
//! assert_eq!(removed, 20);
//!
//! // The last item took the place of the removed one.
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 40, 30]);
//! ```
//!
//! # Capacity
//!
//! The buffer never holds fewer than four slots. It doubles when an item is added to a full
//! list and only ever shrinks when [`UnstableList::truncate()`] is called.
//!
//! # Removing while walking the list
//!
//! Removing the item at position `i` only disturbs slot `i` and the last slot. A forward pass
//! driven by an index can therefore keep going after a removal, with one caveat: the item moved
//! into slot `i` has not been visited yet, so a loop that advances past `i` after removing will
//! skip it.
//!
//! ```
//! use unstable_list::UnstableList;
//!
//! let mut list: UnstableList<i32> = [1, 2, 3, 4, 5, 6].into_iter().collect();
//!
//! let mut index = 0;
//! while index < list.len() {
//!     if list[index] % 2 == 0 {
//!         list.remove_at(index).unwrap();
//!         // Do not advance - a not yet visited item now occupies this slot.
//!     } else {
//!         index += 1;
//!     }
//! }
//!
//! assert_eq!(list.len(), 3);
//! assert!(list.iter().all(|x| x % 2 == 1));
//! ```
//!
//! # Thread safety
//!
//! The list has no internal synchronization. Share it between threads only behind whatever
//! lock the owner already uses.

mod error;
mod iter;
mod list;

pub use error::*;
pub use iter::*;
pub use list::*;
