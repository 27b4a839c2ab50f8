//! `IndexedMinHeap` - a binary min-heap with a reverse position index.
//!
//! The heap keeps its elements in a dense `Vec` laid out as a complete binary tree
//! (children of `i` at `2i + 1` and `2i + 2`, parent at `(i - 1) / 2`). Next to the
//! array it maintains a map from each stored value to the set of slots currently
//! holding it, which turns removal of an *arbitrary* value from an `O(n)` scan into
//! an `O(1)` lookup followed by an `O(log n)` local repair.
//!
//! Duplicates are allowed. When a value occurs more than once, [`IndexedMinHeap::remove`]
//! takes out one unspecified occurrence; callers must not depend on which slot is chosen.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert` | \(O(\log n)\) |
//! | `peek` | \(O(1)\) |
//! | `poll` | \(O(\log n)\) |
//! | `remove` | \(O(\log n)\) |
//! | `contains` | \(O(1)\) |

use core::fmt;
use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::invariant::invariant_assert_with;

/// Number of slots pre-allocated by [`IndexedMinHeap::new`].
pub const DEFAULT_HEAP_CAPACITY: usize = 10;

/// Returns the parent index of `index`, or `None` for the root.
#[inline]
pub fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

#[inline]
fn left_of(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_of(index: usize) -> usize {
    2 * index + 2
}

/// A binary min-heap supporting logarithmic removal of any stored value.
///
/// The smallest element is always at the root. Besides the usual `insert`/`poll`
/// pair, any value can be removed in \(O(\log n)\) and membership is answered in
/// \(O(1)\) through the position index.
#[derive(Clone)]
pub struct IndexedMinHeap<T> {
    storage: Vec<T>,
    positions: HashMap<T, HashSet<usize>>,
}

impl<T: Ord + Hash + Clone> IndexedMinHeap<T> {
    /// Creates an empty heap with [`DEFAULT_HEAP_CAPACITY`] pre-allocated slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HEAP_CAPACITY)
    }

    /// Creates an empty heap able to hold `capacity` elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts `value` and bubbles it up to its place.
    pub fn insert(&mut self, value: T) {
        let index = self.storage.len();
        self.positions
            .entry(value.clone())
            .or_default()
            .insert(index);
        self.storage.push(value);
        self.sift_up(index);
        trace_event!(index, len = self.storage.len(), "heap insert");
        self.debug_check("insert");
    }

    /// Returns the minimum without removing it, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Removes and returns the minimum, or `None` if the heap is empty.
    pub fn poll(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            return None;
        }
        self.remove_at(0)
    }

    /// Removes one occurrence of `value` and returns it.
    ///
    /// Returns `None` when `value` is not stored. If several slots hold equal values,
    /// which one is taken out is unspecified.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self
            .positions
            .get(value)
            .and_then(|slots| slots.iter().next().copied())?;
        self.remove_at(index)
    }

    /// Returns `true` if at least one occurrence of `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }

    /// Returns how many occurrences of `value` are stored.
    pub fn count(&self, value: &T) -> usize {
        self.positions.get(value).map_or(0, HashSet::len)
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Removes every element, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.positions.clear();
    }

    /// Iterates over the elements in storage (level) order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Returns the left child of the element at `index`, if it exists.
    pub fn left_child(&self, index: usize) -> Option<&T> {
        self.storage.get(left_of(index))
    }

    /// Returns the right child of the element at `index`, if it exists.
    pub fn right_child(&self, index: usize) -> Option<&T> {
        self.storage.get(right_of(index))
    }

    /// Returns the parent of the element at `index`, if it exists.
    pub fn parent_of(&self, index: usize) -> Option<&T> {
        if index >= self.storage.len() {
            return None;
        }
        parent(index).map(|p| &self.storage[p])
    }

    /// One row per slot: the value plus its children, for diagnostics.
    pub fn rows(&self) -> Vec<HeapRow<'_, T>> {
        self.storage
            .iter()
            .enumerate()
            .map(|(index, value)| HeapRow {
                index,
                value,
                left: self.left_child(index),
                right: self.right_child(index),
            })
            .collect()
    }

    /// Verifies the heap order and the consistency of the position index.
    pub fn check_invariants(&self) -> bool {
        let ordered = (1..self.storage.len())
            .all(|i| parent(i).is_none_or(|p| self.storage[p] <= self.storage[i]));
        if !ordered {
            return false;
        }

        let tracked: usize = self.positions.values().map(HashSet::len).sum();
        if tracked != self.storage.len() {
            return false;
        }
        let every_slot_tracked = self.storage.iter().enumerate().all(|(i, value)| {
            self.positions
                .get(value)
                .is_some_and(|slots| slots.contains(&i))
        });
        let no_stale_entries = self.positions.iter().all(|(value, slots)| {
            !slots.is_empty()
                && slots
                    .iter()
                    .all(|&i| self.storage.get(i).is_some_and(|stored| stored == value))
        });
        every_slot_tracked && no_stale_entries
    }

    fn remove_at(&mut self, index: usize) -> Option<T> {
        let last = self.storage.len().checked_sub(1)?;
        self.swap(index, last);
        let removed = self.storage.pop()?;
        self.untrack(&removed, last);

        // Only the moved element can be out of place, and only in one direction.
        if index < self.storage.len() {
            let parent_greater =
                parent(index).is_some_and(|p| self.storage[p] > self.storage[index]);
            if parent_greater {
                self.sift_up(index);
            } else {
                self.sift_down(index);
            }
        }

        trace_event!(index, len = self.storage.len(), "heap remove");
        self.debug_check("remove");
        Some(removed)
    }

    fn sift_up(&mut self, mut index: usize) {
        while let Some(p) = parent(index) {
            if self.storage[p] > self.storage[index] {
                self.swap(index, p);
                index = p;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        loop {
            let left = left_of(index);
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.storage[right] < self.storage[left] {
                smaller = right;
            }

            if self.storage[smaller] < self.storage[index] {
                self.swap(index, smaller);
                index = smaller;
            } else {
                break;
            }
        }
    }

    /// Exchanges two slots, keeping the position index in step.
    fn swap(&mut self, a: usize, b: usize) {
        // Equal values share one slot set, which already holds both indices.
        if a == b || self.storage[a] == self.storage[b] {
            return;
        }
        self.storage.swap(a, b);
        relocate(&mut self.positions, &self.storage[a], b, a);
        relocate(&mut self.positions, &self.storage[b], a, b);
    }

    fn untrack(&mut self, value: &T, index: usize) {
        if let Some(slots) = self.positions.get_mut(value) {
            slots.remove(&index);
            if slots.is_empty() {
                self.positions.remove(value);
            }
        }
    }

    #[inline]
    fn debug_check(&self, op: &str) {
        invariant_assert_with(|| self.check_invariants(), op);
    }
}

fn relocate<T: Hash + Eq>(
    positions: &mut HashMap<T, HashSet<usize>>,
    value: &T,
    from: usize,
    to: usize,
) {
    if let Some(slots) = positions.get_mut(value) {
        slots.remove(&from);
        slots.insert(to);
    }
}

/// A single slot of the heap together with its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeapRow<'a, T> {
    /// Slot index in the backing array.
    pub index: usize,
    /// Value stored at `index`.
    pub value: &'a T,
    /// Left child, if present.
    pub left: Option<&'a T>,
    /// Right child, if present.
    pub right: Option<&'a T>,
}

impl<T: Ord + Hash + Clone> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for IndexedMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0.max(DEFAULT_HEAP_CAPACITY));
        heap.extend(iter);
        heap
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for IndexedMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a IndexedMinHeap<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<T: fmt::Debug> fmt::Display for IndexedMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.storage.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("len", &self.storage.len())
            .field("storage", &self.storage)
            .finish()
    }
}
