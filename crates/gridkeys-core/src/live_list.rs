//! Observable ordered collection.
//!
//! [`LiveList`] is an ordered sequence paired with a change signal. Every
//! structural mutation (insert, remove, move, reset) is followed by one
//! emission of [`LiveList::changes`] carrying a snapshot of the new sequence.
//! Consumers that index into the list use the notification to re-derive their
//! indices.
//!
//! # Example
//!
//! ```
//! use gridkeys_core::LiveList;
//!
//! let list = LiveList::new(vec!["a", "b"]);
//! list.changes().connect(|items: &Vec<&str>| {
//!     println!("now {} items", items.len());
//! });
//!
//! list.push("c");
//! list.move_item(2, 0);
//! assert_eq!(list.snapshot(), vec!["c", "a", "b"]);
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{CollectionError, CollectionResult};
use crate::logging::targets;
use crate::signal::Signal;

/// An ordered collection that notifies subscribers after structural changes.
///
/// The internal lock is never held while [`changes`](Self::changes) is emitted,
/// so slots may read or even mutate the list again.
pub struct LiveList<T> {
    items: RwLock<Vec<T>>,
    changes: Arc<Signal<Vec<T>>>,
}

impl<T: Clone + Send + Sync + 'static> Default for LiveList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LiveList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveList")
            .field("items", &*self.items.read())
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> LiveList<T> {
    /// Creates a list holding `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            changes: Arc::new(Signal::new()),
        }
    }

    /// Creates an empty list.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The change notification, emitted with the new sequence after every
    /// structural mutation.
    pub fn changes(&self) -> &Arc<Signal<Vec<T>>> {
        &self.changes
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns a clone of the item at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.read().get(index).cloned()
    }

    /// Returns a copy of the current sequence.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.read().clone()
    }

    /// Runs `f` against the current sequence under the read lock.
    ///
    /// `f` must not mutate this list.
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.items.read())
    }

    /// Appends an item.
    pub fn push(&self, item: T) {
        self.mutate(|items| items.push(item));
    }

    /// Inserts an item at `index`, shifting later items.
    ///
    /// Returns `false` (and does nothing) if `index > len()`.
    pub fn insert(&self, index: usize, item: T) -> bool {
        self.try_insert(index, item).is_ok()
    }

    /// Inserts an item at `index`, failing if `index > len()`.
    pub fn try_insert(&self, index: usize, item: T) -> CollectionResult<()> {
        let snapshot = {
            let mut items = self.items.write();
            if index > items.len() {
                return Err(CollectionError::IndexOutOfRange {
                    index,
                    len: items.len(),
                });
            }
            items.insert(index, item);
            items.clone()
        };
        self.notify(snapshot);
        Ok(())
    }

    /// Removes and returns the item at `index`, or `None` if out of range.
    pub fn remove(&self, index: usize) -> Option<T> {
        self.try_remove(index).ok()
    }

    /// Removes and returns the item at `index`, failing if out of range.
    pub fn try_remove(&self, index: usize) -> CollectionResult<T> {
        let (removed, snapshot) = {
            let mut items = self.items.write();
            if index >= items.len() {
                return Err(CollectionError::IndexOutOfRange {
                    index,
                    len: items.len(),
                });
            }
            let removed = items.remove(index);
            (removed, items.clone())
        };
        self.notify(snapshot);
        Ok(removed)
    }

    /// Moves the item at `from` so it ends up at `to`.
    ///
    /// Returns `false` (and does nothing) if either index is out of range.
    pub fn move_item(&self, from: usize, to: usize) -> bool {
        self.try_move_item(from, to).is_ok()
    }

    /// Moves the item at `from` so it ends up at `to`, failing if either
    /// index is out of range.
    pub fn try_move_item(&self, from: usize, to: usize) -> CollectionResult<()> {
        let snapshot = {
            let mut items = self.items.write();
            let len = items.len();
            for index in [from, to] {
                if index >= len {
                    return Err(CollectionError::IndexOutOfRange { index, len });
                }
            }
            let item = items.remove(from);
            items.insert(to, item);
            items.clone()
        };
        self.notify(snapshot);
        Ok(())
    }

    /// Swaps two items. Returns `false` if either index is out of range.
    pub fn swap(&self, a: usize, b: usize) -> bool {
        let snapshot = {
            let mut items = self.items.write();
            if a >= items.len() || b >= items.len() {
                return false;
            }
            items.swap(a, b);
            items.clone()
        };
        self.notify(snapshot);
        true
    }

    /// Replaces the whole sequence.
    pub fn set_items(&self, new_items: Vec<T>) {
        self.mutate(|items| *items = new_items);
    }

    /// Removes all items.
    pub fn clear(&self) {
        self.mutate(Vec::clear);
    }

    /// Applies an arbitrary mutation and emits a single notification.
    ///
    /// ```
    /// use gridkeys_core::LiveList;
    ///
    /// let list = LiveList::new(vec![3, 1, 2]);
    /// list.modify(|items| items.sort());
    /// assert_eq!(list.snapshot(), vec![1, 2, 3]);
    /// ```
    pub fn modify<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let (result, snapshot) = {
            let mut items = self.items.write();
            let result = f(&mut items);
            (result, items.clone())
        };
        self.notify(snapshot);
        result
    }

    /// Re-emits the current sequence without mutating it.
    pub fn notify_on_changes(&self) {
        let snapshot = self.snapshot();
        self.notify(snapshot);
    }

    fn mutate(&self, f: impl FnOnce(&mut Vec<T>)) {
        self.modify(f);
    }

    fn notify(&self, snapshot: Vec<T>) {
        tracing::trace!(target: targets::LIVE_LIST, len = snapshot.len(), "collection changed");
        self.changes.emit(snapshot);
    }
}
