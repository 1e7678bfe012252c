use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::collections::error::{EmptyContainer, InvalidArgument};
use crate::util::fmt::DebugEntries;
use crate::util::slots;

use super::Iter;

/// A first-in first-out queue over a contiguous backing store, addressed with a wrapping front
/// offset.
///
/// The element at logical position `i` (counting from the front) lives in physical slot
/// `(front + i) % cap`, so dequeuing only moves `front` forward instead of shifting elements.
/// Every slot that doesn't hold a live element is empty. When the store is full, the next
/// enqueue replaces it with one of twice the capacity, unwrapping the elements into its first
/// slots in logical order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the CircularQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
///
/// \* If the CircularQueue doesn't have room for the new element, `enqueue` will take `O(n)`.
#[derive(Clone)]
pub struct CircularQueue<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) front: usize,
    pub(crate) size: usize,
}

impl<T> CircularQueue<T> {
    /// The capacity of a CircularQueue created with [`CircularQueue::new`].
    pub const INITIAL_CAPACITY: usize = 3;

    /// Creates a new, empty CircularQueue with a capacity of [`CircularQueue::INITIAL_CAPACITY`].
    pub fn new() -> CircularQueue<T> {
        CircularQueue::with_capacity(Self::INITIAL_CAPACITY)
    }

    /// Creates a new, empty CircularQueue with exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if the memory layout of the backing store would have a size that exceeds
    /// [`isize::MAX`].
    pub fn with_capacity(cap: usize) -> CircularQueue<T> {
        CircularQueue {
            slots: slots::empty_slots(cap),
            front: 0,
            size: 0,
        }
    }

    /// Returns the number of elements in the queue.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the queue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the backing store.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the physical index of the front of the queue. This is a diagnostic view of the
    /// wrapping offset and isn't reset when the queue empties.
    pub const fn front_index(&self) -> usize {
        self.front
    }

    /// Returns the entire backing store in physical order. This is a diagnostic view;
    /// [`CircularQueue::iter`] should be preferred for reading elements.
    pub fn backing_store(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Returns a reference to the element at the front of the queue, if it exists.
    pub fn peek(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Adds the provided element to the back of the queue.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] without modifying the queue if `data` is `None`.
    ///
    /// # Panics
    /// Panics if the grown capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use classroom_collections::collections::circular::CircularQueue;
    /// let mut queue = CircularQueue::new();
    /// for c in ['a', 'b', 'c'] {
    ///     queue.enqueue(c).unwrap();
    /// }
    /// assert_eq!(queue.dequeue(), Ok('a'));
    ///
    /// // The back wraps round to the slot that 'a' was dequeued from.
    /// queue.enqueue('d').unwrap();
    /// assert_eq!(queue.capacity(), 3);
    /// assert_eq!(queue.backing_store(), &[Some('d'), Some('b'), Some('c')]);
    /// ```
    pub fn enqueue(&mut self, data: impl Into<Option<T>>) -> Result<(), InvalidArgument> {
        let value = data.into().ok_or(InvalidArgument)?;
        self.push_back(value);
        Ok(())
    }

    /// Removes and returns the element at the front of the queue. The front moves forward one
    /// slot, wrapping at the end of the backing store.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the queue has no elements.
    pub fn dequeue(&mut self) -> Result<T, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }

        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.size -= 1;

        value.ok_or(EmptyContainer)
    }

    /// Returns an iterator over the elements of the queue, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            front: self.front,
            start: 0,
            end: self.size,
        }
    }

    pub(crate) fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.grow();
        }

        let back = (self.front + self.size) % self.capacity();
        self.slots[back] = Some(value);
        self.size += 1;
    }

    /// Replaces the backing store with one of double the capacity, moving the elements into its
    /// first slots in logical order and resetting the front to 0.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow.
    pub(crate) fn grow(&mut self) {
        let old_cap = self.capacity();
        let new_cap = slots::grown_cap(old_cap);

        // Logical order runs from front to the end of the store, then wraps round to slot 0.
        let (wrapped, unwrapped) = self.slots.split_at_mut(self.front);
        let live = unwrapped.iter_mut().chain(wrapped.iter_mut()).take(self.size);

        self.slots = slots::regrow(live, new_cap);
        self.front = 0;
        log::trace!("CircularQueue grew from {old_cap} to {new_cap} slots");
    }
}

impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = CircularQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularQueue<T> {}

impl<T: Hash> Hash for CircularQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("contents", &DebugEntries(self.iter()))
            .field("size", &self.size)
            .field("front", &self.front)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T: Display> Display for CircularQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
