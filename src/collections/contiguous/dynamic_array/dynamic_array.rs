use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use crate::collections::error::{EmptyContainer, InvalidArgument};
use crate::util::fmt::DebugEntries;
use crate::util::slots;

use super::Iter;

/// A variable size list over a single contiguous backing store.
///
/// Live elements always occupy slots `[0, size)` of the backing store, in list order, and every
/// slot beyond them is empty. When an insertion finds the store full, the store is replaced with
/// one of twice the capacity before anything is moved. The store never shrinks.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `get` | `O(1)` |
/// | `add_to_back` | `O(1)`*, `O(n)` |
/// | `add_to_front` | `O(n)` |
/// | `remove_from_back` | `O(1)` |
/// | `remove_from_front` | `O(n)` |
///
/// \* If the DynamicArray doesn't have room for the new element, `add_to_back` will take `O(n)`.
#[derive(Clone)]
pub struct DynamicArray<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) size: usize,
}

impl<T> DynamicArray<T> {
    /// The capacity of a DynamicArray created with [`DynamicArray::new`].
    pub const INITIAL_CAPACITY: usize = 9;

    /// Creates a new, empty DynamicArray with a capacity of [`DynamicArray::INITIAL_CAPACITY`].
    ///
    /// # Examples
    /// ```
    /// # use classroom_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(arr.capacity(), DynamicArray::<u8>::INITIAL_CAPACITY);
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray::with_capacity(Self::INITIAL_CAPACITY)
    }

    /// Creates a new, empty DynamicArray with exactly `cap` slots.
    ///
    /// # Panics
    /// Panics if the memory layout of the backing store would have a size that exceeds
    /// [`isize::MAX`].
    pub fn with_capacity(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            slots: slots::empty_slots(cap),
            size: 0,
        }
    }

    /// Returns the number of live elements in the DynamicArray.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the backing store.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the entire backing store, including the empty slots past the last element. This is
    /// a diagnostic view; [`DynamicArray::iter`] should be preferred for reading elements.
    pub fn backing_store(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Returns a reference to the element at `index`, if it is in bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.size {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.size.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Adds the provided element to the front of the DynamicArray, shifting every other element
    /// one slot toward the back.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] without modifying the DynamicArray if `data` is `None`.
    ///
    /// # Panics
    /// Panics if the grown capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use classroom_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::new();
    /// arr.add_to_front("b").unwrap();
    /// arr.add_to_front("a").unwrap();
    /// assert!(arr.add_to_front(None).is_err());
    /// assert!(arr.iter().eq(&["a", "b"]));
    /// ```
    pub fn add_to_front(&mut self, data: impl Into<Option<T>>) -> Result<(), InvalidArgument> {
        let value = data.into().ok_or(InvalidArgument)?;
        self.push_front(value);
        Ok(())
    }

    /// Adds the provided element to the back of the DynamicArray.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] without modifying the DynamicArray if `data` is `None`.
    ///
    /// # Panics
    /// Panics if the grown capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use classroom_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::with_capacity(1);
    /// arr.add_to_back(1).unwrap();
    /// arr.add_to_back(2).unwrap();
    /// assert_eq!(arr.capacity(), 2);
    /// assert!(arr.iter().eq(&[1, 2]));
    /// ```
    pub fn add_to_back(&mut self, data: impl Into<Option<T>>) -> Result<(), InvalidArgument> {
        let value = data.into().ok_or(InvalidArgument)?;
        self.push_back(value);
        Ok(())
    }

    /// Removes and returns the first element, shifting every remaining element one slot toward
    /// the front.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the DynamicArray has no elements.
    ///
    /// # Examples
    /// ```
    /// # use classroom_collections::collections::contiguous::DynamicArray;
    /// # use classroom_collections::collections::error::EmptyContainer;
    /// let mut arr: DynamicArray<_> = (1..=3).collect();
    /// assert_eq!(arr.remove_from_front(), Ok(1));
    /// assert!(arr.iter().eq(&[2, 3]));
    /// arr.remove_from_front().unwrap();
    /// arr.remove_from_front().unwrap();
    /// assert_eq!(arr.remove_from_front(), Err(EmptyContainer));
    /// ```
    pub fn remove_from_front(&mut self) -> Result<T, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }

        let value = self.slots[0].take();
        // The emptied front slot rotates round to become the vacated last slot.
        self.slots[..self.size].rotate_left(1);
        self.size -= 1;

        value.ok_or(EmptyContainer)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the DynamicArray has no elements.
    pub fn remove_from_back(&mut self) -> Result<T, EmptyContainer> {
        if self.is_empty() {
            return Err(EmptyContainer);
        }

        self.size -= 1;
        self.slots[self.size].take().ok_or(EmptyContainer)
    }

    /// Returns an iterator over the live elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots[..self.size].iter(),
        }
    }

    pub(crate) fn push_front(&mut self, value: T) {
        if self.size == self.capacity() {
            self.grow();
        }

        let mut prev = Some(value);
        for slot in &mut self.slots[..=self.size] {
            prev = mem::replace(slot, prev);
        }

        self.size += 1;
    }

    pub(crate) fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.grow();
        }

        self.slots[self.size] = Some(value);
        self.size += 1;
    }

    /// Replaces the backing store with one of double the capacity, moving every element into the
    /// same slot of the new store.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow.
    pub(crate) fn grow(&mut self) {
        let old_cap = self.capacity();
        let new_cap = slots::grown_cap(old_cap);

        self.slots = slots::regrow(self.slots[..self.size].iter_mut(), new_cap);
        log::trace!("DynamicArray grew from {old_cap} to {new_cap} slots");
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = DynamicArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &DebugEntries(self.iter()))
            .field("size", &self.size)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {
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
