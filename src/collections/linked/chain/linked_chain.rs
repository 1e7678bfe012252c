use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::NonZero;

use derive_more::IsVariant;

use super::{Iter, Link, Node, NodeRef};
#[doc(inline)]
pub use crate::collections::error::{CapacityOverflow, EmptyContainer, InvalidArgument};
use crate::util::fmt::DebugEntries;
use crate::util::result::ResultExtension;

/// A list with links in a single direction, from front to back.
///
/// Every node owns its successor. The chain holds a handle to the first node and a cached handle
/// to the last node, which is always the node reached by following `size - 1` links from the
/// first. Both handles are absent exactly when the chain is empty.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedChain.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `head/tail` | `O(1)` |
/// | `add_to_front/back` | `O(1)` |
/// | `remove_from_front` | `O(1)` |
/// | `remove_from_back` | `O(n)` |
///
/// Removing from the back has to walk the whole chain, because nodes have no link back to their
/// predecessor.
pub struct LinkedChain<T> {
    pub(crate) state: ChainState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ChainState<T> {
    Empty,
    Full(ChainContents<T>),
}

use ChainState::*;

pub(crate) struct ChainContents<T> {
    pub len: NonZero<usize>,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> LinkedChain<T> {
    /// Creates a new LinkedChain with no elements.
    pub const fn new() -> LinkedChain<T> {
        LinkedChain {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the LinkedChain.
    pub const fn size(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ChainContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the LinkedChain contains no elements.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the element held by the first node, if it exists.
    pub fn head(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ChainContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a reference to the element held by the last node, if it exists.
    pub fn tail(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ChainContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Adds the provided element to the front of the LinkedChain.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] without modifying the LinkedChain if `data` is `None`.
    ///
    /// # Examples
    /// ```
    /// # use classroom_collections::collections::linked::LinkedChain;
    /// let mut chain = LinkedChain::new();
    /// chain.add_to_front("back").unwrap();
    /// chain.add_to_front("front").unwrap();
    /// assert_eq!(chain.head(), Some(&"front"));
    /// assert_eq!(chain.tail(), Some(&"back"));
    /// ```
    pub fn add_to_front(&mut self, data: impl Into<Option<T>>) -> Result<(), InvalidArgument> {
        let value = data.into().ok_or(InvalidArgument)?;
        self.push_front(value);
        Ok(())
    }

    /// Adds the provided element to the back of the LinkedChain.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] without modifying the LinkedChain if `data` is `None`.
    pub fn add_to_back(&mut self, data: impl Into<Option<T>>) -> Result<(), InvalidArgument> {
        let value = data.into().ok_or(InvalidArgument)?;
        self.push_back(value);
        Ok(())
    }

    /// Removes the first node from the chain and returns its element.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the LinkedChain has no elements.
    pub fn remove_from_front(&mut self) -> Result<T, EmptyContainer> {
        match &mut self.state {
            Empty => Err(EmptyContainer),
            Full(ChainContents { len, head, .. }) => {
                // SAFETY: head is a live node owned by this chain, and the handle is replaced or
                // discarded below.
                let Node { value, next } = unsafe { head.take_node() };

                match (NonZero::new(len.get() - 1), next) {
                    (Some(new_len), Some(new_head)) => {
                        *head = new_head;
                        *len = new_len;
                    },
                    _ => self.state = Empty,
                }

                Ok(value)
            },
        }
    }

    /// Removes the last node from the chain and returns its element. The node before it is found
    /// by walking from the front and becomes the new tail.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the LinkedChain has no elements.
    ///
    /// # Examples
    /// ```
    /// # use classroom_collections::collections::linked::LinkedChain;
    /// let mut chain: LinkedChain<_> = (1..=3).collect();
    /// assert_eq!(chain.remove_from_back(), Ok(3));
    /// assert_eq!(chain.tail(), Some(&2));
    /// assert_eq!(chain.size(), 2);
    /// ```
    pub fn remove_from_back(&mut self) -> Result<T, EmptyContainer> {
        match &mut self.state {
            Empty => Err(EmptyContainer),
            Full(contents) => {
                let old_tail = contents.tail;

                match NonZero::new(contents.len.get() - 1) {
                    Some(new_len) => {
                        let new_tail = contents.seek(new_len.get() - 1);
                        *new_tail.next_mut() = None;
                        contents.tail = new_tail;
                        contents.len = new_len;
                    },
                    None => self.state = Empty,
                }

                // SAFETY: old_tail was a live node owned by this chain and is no longer reachable
                // from it.
                Ok(unsafe { old_tail.take_node() }.value)
            },
        }
    }

    /// Returns an iterator over the elements of the chain, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub(crate) fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ChainState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    pub(crate) fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ChainState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Checks that the cached tail is the node reached by following `size - 1` links from the head
    /// and that it ends the chain.
    ///
    /// # Panics
    /// Panics if any link disagrees with the cached state.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(contents) => {
                let mut curr = contents.head;
                for _ in 1..contents.len.get() {
                    match curr.next() {
                        Some(next) => curr = *next,
                        None => panic!("chain ended before reaching its length"),
                    }
                }
                assert!(curr == contents.tail, "cached tail isn't the last node");
                assert!(curr.next().is_none(), "tail has a successor");
            },
        }
    }

    /// Returns true if the head and tail handles refer to the same node.
    #[cfg(test)]
    pub(crate) fn head_is_tail(&self) -> bool {
        match &self.state {
            Empty => false,
            Full(contents) => contents.head == contents.tail,
        }
    }
}

impl<T> ChainContents<T> {
    pub fn wrap_one(value: T) -> ChainContents<T> {
        let node = NodeRef::from_node(Node {
            value,
            next: None,
        });

        ChainContents {
            len: NonZero::<usize>::MIN,
            head: node,
            tail: node,
        }
    }

    /// Follows `index` links from the head. Stops early at the tail, which can only happen if
    /// `index` is out of bounds.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        let mut node = self.head;
        for _ in 0..index {
            match node.next() {
                Some(next) => node = *next,
                None => break,
            }
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        self.head = NodeRef::from_node(Node {
            value,
            next: Some(self.head),
        });
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }
}

impl<T> ChainState<T> {
    pub fn single(value: T) -> ChainState<T> {
        Full(ChainContents::wrap_one(value))
    }
}

impl<'a, T> IntoIterator for &'a LinkedChain<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (next, remaining): (Link<T>, usize) = match &self.state {
            Empty => (None, 0),
            Full(ChainContents { len, head, .. }) => (Some(*head), len.get()),
        };

        Iter {
            next,
            remaining,
            _phantom: PhantomData,
        }
    }
}

impl<T> Extend<T> for LinkedChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = LinkedChain::new();
        chain.extend(iter);
        chain
    }
}

impl<T> Default for LinkedChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedChain<T> {
    fn drop(&mut self) {
        if let Full(ChainContents { head, .. }) = self.state {
            let mut curr: Link<T> = Some(head);
            while let Some(ptr) = curr {
                // SAFETY: Each node is reachable exactly once from the head and is taken here
                // before moving on to its successor.
                curr = unsafe { ptr.take_node() }.next;
            }
        }
        self.state = Empty;
    }
}

impl<T: Clone> Clone for LinkedChain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedChain<T> {}

impl<T: Hash> Hash for LinkedChain<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// SAFETY: A LinkedChain uniquely owns all of its nodes, so it can be sent whenever T can.
unsafe impl<T: Send> Send for LinkedChain<T> {}
// SAFETY: LinkedChain only hands out shared references through &self, with no interior mutability.
unsafe impl<T: Sync> Sync for LinkedChain<T> {}

impl<T: Debug> Debug for LinkedChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedChain")
            .field("contents", &DebugEntries(self.iter()))
            .field("size", &self.size())
            .finish()
    }
}

impl<T: Display> Display for LinkedChain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value})")?;
        }
        Ok(())
    }
}
