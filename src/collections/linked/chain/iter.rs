use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{LinkedChain, Link};

/// A borrowed iterator over the elements of a [`LinkedChain`], from front to back.
pub struct Iter<'a, T> {
    pub(crate) next: Link<T>,
    pub(crate) remaining: usize,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // Never actually modify the node itself.
        self.next = *node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
            _phantom: PhantomData,
        }
    }
}

impl<T> IntoIterator for LinkedChain<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            chain: self,
        }
    }
}

/// An owned iterator over the elements of a [`LinkedChain`], from front to back.
pub struct IntoIter<T> {
    // The iterator just holds the chain and removes from the front.
    pub(crate) chain: LinkedChain<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.chain.remove_from_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.chain.size()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
