use std::iter::FusedIterator;

/// A borrowed iterator over the elements of a [`CircularQueue`](super::CircularQueue), from front
/// to back.
pub struct Iter<'a, T> {
    pub(crate) slots: &'a [Option<T>],
    pub(crate) front: usize,
    // Logical positions still to be yielded, as a half-open range.
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<'a, T> Iter<'a, T> {
    fn slot(&self, logical: usize) -> Option<&'a T> {
        let slots = self.slots;
        slots[(self.front + logical) % slots.len()].as_ref()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let value = self.slot(self.start);
        self.start += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        self.slot(self.end)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots,
            front: self.front,
            start: self.start,
            end: self.end,
        }
    }
}
