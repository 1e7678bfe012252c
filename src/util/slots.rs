use std::alloc::Layout;
use std::iter;

use crate::collections::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The factor by which array-backed containers grow once they run out of slots.
pub const GROWTH_FACTOR: usize = 2;

/// Allocates a backing store of `cap` empty slots.
///
/// # Panics
/// Panics if the memory layout of the store would have a size that exceeds [`isize::MAX`].
pub fn empty_slots<T>(cap: usize) -> Box<[Option<T>]> {
    Layout::array::<Option<T>>(cap).map_err(|_| CapacityOverflow).throw();
    iter::repeat_with(|| None).take(cap).collect()
}

/// Returns the capacity that a full store of `cap` slots grows to. An unallocated store grows to a
/// single slot so that doubling can make progress.
///
/// # Panics
/// Panics if the new capacity overflows [`usize`].
pub fn grown_cap(cap: usize) -> usize {
    cap.checked_mul(GROWTH_FACTOR)
        .ok_or(CapacityOverflow)
        .throw()
        .max(1)
}

/// Moves the first `count` values yielded by `values` into the front of a new store with
/// `new_cap` slots, leaving the remaining slots empty.
pub fn regrow<'a, T: 'a>(
    values: impl Iterator<Item = &'a mut Option<T>>,
    new_cap: usize,
) -> Box<[Option<T>]> {
    let mut slots = empty_slots(new_cap);
    for (new, old) in slots.iter_mut().zip(values) {
        *new = old.take();
    }
    slots
}
