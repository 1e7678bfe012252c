#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::error::{EmptyContainer, InvalidArgument};
use crate::util::alloc::CountedDrop;

#[test]
fn test_wraparound_without_growth() {
    let mut queue = CircularQueue::new();
    queue.enqueue("a").unwrap();
    queue.enqueue("b").unwrap();
    queue.enqueue("c").unwrap();

    assert_eq!(queue.dequeue(), Ok("a"));
    assert_eq!(queue.front_index(), 1);

    queue.enqueue("d").unwrap();
    assert_eq!(queue.capacity(), 3, "A free slot should be reused rather than growing.");
    assert_eq!(queue.backing_store(), &[Some("d"), Some("b"), Some("c")]);

    assert_eq!(queue.dequeue(), Ok("b"));
    assert_eq!(queue.dequeue(), Ok("c"));
    assert_eq!(queue.front_index(), 0, "The front should wrap round to the first slot.");
    assert_eq!(queue.dequeue(), Ok("d"));
    assert_eq!(queue.dequeue(), Err(EmptyContainer));
}

#[test]
fn test_growth_preserves_order() {
    let mut queue = CircularQueue::new();
    for i in 0..=CircularQueue::<usize>::INITIAL_CAPACITY {
        queue.enqueue(i).unwrap();
    }
    assert_eq!(queue.capacity(), 6);
    assert!(queue.iter().copied().eq(0..=3));
    assert_eq!(queue.backing_store(), &[Some(0), Some(1), Some(2), Some(3), None, None]);
}

#[test]
fn test_growth_while_wrapped() {
    let mut queue = CircularQueue::new();
    queue.extend([1, 2, 3]);
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.enqueue(4).unwrap();
    queue.enqueue(5).unwrap();
    assert_eq!(queue.backing_store(), &[Some(4), Some(5), Some(3)]);

    queue.enqueue(6).unwrap();
    assert_eq!(queue.front_index(), 0, "Growing should reset the front to 0.");
    assert_eq!(
        queue.backing_store(),
        &[Some(3), Some(4), Some(5), Some(6), None, None],
        "Growing should unwrap the elements into logical order."
    );
}

#[test]
fn test_wraparound_sequence() {
    let cap = 5;
    let mut queue = CircularQueue::with_capacity(cap);
    for i in 0..cap {
        queue.enqueue(i).unwrap();
    }
    for i in 0..cap - 1 {
        assert_eq!(queue.dequeue(), Ok(i));
    }
    queue.enqueue(cap).unwrap();
    queue.enqueue(cap + 1).unwrap();
    assert_eq!(queue.capacity(), cap);

    for i in cap - 1..=cap + 1 {
        assert_eq!(queue.dequeue(), Ok(i));
    }
    assert!(queue.is_empty());
}

#[test]
fn test_dequeue_clears_slot() {
    let mut queue: CircularQueue<_> = ["x", "y"].into_iter().collect();
    queue.dequeue().unwrap();
    assert_eq!(queue.backing_store(), &[None, Some("y"), None]);

    queue.dequeue().unwrap();
    assert!(queue.backing_store().iter().all(Option::is_none));
    assert_eq!(queue.front_index(), 2, "The front shouldn't reset when the queue empties.");

    queue.enqueue("z").unwrap();
    assert_eq!(queue.backing_store(), &[None, None, Some("z")]);
    assert_eq!(queue.peek(), Some(&"z"));
}

#[test]
fn test_absent_data() {
    let mut queue: CircularQueue<_> = (1..=3).collect();
    let before = queue.clone();

    assert_eq!(queue.enqueue(None), Err(InvalidArgument));
    assert_eq!(queue, before);
    assert_eq!(queue.capacity(), 3, "A rejected enqueue shouldn't grow a full queue.");
}

#[test]
fn test_remove_from_empty() {
    let mut queue: CircularQueue<u8> = CircularQueue::default();
    assert_eq!(queue.dequeue(), Err(EmptyContainer));
    assert_eq!(queue.front_index(), 0);
    assert_eq!(queue.size(), 0);
    assert_eq!(queue.peek(), None);
}

#[test]
fn test_zero_capacity() {
    let mut queue = CircularQueue::with_capacity(0);
    assert_eq!(queue.dequeue(), Err(EmptyContainer));
    queue.enqueue(1).unwrap();
    assert_eq!(queue.capacity(), 1);
    queue.enqueue(2).unwrap();
    assert_eq!(queue.capacity(), 2);
    assert!(queue.iter().eq(&[1, 2]));
}

#[test]
fn test_iterators() {
    let mut queue = CircularQueue::with_capacity(4);
    queue.extend([0, 1, 2, 3]);
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.extend([4, 5]);

    let mut iter = queue.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next_back(), Some(&5));
    assert_eq!(iter.next(), Some(&2));
    assert!(iter.eq(&[3, 4]));
    assert!((&queue).into_iter().rev().eq(&[5, 4, 3, 2]));
}

#[test]
fn test_formatting() {
    let mut queue: CircularQueue<_> = (1..=3).collect();
    queue.dequeue().unwrap();
    queue.enqueue(4).unwrap();
    assert_eq!(queue.to_string(), "[2, 3, 4]");
    assert_eq!(
        format!("{queue:?}"),
        "CircularQueue { contents: [2, 3, 4], size: 3, front: 1, cap: 3 }"
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut queue: CircularQueue<_> = iter::repeat_with(|| counter.clone()).take(7).collect();

    drop(queue.dequeue());
    assert_eq!(counter.drops(), 1);

    drop(queue);
    assert_eq!(counter.drops(), 7, "Dropping should drop every remaining element once.");
}
