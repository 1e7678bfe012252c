#![cfg(test)]

use std::iter;
use std::ptr;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_front_and_back_insertion() {
    let mut chain = LinkedChain::new();
    chain.add_to_front("back").unwrap();
    chain.add_to_front("front").unwrap();
    chain.add_to_back("further-back").unwrap();
    chain.verify_links();

    assert!(chain.iter().eq(&["front", "back", "further-back"]));
    assert_eq!(chain.size(), 3);

    assert_eq!(chain.remove_from_back(), Ok("further-back"));
    chain.verify_links();
    assert_eq!(chain.remove_from_back(), Ok("back"));
    chain.verify_links();

    assert_eq!(chain.size(), 1);
    assert!(chain.head_is_tail(), "A single node should be both head and tail.");
    assert!(ptr::eq(chain.head().unwrap(), chain.tail().unwrap()));
    assert_eq!(chain.head(), Some(&"front"));
}

#[test]
fn test_single_node() {
    let mut chain = LinkedChain::new();
    chain.add_to_back(7).unwrap();
    assert!(chain.head_is_tail(), "Adding to an empty chain should set both head and tail.");

    assert_eq!(chain.remove_from_front(), Ok(7));
    assert!(chain.is_empty());
    assert_eq!(chain.head(), None);
    assert_eq!(chain.tail(), None, "Emptying from the front should clear the tail too.");

    chain.add_to_front(8).unwrap();
    assert!(chain.head_is_tail());
    assert_eq!(chain.remove_from_back(), Ok(8));
    assert_eq!(chain.head(), None, "Emptying from the back should clear the head too.");
    assert_eq!(chain.tail(), None);
    assert_eq!(chain.size(), 0);
}

#[test]
fn test_remove_from_front() {
    let mut chain: LinkedChain<_> = (0..5).collect();
    for i in 0..5 {
        assert_eq!(chain.head(), Some(&i));
        assert_eq!(chain.tail(), Some(&4), "Removing from the front shouldn't move the tail.");
        assert_eq!(chain.remove_from_front(), Ok(i));
        chain.verify_links();
    }
    assert_eq!(chain.remove_from_front(), Err(EmptyContainer));
}

#[test]
fn test_remove_from_back() {
    let mut chain: LinkedChain<_> = (0..5).collect();
    for i in (0..5).rev() {
        assert_eq!(chain.tail(), Some(&i));
        assert_eq!(chain.remove_from_back(), Ok(i));
        assert_eq!(chain.size(), i);
        chain.verify_links();
    }
    assert_eq!(chain.remove_from_back(), Err(EmptyContainer));
}

#[test]
fn test_add_after_removal() {
    let mut chain: LinkedChain<_> = (0..3).collect();
    chain.remove_from_back().unwrap();
    chain.add_to_back(10).unwrap();
    chain.verify_links();
    assert!(
        chain.iter().eq(&[0, 1, 10]),
        "The new tail's successor should have been cleared before appending."
    );
}

#[test]
fn test_absent_data() {
    let mut chain: LinkedChain<String> = LinkedChain::new();
    assert_eq!(chain.add_to_front(None), Err(InvalidArgument));
    assert_eq!(chain.add_to_back(None), Err(InvalidArgument));
    assert!(chain.is_empty(), "Rejected insertions shouldn't add nodes.");

    chain.add_to_back("a".to_string()).unwrap();
    assert_eq!(chain.add_to_back(None), Err(InvalidArgument));
    assert_eq!(chain.size(), 1);
    assert!(chain.head_is_tail());
}

#[test]
fn test_remove_from_empty() {
    let mut chain: LinkedChain<u8> = LinkedChain::default();
    assert_eq!(chain.remove_from_front(), Err(EmptyContainer));
    assert_eq!(chain.remove_from_back(), Err(EmptyContainer));
    assert!(chain.is_empty());
    assert_eq!(chain.head(), None);
    assert_eq!(chain.tail(), None);
}

#[test]
fn test_iterators() {
    let chain: LinkedChain<_> = (1..=4).collect();
    let mut iter = chain.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.len(), 3);
    assert!(iter.eq(&[2, 3, 4]));

    assert!(
        chain.clone().into_iter().eq(1..=4),
        "Owned iteration should yield elements front to back."
    );
}

#[test]
fn test_equality_and_formatting() {
    let a: LinkedChain<_> = ["x", "y"].into_iter().collect();
    let mut b = LinkedChain::new();
    b.add_to_back("y").unwrap();
    b.add_to_front("x").unwrap();
    assert_eq!(a, b);

    assert_eq!(a.to_string(), "(x) -> (y)");
    assert_eq!(format!("{a:?}"), "LinkedChain { contents: [\"x\", \"y\"], size: 2 }");
    assert_eq!(LinkedChain::<u8>::new().to_string(), "");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut chain: LinkedChain<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(chain.remove_from_back());
    drop(chain.remove_from_front());
    assert_eq!(counter.drops(), 2);

    let mut iter = chain.into_iter();
    drop(iter.next());
    assert_eq!(counter.drops(), 3);

    drop(iter);
    assert_eq!(counter.drops(), 10, "Dropping should drop every remaining node once.");
}
