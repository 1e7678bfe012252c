//! Linked collection types. Currently just [`LinkedChain`], a singly linked list that keeps a
//! cached reference to its last node.

pub mod chain;

#[doc(inline)]
pub use chain::LinkedChain;
