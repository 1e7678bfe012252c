use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// Nodes are allocated through Box so that taking a node back off the heap moves its value out
// without any manual deallocation.

/// A handle to a heap allocated [`Node`]. Handles are freely copied; the chain is responsible for
/// making sure that every node is taken back exactly once and never accessed afterwards.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims ownership of the node, consuming the allocation.
    ///
    /// # Safety
    /// The node must still be allocated, and no other handle to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created from a leaked Box in from_node and, per the caller, hasn't
        // been taken yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: Handles held by a chain always point to live nodes, and the returned lifetime is
        // bounded by a borrow of that chain at every public call site.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: As for value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: As for value, with the chain holding a unique borrow while this is used.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
