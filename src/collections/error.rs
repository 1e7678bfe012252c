//! Errors shared by every container in [`collections`](super).
//!
//! Each failure is its own zero-sized type, so an operation's signature states exactly which
//! failure it can produce. [`ContainerError`] joins the recoverable kinds together for callers
//! that mix insertions and removals behind a single `?`.

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned by an insertion that was given an absent (`None`) element. The container is left
/// unmodified.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("data cannot be absent")]
pub struct InvalidArgument;

/// Returned by a removal from a container with no elements. The container is left unmodified.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("no such element: container is empty")]
pub struct EmptyContainer;

/// The capacity of a backing store would exceed what can be addressed. Never returned, only
/// raised as a panic.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("capacity overflow")]
pub struct CapacityOverflow;

/// Either of the recoverable container errors.
///
/// # Examples
/// ```
/// # use classroom_collections::collections::error::{ContainerError, EmptyContainer};
/// # use classroom_collections::collections::linked::LinkedChain;
/// fn rotate(chain: &mut LinkedChain<u8>) -> Result<(), ContainerError> {
///     let front = chain.remove_from_front()?;
///     chain.add_to_back(front)?;
///     Ok(())
/// }
///
/// let mut chain: LinkedChain<u8> = LinkedChain::new();
/// assert_eq!(rotate(&mut chain), Err(ContainerError::EmptyContainer(EmptyContainer)));
///
/// chain.extend([1, 2, 3]);
/// rotate(&mut chain).unwrap();
/// assert!(chain.iter().eq(&[2, 3, 1]));
/// ```
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerError {
    InvalidArgument(InvalidArgument),
    EmptyContainer(EmptyContainer),
}
