//! The container types and the errors they share.
//!
//! # Purpose
//! These types reimplement a few standard collections over storage that they manage themselves:
//! capacity growth for the contiguous types, node ownership for the linked type and index
//! arithmetic for the circular type.
//!
//! # Method
//! Backing stores are boxed slices of [`Option<T>`], where `None` marks a slot that holds no live
//! element. This keeps the "no absent element is ever stored" rule visible in the types rather
//! than relying on uninitialized memory.

#[cfg(feature = "circular-queue")]
pub mod circular;
#[cfg(feature = "dynamic-array")]
pub mod contiguous;
pub mod error;
#[cfg(feature = "linked-chain")]
pub mod linked;
