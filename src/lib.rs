//! Three hand-built generic containers, written directly over their own backing storage rather
//! than on top of [`Vec`] or [`VecDeque`](std::collections::VecDeque).
//!
//! # Purpose
//! Each container reimplements a standard collection primitive so that the storage management is
//! visible: [`DynamicArray`](collections::contiguous::DynamicArray) grows a contiguous store,
//! [`LinkedChain`](collections::linked::LinkedChain) manages a chain of singly linked nodes and
//! [`CircularQueue`](collections::circular::CircularQueue) addresses a contiguous store with a
//! wrapping front offset.
//!
//! # Shared Contract
//! The containers don't depend on each other, but they all behave the same way at the edges:
//! - Insertions take an optional value and reject `None` with
//!   [`InvalidArgument`](collections::error::InvalidArgument), leaving the container untouched.
//! - Removals from an empty container return
//!   [`EmptyContainer`](collections::error::EmptyContainer), again without any change.
//! - Iteration is always front to back, in insertion order.
//! - The array-backed containers double their capacity when full and never shrink.
//!
//! # Error Handling
//! Recoverable failures are returned as strongly typed [`Result`]s, using zero-sized error structs
//! that implement [`Error`](std::error::Error). Running out of addressable capacity is treated as
//! fatal and panics, in the same way that [`Vec`] does.
//!
//! # Features
//! Every container sits behind its own Cargo feature (`dynamic-array`, `linked-chain` and
//! `circular-queue`), all of which are enabled by the default `collections-all` feature.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "collections")]
pub(crate) mod util;
