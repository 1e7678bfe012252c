//! Circular collection types. Currently just [`CircularQueue`], a first-in first-out queue that
//! addresses its backing store with a wrapping front offset.

pub mod queue;

#[doc(inline)]
pub use queue::CircularQueue;
