//! A module containing [`CircularQueue`] and associated types.
//!
//! Currently, the only other included type is [`Iter`] for borrowed iteration over a queue, from
//! the front (next to be dequeued) to the back.
//!
//! [`CircularQueue`] is also re-exported under the parent module.

mod circular_queue;
mod iter;
mod tests;

pub use circular_queue::*;
pub use iter::*;
