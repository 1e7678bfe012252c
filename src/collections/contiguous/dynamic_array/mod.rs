//! A module containing [`DynamicArray`] and associated types.
//!
//! Currently, the only other included type is [`Iter`] for borrowed iteration over the live
//! elements of a DynamicArray, from front to back.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod dynamic_array;
mod iter;

pub use dynamic_array::*;
pub use iter::*;
