//! Contiguous collection types. Currently just [`DynamicArray`], a list over a single backing store
//! that doubles in size when it runs out of room.
#![warn(missing_docs)]

pub mod dynamic_array;

#[doc(inline)]
pub use dynamic_array::DynamicArray;
