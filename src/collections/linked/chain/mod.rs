mod iter;
mod linked_chain;
mod node;
mod tests;

pub use iter::*;
pub use linked_chain::*;
pub(crate) use node::*;
