use std::fmt::{self, Debug, Formatter};

/// Formats the items of a cloneable iterator as a list, so that container contents can be passed
/// to [`DebugStruct::field`](fmt::DebugStruct::field) without collecting them first.
pub struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
