use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A value that counts how many times it (or any of its clones) has been dropped. Used by tests to
/// check that containers drop every live element exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }

    pub fn drops(&self) -> usize {
        *self.0.borrow()
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
