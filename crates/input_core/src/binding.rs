//! Getter/setter access to a number owned by the host application.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A two-way reference to a value the field does not own.
///
/// The host decides where the value lives; the field only reads it through
/// `get` and writes it through `set`. Cloning a binding clones the handle,
/// not the value.
pub struct Binding<T> {
    get: Rc<dyn Fn() -> T>,
    set: Rc<dyn Fn(T)>,
}

impl<T: Copy + 'static> Binding<T> {
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Bind to a shared cell.
    pub fn from_cell(cell: Rc<Cell<T>>) -> Self {
        let reader = Rc::clone(&cell);
        Self::new(move || reader.get(), move |value| cell.set(value))
    }

    #[inline]
    pub fn get(&self) -> T {
        (self.get)()
    }

    #[inline]
    pub fn set(&self, value: T) {
        (self.set)(value)
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

impl<T: Copy + fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.get()).finish()
    }
}

impl<T: Copy + 'static> From<Rc<Cell<T>>> for Binding<T> {
    fn from(cell: Rc<Cell<T>>) -> Self {
        Self::from_cell(cell)
    }
}
