//! Reference-semantics wrappers. Every implementation here allocates a new
//! wrapper around a deep copy of the inner value, so the copy never aliases
//! the original.
//!
//! Shared sub-objects are not de-duplicated: two `Rc`s pointing at the same
//! allocation become two independent allocations in the copy.

use std::{
    cell::{Cell, OnceCell, RefCell},
    rc::Rc,
    sync::{Arc, Mutex, OnceLock, PoisonError, RwLock},
};

use crate::DeepCopy;

impl<T: DeepCopy> DeepCopy for Box<T> {
    fn deep_copy(&self) -> Self {
        Box::new((**self).deep_copy())
    }
}

impl<T: DeepCopy> DeepCopy for Rc<T> {
    fn deep_copy(&self) -> Self {
        Rc::new((**self).deep_copy())
    }
}

impl<T: DeepCopy> DeepCopy for Arc<T> {
    fn deep_copy(&self) -> Self {
        Arc::new((**self).deep_copy())
    }
}

macro_rules! impl_unsized {
    ($($ptr:ident),*) => {
        $(
            impl DeepCopy for $ptr<str> {
                fn deep_copy(&self) -> Self {
                    $ptr::from(&**self)
                }
            }

            impl<T: DeepCopy> DeepCopy for $ptr<[T]> {
                fn deep_copy(&self) -> Self {
                    self.iter().map(DeepCopy::deep_copy).collect()
                }
            }
        )*
    };
}

impl_unsized!(Box, Rc, Arc);

impl<T: Copy> DeepCopy for Cell<T> {
    fn deep_copy(&self) -> Self {
        Cell::new(self.get())
    }
}

/// # Panics
///
/// Panics if the value is currently mutably borrowed, like `RefCell::clone`.
impl<T: DeepCopy> DeepCopy for RefCell<T> {
    fn deep_copy(&self) -> Self {
        RefCell::new(self.borrow().deep_copy())
    }
}

impl<T: DeepCopy> DeepCopy for OnceCell<T> {
    fn deep_copy(&self) -> Self {
        match self.get() {
            Some(value) => OnceCell::from(value.deep_copy()),
            None => OnceCell::new(),
        }
    }
}

/// A poisoned lock still holds consistent-enough data to copy; the copy is
/// returned unpoisoned.
impl<T: DeepCopy> DeepCopy for Mutex<T> {
    fn deep_copy(&self) -> Self {
        let guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        Mutex::new(guard.deep_copy())
    }
}

impl<T: DeepCopy> DeepCopy for RwLock<T> {
    fn deep_copy(&self) -> Self {
        let guard = self.read().unwrap_or_else(PoisonError::into_inner);
        RwLock::new(guard.deep_copy())
    }
}

impl<T: DeepCopy> DeepCopy for OnceLock<T> {
    fn deep_copy(&self) -> Self {
        match self.get() {
            Some(value) => OnceLock::from(value.deep_copy()),
            None => OnceLock::new(),
        }
    }
}
