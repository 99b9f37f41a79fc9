//! Deep copies for Rust values.
//!
//! [`DeepCopy`] is the capability a type exposes when it can produce a copy of
//! itself that shares no mutable state with the original. Value types copy
//! their value; reference-semantics types (`Rc`, `Arc`, `Box`, cells and
//! locks) allocate a fresh instance around a deep copy of what they hold.
//!
//! With the `derive` feature (on by default) the capability can be generated
//! for your own structs; the `derive` module documents the attributes.

mod collections;
pub mod derive;
#[cfg(any(feature = "chrono", feature = "uuid", feature = "url"))]
mod external;
mod pointer;
mod value;

#[cfg(feature = "derive")]
pub use deepcopy_rs_derive::{DeepCopy, deep_copy_class};

/// A type that can produce a deep copy of itself.
///
/// The copy must be observably independent of `self`: mutating anything
/// reachable from the copy never changes the original. Types without interior
/// references implement this by copying their value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be deep-copied",
    label = "`{Self}` does not implement `DeepCopy`",
    note = "implement or derive `DeepCopy` for `{Self}`, or mark the field `#[deep_copy(clone)]` to copy it with `Clone`"
)]
pub trait DeepCopy: Sized {
    fn deep_copy(&self) -> Self;
}

/// Deep-copies any [`DeepCopy`] value.
///
/// ```rust
/// use std::rc::Rc;
///
/// let original = Rc::new(vec![1, 2, 3]);
/// let copy = deepcopy_rs::deep_copy(&original);
/// assert_eq!(original, copy);
/// assert!(!Rc::ptr_eq(&original, &copy));
/// ```
#[inline]
pub fn deep_copy<T: DeepCopy>(value: &T) -> T {
    value.deep_copy()
}
