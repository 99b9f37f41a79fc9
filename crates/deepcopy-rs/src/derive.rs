//! Derive macro user-facing documentation (implementation in `deepcopy-rs-derive`).
//!
//! The `derive` feature is enabled by default:
//! ```toml
//! deepcopy-rs = { version = "<latest>" }
//! ```
//!
//! Then import the macros next to the trait:
//! ```rust
//! # #[cfg(feature = "derive")]
//! use deepcopy_rs::{DeepCopy, deep_copy_class};
//! ```
//!
//! Basic example:
//! ```rust
//! # #[cfg(feature = "derive")]
//! # fn demo() {
//! use std::{cell::RefCell, rc::Rc};
//! use deepcopy_rs::DeepCopy;
//!
//! #[derive(DeepCopy)]
//! struct Playlist {
//!     name: String,
//!     tracks: Rc<RefCell<Vec<String>>>,
//! }
//!
//! let original = Playlist {
//!     name: "road trip".into(),
//!     tracks: Rc::new(RefCell::new(vec!["intro".into()])),
//! };
//! let copy = original.copy();
//! copy.tracks.borrow_mut().push("outro".into());
//! assert_eq!(original.tracks.borrow().len(), 1);
//! assert!(!Rc::ptr_eq(&original.tracks, &copy.tracks));
//! # }
//! # #[cfg(not(feature = "derive"))]
//! # fn demo() {}
//! # demo();
//! ```
//!
//! Types with their own constructors go through `deep_copy_class!`, which
//! calls the first constructor whose parameters name every field:
//! ```rust
//! # #[cfg(feature = "derive")]
//! # mod demo {
//! use deepcopy_rs::deep_copy_class;
//!
//! deep_copy_class! {
//!     pub struct Counter {
//!         label: String,
//!         count: u64,
//!     }
//!
//!     impl Counter {
//!         pub fn new(label: String, count: u64) -> Self {
//!             Self { label, count }
//!         }
//!     }
//! }
//! # }
//! ```
//!
//! Supported attributes:
//! - `#[deep_copy(clone)]` on a field: copy it with `Clone` (the copy shares
//!   whatever the field points to)
//! - `#[deep_copy(with = path)]` on a field: copy it with `path(&field)`
//! - `#[deep_copy(skip)]` on a field: not a property; the derive fills it with
//!   `Default::default()`
//! - `#[deep_copy(crate = path)]`, `#[deep_copy(method = name)]`,
//!   `#[deep_copy(bound = "T: Trait")]` on the struct
//! - `#[deep_copy(skip)]`, `#[deep_copy(convenience)]` on a constructor inside
//!   `deep_copy_class!`
//!
//! Errors, all reported at compile time on the declaration:
//! - the declaration is not a struct with named fields (enums, unions, tuple
//!   structs, traits, ...)
//! - no constructor covers every field (`deep_copy_class!` only)
//! - a field type can never be deep-copied: `&mut T`, non-`'static`
//!   references, raw pointers, trait objects
//!
//! Field types that merely lack a `DeepCopy` implementation fail type checking
//! with a note pointing at `#[deep_copy(clone)]`.
//!
//! Notes / Limitations:
//! - Generic structs get `T: DeepCopy` for every type parameter; use `bound`
//!   when that is too strict.
//! - Shared sub-objects are copied once per reference; sharing inside the
//!   original is not reproduced in the copy.

#[allow(dead_code)]
pub struct _DeriveDocs;
