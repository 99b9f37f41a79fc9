//! Derive macros for the `deepcopy-rs` crate.
//! Re-exported automatically when enabling the `derive` feature on `deepcopy-rs`.
//!
//! Both macros run the same transformation: check that the declaration is a
//! struct, collect its stored properties, pick the initializer the copy is
//! built with, then emit a private copy helper, a public `copy()` method and
//! the `DeepCopy` conformance. Any failure aborts the expansion as a whole.

extern crate proc_macro;

mod attrs;
mod class;
mod emit;
mod error;
mod init;
mod scan;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::{class::ClassDecl, error::ExpandError, init::Initializer};

// Entry points ----------------------------------------------------------------------------------

/// Derives `DeepCopy` for a struct, building the copy with the struct literal.
///
/// Generates an inherent `pub fn copy(&self) -> Self` and an
/// `impl deepcopy_rs::DeepCopy` that forwards to it. Every field is deep-copied
/// through its own `DeepCopy` implementation unless configured otherwise:
///
/// - `#[deep_copy(clone)]` copies the field with `Clone`
/// - `#[deep_copy(with = path)]` copies the field with `path(&field)`
/// - `#[deep_copy(skip)]` fills the field with `Default::default()`
///
/// Container attributes: `#[deep_copy(crate = path)]`,
/// `#[deep_copy(method = name)]`, `#[deep_copy(bound = "T: Trait")]`.
#[proc_macro_derive(DeepCopy, attributes(deep_copy))]
pub fn derive_deep_copy(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    match impl_derive(&ast) {
        Ok(ts) => ts.into(),
        Err(e) => syn::Error::from(e).to_compile_error().into(),
    }
}

/// Wraps a struct and its impl blocks, and builds the copy with one of the
/// struct's own constructors.
///
/// ```rust,ignore
/// deep_copy_class! {
///     pub struct Document {
///         title: String,
///         body: Rc<RefCell<Vec<String>>>,
///     }
///
///     impl Document {
///         pub fn new(title: String, body: Rc<RefCell<Vec<String>>>) -> Self {
///             Self { title, body }
///         }
///     }
/// }
/// ```
///
/// The constructor is the first associated function, in declaration order,
/// that returns `Self`, takes no receiver, is neither `async` nor `unsafe`,
/// does not just delegate to another `Self::` function, and has a parameter
/// named after every field. Extra parameters receive `Default::default()`.
/// Constructors can be excluded with `#[deep_copy(skip)]` or
/// `#[deep_copy(convenience)]`.
#[proc_macro]
pub fn deep_copy_class(input: TokenStream) -> TokenStream {
    let class = parse_macro_input!(input as ClassDecl);
    let items = class.user_items();
    let generated = match class.transform() {
        Ok(ts) => ts,
        Err(e) => syn::Error::from(e).to_compile_error(),
    };
    quote! {
        #items
        #generated
    }
    .into()
}

fn impl_derive(ast: &DeriveInput) -> Result<proc_macro2::TokenStream, ExpandError> {
    let class = scan::scan(ast)?;
    Ok(emit::emit(&class, &Initializer::Memberwise))
}
