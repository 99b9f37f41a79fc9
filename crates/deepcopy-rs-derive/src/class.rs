//! Input of `deep_copy_class!`: one type declaration followed by its impl blocks.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{
    DeriveInput, ImplItem, Item, ItemImpl,
    parse::{Parse, ParseStream},
};

use crate::{attrs::strip, error::ExpandError, init, scan};

pub(crate) struct ClassDecl {
    pub decl: Item,
    pub impls: Vec<ItemImpl>,
}

impl Parse for ClassDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a struct declaration"));
        }
        let decl: Item = input.parse()?;
        let mut impls = Vec::new();
        while !input.is_empty() {
            match input.parse::<Item>()? {
                Item::Impl(item_impl) => impls.push(item_impl),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "only impl blocks may follow the declaration",
                    ));
                }
            }
        }
        Ok(ClassDecl { decl, impls })
    }
}

impl ClassDecl {
    /// The declaration as a derive input, or `NotAClass` for items a derive
    /// could never be attached to.
    fn derive_input(&self) -> Result<DeriveInput, ExpandError> {
        let kind = match &self.decl {
            Item::Struct(s) => return Ok(DeriveInput::from(s.clone())),
            Item::Enum(e) => return Ok(DeriveInput::from(e.clone())),
            Item::Union(u) => return Ok(DeriveInput::from(u.clone())),
            Item::Trait(t) => return Err(scan::not_a_class("a trait", &t.ident)),
            Item::Type(t) => return Err(scan::not_a_class("a type alias", &t.ident)),
            Item::Fn(f) => return Err(scan::not_a_class("a function", &f.sig.ident)),
            Item::Mod(m) => return Err(scan::not_a_class("a module", &m.ident)),
            Item::Const(c) => return Err(scan::not_a_class("a constant", &c.ident)),
            Item::Static(s) => return Err(scan::not_a_class("a static", &s.ident)),
            Item::Impl(_) => "an impl block",
            Item::Use(_) => "a use declaration",
            Item::Macro(_) => "a macro",
            Item::ExternCrate(_) => "an extern crate declaration",
            Item::ForeignMod(_) => "an extern block",
            Item::TraitAlias(_) => "a trait alias",
            _ => "an item that declares no type",
        };
        Err(scan::not_a_class(kind, &self.decl))
    }

    /// Runs the transformer over the declaration and its constructors.
    pub(crate) fn transform(&self) -> Result<TokenStream, ExpandError> {
        let input = self.derive_input()?;
        let class = scan::scan(&input)?;
        let initializer = init::select(&class, &self.impls)?;
        Ok(crate::emit::emit(&class, &initializer))
    }

    /// The user's items without `deep_copy` helper attributes.
    pub(crate) fn user_items(&self) -> TokenStream {
        let mut decl = self.decl.clone();
        match &mut decl {
            Item::Struct(s) => {
                strip(&mut s.attrs);
                for field in s.fields.iter_mut() {
                    strip(&mut field.attrs);
                }
            }
            Item::Enum(e) => strip(&mut e.attrs),
            Item::Union(u) => strip(&mut u.attrs),
            _ => {}
        }
        let impls = self.impls.iter().cloned().map(|mut item_impl| {
            for item in item_impl.items.iter_mut() {
                if let ImplItem::Fn(func) = item {
                    strip(&mut func.attrs);
                }
            }
            item_impl
        });
        let decl = decl.into_token_stream();
        quote! {
            #decl
            #(#impls)*
        }
    }
}
