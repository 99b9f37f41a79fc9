//! Code emitter: the copy helper, the inherent copy method and the
//! `DeepCopy` conformance.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Generics, Ident, Path, parse_quote};

use crate::{
    attrs::CopyStrategy,
    init::Initializer,
    scan::{ClassShape, Property, Shape},
};

const HELPER: &str = "__deep_copy_value";

pub(crate) fn emit(class: &ClassShape, init: &Initializer) -> TokenStream {
    let name = &class.ident;
    let krate = class.container.krate();
    let method = class.container.method();
    let helper = format_ident!("{}", HELPER);

    let (generics, self_ty, body) = match init {
        Initializer::Memberwise => {
            let (_, ty_generics, _) = class.generics.split_for_impl();
            (
                class.generics.clone(),
                quote! { #name #ty_generics },
                memberwise_body(class, &helper),
            )
        }
        Initializer::Constructor {
            ident,
            params,
            generics,
            self_ty,
        } => {
            let args = params.iter().map(|param| {
                match param.as_deref().and_then(|p| class.property(p)) {
                    Some(property) => copy_expr(property, &helper),
                    None => quote! { ::core::default::Default::default() },
                }
            });
            (
                generics.clone(),
                quote! { #self_ty },
                quote! { Self::#ident(#(#args),*) },
            )
        }
    };
    let generics = bounded_generics(generics, class, &krate);
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    let doc = format!(" Returns a deep copy of this `{name}`.");
    quote! {
        impl #impl_generics #self_ty #where_clause {
            #[doc(hidden)]
            #[allow(dead_code)]
            #[inline]
            fn #helper<__V: #krate::DeepCopy>(value: &__V) -> __V {
                #krate::DeepCopy::deep_copy(value)
            }

            #[doc = #doc]
            #[must_use]
            pub fn #method(&self) -> Self {
                #body
            }
        }

        #[automatically_derived]
        impl #impl_generics #krate::DeepCopy for #self_ty #where_clause {
            #[inline]
            fn deep_copy(&self) -> Self {
                Self::#method(self)
            }
        }
    }
}

fn memberwise_body(class: &ClassShape, helper: &Ident) -> TokenStream {
    if class.shape == Shape::Unit {
        return quote! { Self };
    }
    let copied = class.properties.iter().map(|property| {
        let ident = &property.ident;
        let expr = copy_expr(property, helper);
        quote! { #ident: #expr }
    });
    let defaulted = class.skipped.iter().map(|ident| {
        quote! { #ident: ::core::default::Default::default() }
    });
    quote! { Self { #(#copied,)* #(#defaulted,)* } }
}

fn copy_expr(property: &Property, helper: &Ident) -> TokenStream {
    let ident = &property.ident;
    match &property.strategy {
        CopyStrategy::Deep => quote! { Self::#helper(&self.#ident) },
        CopyStrategy::Clone => quote! { ::core::clone::Clone::clone(&self.#ident) },
        CopyStrategy::With(path) => quote! { #path(&self.#ident) },
        CopyStrategy::Skip => quote! { ::core::default::Default::default() },
    }
}

/// Adds `T: DeepCopy` for every type parameter of the generated impls, unless
/// the container supplied its own `bound`.
fn bounded_generics(mut generics: Generics, class: &ClassShape, krate: &Path) -> Generics {
    let predicates: Vec<syn::WherePredicate> = match &class.container.bound {
        Some(bound) => bound.clone(),
        None => generics
            .type_params()
            .map(|param| {
                let ident = &param.ident;
                parse_quote!(#ident: #krate::DeepCopy)
            })
            .collect(),
    };
    generics.make_where_clause().predicates.extend(predicates);
    generics
}
