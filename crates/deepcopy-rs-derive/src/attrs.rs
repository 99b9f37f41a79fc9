use syn::{
    Attribute, Ident, Lit, Path, Token, WherePredicate, parse::Parser, parse_quote,
    punctuated::Punctuated,
};

const ATTR: &str = "deep_copy";

// Container / field / constructor attribute models ----------------------------------------------
#[derive(Debug, Clone, Default)]
pub(crate) struct ContainerAttributes {
    pub krate: Option<Path>,
    pub method: Option<Ident>,
    pub bound: Option<Vec<WherePredicate>>,
}

impl ContainerAttributes {
    pub(crate) fn krate(&self) -> Path {
        self.krate
            .clone()
            .unwrap_or_else(|| parse_quote!(::deepcopy_rs))
    }

    pub(crate) fn method(&self) -> Ident {
        self.method
            .clone()
            .unwrap_or_else(|| Ident::new("copy", proc_macro2::Span::call_site()))
    }
}

/// How a single field is reproduced in the copy.
#[derive(Debug, Clone, Default)]
pub(crate) enum CopyStrategy {
    #[default]
    Deep,
    Clone,
    With(Path),
    Skip,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FieldAttributes {
    pub strategy: CopyStrategy,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConstructorAttributes {
    pub skip: bool,
    pub convenience: bool,
}

// Parsing ---------------------------------------------------------------------------------------
pub(crate) fn parse_container_attributes(attrs: &[Attribute]) -> syn::Result<ContainerAttributes> {
    let mut out = ContainerAttributes::default();
    for attr in attrs {
        if !attr.path().is_ident(ATTR) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let value = meta.value()?;
                out.krate = Some(value.parse()?);
                Ok(())
            } else if meta.path.is_ident("method") {
                let value = meta.value()?;
                out.method = Some(value.parse()?);
                Ok(())
            } else if meta.path.is_ident("bound") {
                let value = meta.value()?;
                let lit: Lit = value.parse()?;
                if let Lit::Str(s) = lit {
                    let parser = Punctuated::<WherePredicate, Token![,]>::parse_terminated;
                    let predicates = parser.parse_str(&s.value()).map_err(|e| {
                        syn::Error::new(s.span(), format!("Invalid bound: {e}"))
                    })?;
                    out.bound = Some(predicates.into_iter().collect());
                    Ok(())
                } else {
                    Err(syn::Error::new(lit.span(), "Expected string literal"))
                }
            } else {
                Err(meta.error("Unknown container attribute"))
            }
        })?;
    }
    Ok(out)
}

pub(crate) fn parse_field_attributes(attrs: &[Attribute]) -> syn::Result<FieldAttributes> {
    let mut out = FieldAttributes::default();
    for attr in attrs {
        if !attr.path().is_ident(ATTR) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let strategy = if meta.path.is_ident("clone") {
                CopyStrategy::Clone
            } else if meta.path.is_ident("skip") {
                CopyStrategy::Skip
            } else if meta.path.is_ident("with") {
                let value = meta.value()?;
                CopyStrategy::With(value.parse()?)
            } else {
                return Err(meta.error("Unknown field attribute"));
            };
            if !matches!(out.strategy, CopyStrategy::Deep) {
                return Err(meta.error("`clone`, `with` and `skip` are mutually exclusive"));
            }
            out.strategy = strategy;
            Ok(())
        })?;
    }
    Ok(out)
}

pub(crate) fn parse_constructor_attributes(
    attrs: &[Attribute],
) -> syn::Result<ConstructorAttributes> {
    let mut out = ConstructorAttributes::default();
    for attr in attrs {
        if !attr.path().is_ident(ATTR) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                out.skip = true;
                Ok(())
            } else if meta.path.is_ident("convenience") {
                out.convenience = true;
                Ok(())
            } else {
                Err(meta.error("Unknown constructor attribute"))
            }
        })?;
    }
    Ok(out)
}

/// Drops `#[deep_copy(..)]` attributes so items can be re-emitted outside a derive,
/// where the helper attribute is not registered.
pub(crate) fn strip(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !attr.path().is_ident(ATTR));
}
