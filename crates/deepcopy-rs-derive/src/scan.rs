//! Property scanner: checks the declaration kind and collects the stored
//! properties a copy has to reproduce.

use quote::ToTokens;
use syn::{
    Data, DeriveInput, Fields, GenericArgument, Generics, Ident, PathArguments, Type,
    spanned::Spanned,
};

use crate::{
    attrs::{ContainerAttributes, CopyStrategy, parse_container_attributes, parse_field_attributes},
    error::ExpandError,
};

/// A stored instance field the copy must carry over.
#[derive(Debug, Clone)]
pub(crate) struct Property {
    pub ident: Ident,
    pub strategy: CopyStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Named,
    Unit,
}

/// Everything the later stages need to know about the declaration.
#[derive(Debug)]
pub(crate) struct ClassShape {
    pub ident: Ident,
    pub generics: Generics,
    pub shape: Shape,
    pub container: ContainerAttributes,
    /// Properties in declaration order.
    pub properties: Vec<Property>,
    /// Fields excluded with `#[deep_copy(skip)]`.
    pub skipped: Vec<Ident>,
}

impl ClassShape {
    pub(crate) fn property_names(&self) -> impl Iterator<Item = String> + '_ {
        self.properties.iter().map(|p| p.ident.to_string())
    }

    pub(crate) fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.ident == name)
    }
}

pub(crate) fn scan(input: &DeriveInput) -> Result<ClassShape, ExpandError> {
    let ident = &input.ident;
    let data = match &input.data {
        Data::Struct(s) => s,
        Data::Enum(_) => return Err(not_a_class("an enum", ident)),
        Data::Union(_) => return Err(not_a_class("a union", ident)),
    };
    let container = parse_container_attributes(&input.attrs)?;

    let (shape, fields) = match &data.fields {
        Fields::Named(named) => (Shape::Named, Some(&named.named)),
        Fields::Unit => (Shape::Unit, None),
        Fields::Unnamed(_) => return Err(not_a_class("a tuple struct", ident)),
    };

    let mut properties = Vec::new();
    let mut skipped = Vec::new();
    for field in fields.into_iter().flatten() {
        let Some(field_ident) = field.ident.clone() else {
            continue;
        };
        let attrs = parse_field_attributes(&field.attrs)?;
        match attrs.strategy {
            CopyStrategy::Skip => skipped.push(field_ident),
            CopyStrategy::Deep => {
                if let Some(reason) = unsupported_reason(&field.ty) {
                    return Err(ExpandError::PropertyTypeNotSupported {
                        field: field_ident.to_string(),
                        ty: field.ty.to_token_stream().to_string(),
                        reason,
                        span: field.ty.span(),
                    });
                }
                properties.push(Property {
                    ident: field_ident,
                    strategy: CopyStrategy::Deep,
                });
            }
            strategy => properties.push(Property {
                ident: field_ident,
                strategy,
            }),
        }
    }

    Ok(ClassShape {
        ident: ident.clone(),
        generics: input.generics.clone(),
        shape,
        container,
        properties,
        skipped,
    })
}

pub(crate) fn not_a_class(kind: &'static str, at: &impl Spanned) -> ExpandError {
    ExpandError::NotAClass {
        kind,
        span: at.span(),
    }
}

/// Types that can never be deep-copied, whatever traits are in scope.
/// Anything else is left to the `DeepCopy` bound in the generated code.
fn unsupported_reason(ty: &Type) -> Option<&'static str> {
    match ty {
        Type::Reference(r) if r.mutability.is_some() => {
            Some("a mutable reference cannot be duplicated")
        }
        Type::Reference(r) => match &r.lifetime {
            Some(lifetime) if lifetime.ident == "static" => None,
            _ => Some("a borrowed reference would alias the original"),
        },
        Type::Ptr(_) => Some("a raw pointer would alias the original"),
        Type::TraitObject(_) => Some("a trait object has no known copy"),
        Type::ImplTrait(_) => Some("an opaque type has no known copy"),
        Type::Paren(p) => unsupported_reason(&p.elem),
        Type::Group(g) => unsupported_reason(&g.elem),
        Type::Array(a) => unsupported_reason(&a.elem),
        Type::Slice(s) => unsupported_reason(&s.elem),
        Type::Tuple(t) => t.elems.iter().find_map(unsupported_reason),
        Type::Path(p) => {
            if let Some(qself) = &p.qself
                && let Some(reason) = unsupported_reason(&qself.ty)
            {
                return Some(reason);
            }
            let last = p.path.segments.last()?;
            if last.ident == "PhantomData" {
                return None;
            }
            p.path
                .segments
                .iter()
                .filter_map(|seg| match &seg.arguments {
                    PathArguments::AngleBracketed(args) => Some(args),
                    _ => None,
                })
                .flat_map(|args| args.args.iter())
                .find_map(|arg| match arg {
                    GenericArgument::Type(t) => unsupported_reason(t),
                    _ => None,
                })
        }
        _ => None,
    }
}
