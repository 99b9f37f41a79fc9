//! Initializer matcher: picks the constructor the generated copy calls.

use syn::{Expr, FnArg, Generics, ImplItem, ImplItemFn, ItemImpl, Pat, ReturnType, Stmt, Type};

use crate::{attrs::parse_constructor_attributes, error::ExpandError, scan::ClassShape};

/// The constructor a copy is built with.
#[derive(Debug, Clone)]
pub(crate) enum Initializer {
    /// The struct literal `Self { .. }`, which names every field.
    Memberwise,
    Constructor {
        ident: syn::Ident,
        /// Parameter names in declaration order; `None` for patterns that bind
        /// no single name.
        params: Vec<Option<String>>,
        /// Generics of the impl block declaring the constructor, with the
        /// constructor's own where clause folded in when it adds no parameters.
        generics: Generics,
        /// Self type of that impl block, e.g. `Sorted<T>` or `Bytes<u8>`.
        self_ty: Box<Type>,
    },
}

/// Selects the first non-convenience constructor, in declaration order across
/// `impls`, whose parameter names cover every property.
pub(crate) fn select(class: &ClassShape, impls: &[ItemImpl]) -> Result<Initializer, ExpandError> {
    let mut closest: Option<(String, Vec<String>)> = None;
    for (item_impl, func) in constructors(class, impls)? {
        let params = parameter_names(func);
        let missing: Vec<String> = class
            .property_names()
            .filter(|name| !params.iter().flatten().any(|p| p == name))
            .collect();
        if missing.is_empty() {
            return Ok(Initializer::Constructor {
                ident: func.sig.ident.clone(),
                params,
                generics: constructor_generics(item_impl, func),
                self_ty: item_impl.self_ty.clone(),
            });
        }
        if closest
            .as_ref()
            .is_none_or(|(_, best)| missing.len() < best.len())
        {
            closest = Some((func.sig.ident.to_string(), missing));
        }
    }

    let detail = match closest {
        Some((name, missing)) => format!(
            "; closest is `{name}`, which does not take {}",
            missing
                .iter()
                .map(|m| format!("`{m}`"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        None => "; no constructor returning `Self` was found".to_string(),
    };
    Err(ExpandError::NoValidInitializer {
        type_name: class.ident.to_string(),
        detail,
        span: class.ident.span(),
    })
}

/// Inherent associated functions of the class that construct it directly,
/// paired with the impl block that declares them.
fn constructors<'a>(
    class: &ClassShape,
    impls: &'a [ItemImpl],
) -> syn::Result<Vec<(&'a ItemImpl, &'a ImplItemFn)>> {
    let mut out = Vec::new();
    for item_impl in impls {
        if item_impl.trait_.is_some() || !names_class(&item_impl.self_ty, class) {
            continue;
        }
        for item in &item_impl.items {
            let ImplItem::Fn(func) = item else {
                continue;
            };
            let attrs = parse_constructor_attributes(&func.attrs)?;
            if attrs.skip || attrs.convenience || !is_constructor(func, class) {
                continue;
            }
            if delegates(func, class) {
                continue;
            }
            out.push((item_impl, func));
        }
    }
    Ok(out)
}

/// The generics a call to `func` is valid under. A where clause on a
/// non-generic constructor only constrains the impl's parameters, so it is
/// lifted onto the impl.
fn constructor_generics(item_impl: &ItemImpl, func: &ImplItemFn) -> Generics {
    let mut generics = item_impl.generics.clone();
    if func.sig.generics.params.is_empty()
        && let Some(where_clause) = &func.sig.generics.where_clause
    {
        generics
            .make_where_clause()
            .predicates
            .extend(where_clause.predicates.iter().cloned());
    }
    generics
}

fn is_constructor(func: &ImplItemFn, class: &ClassShape) -> bool {
    let sig = &func.sig;
    if sig.receiver().is_some() || sig.asyncness.is_some() || sig.unsafety.is_some() {
        return false;
    }
    match &sig.output {
        ReturnType::Type(_, ty) => names_class(ty, class),
        ReturnType::Default => false,
    }
}

/// `Self`, `Name` or `Name<..>`.
fn names_class(ty: &Type, class: &ClassShape) -> bool {
    match ty {
        Type::Path(p) if p.qself.is_none() && p.path.segments.len() == 1 => {
            let ident = &p.path.segments[0].ident;
            ident == "Self" || *ident == class.ident
        }
        Type::Paren(p) => names_class(&p.elem, class),
        Type::Group(g) => names_class(&g.elem, class),
        _ => false,
    }
}

/// A convenience constructor's whole body is a call to another associated
/// function of the same type.
fn delegates(func: &ImplItemFn, class: &ClassShape) -> bool {
    let [Stmt::Expr(expr, None)] = func.block.stmts.as_slice() else {
        return false;
    };
    let Expr::Call(call) = peel(expr) else {
        return false;
    };
    let Expr::Path(path) = peel(&call.func) else {
        return false;
    };
    let segments = &path.path.segments;
    segments.len() == 2 && (segments[0].ident == "Self" || segments[0].ident == class.ident)
}

fn peel(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(p) => peel(&p.expr),
        Expr::Group(g) => peel(&g.expr),
        Expr::Return(r) => r.expr.as_deref().map_or(expr, peel),
        _ => expr,
    }
}

fn parameter_names(func: &ImplItemFn) -> Vec<Option<String>> {
    func.sig
        .inputs
        .iter()
        .map(|input| match input {
            FnArg::Typed(typed) => pattern_name(&typed.pat),
            FnArg::Receiver(_) => None,
        })
        .collect()
}

fn pattern_name(pat: &Pat) -> Option<String> {
    match pat {
        Pat::Ident(p) if p.subpat.is_none() => Some(p.ident.to_string()),
        Pat::Paren(p) => pattern_name(&p.pat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::*;
    use crate::scan::scan;

    fn item() -> ClassShape {
        let input: DeriveInput = parse_quote! {
            struct Item {
                text: String,
                value: i64,
            }
        };
        scan(&input).unwrap()
    }

    fn constructor_name(init: Initializer) -> String {
        match init {
            Initializer::Constructor { ident, .. } => ident.to_string(),
            Initializer::Memberwise => panic!("expected an explicit constructor"),
        }
    }

    #[test]
    fn selects_covering_constructor() {
        let impls: Vec<ItemImpl> = vec![parse_quote! {
            impl Item {
                pub fn new(text: String, value: i64) -> Self {
                    Self { text, value }
                }
            }
        }];
        let init = select(&item(), &impls).unwrap();
        match init {
            Initializer::Constructor { ident, params, .. } => {
                assert_eq!(ident, "new");
                assert_eq!(params, [Some("text".to_string()), Some("value".to_string())]);
            }
            Initializer::Memberwise => panic!("expected an explicit constructor"),
        }
    }

    #[test]
    fn first_match_in_declaration_order_wins() {
        let impls: Vec<ItemImpl> = vec![
            parse_quote! {
                impl Item {
                    fn partial(text: String) -> Self { Self { text, value: 0 } }
                    fn first(value: i64, text: String) -> Item { Item { text, value } }
                }
            },
            parse_quote! {
                impl Item {
                    fn second(text: String, value: i64) -> Self { Self { text, value } }
                }
            },
        ];
        assert_eq!(constructor_name(select(&item(), &impls).unwrap()), "first");
    }

    #[test]
    fn superset_constructor_is_accepted() {
        let impls: Vec<ItemImpl> = vec![parse_quote! {
            impl Item {
                fn with_scale(text: String, value: i64, scale: i64) -> Self {
                    Self { text, value: value * scale }
                }
            }
        }];
        match select(&item(), &impls).unwrap() {
            Initializer::Constructor { params, .. } => assert_eq!(params.len(), 3),
            Initializer::Memberwise => panic!("expected an explicit constructor"),
        }
    }

    #[test]
    fn non_constructors_are_ignored() {
        let impls: Vec<ItemImpl> = vec![
            parse_quote! {
                impl Item {
                    fn method(&self, text: String, value: i64) -> Self { todo!() }
                    fn failable(text: String, value: i64) -> Option<Self> { todo!() }
                    async fn later(text: String, value: i64) -> Self { todo!() }
                    unsafe fn raw(text: String, value: i64) -> Self { todo!() }
                    #[deep_copy(skip)]
                    fn hidden(text: String, value: i64) -> Self { todo!() }
                }
            },
            parse_quote! {
                impl From<(String, i64)> for Item {
                    fn from(text: String, value: i64) -> Self { todo!() }
                }
            },
        ];
        let err = select(&item(), &impls).unwrap_err();
        assert!(matches!(err, ExpandError::NoValidInitializer { .. }));
        assert!(err.to_string().contains("no constructor returning `Self`"));
    }

    #[test]
    fn convenience_constructors_are_ignored() {
        let impls: Vec<ItemImpl> = vec![parse_quote! {
            impl Item {
                fn delegating(text: String, value: i64) -> Self {
                    Self::new(text, value)
                }
                #[deep_copy(convenience)]
                fn marked(text: String, value: i64) -> Self {
                    Self { text, value }
                }
                fn new(value: i64, text: String) -> Self {
                    Self { text, value }
                }
            }
        }];
        assert_eq!(constructor_name(select(&item(), &impls).unwrap()), "new");
    }

    #[test]
    fn constructor_keeps_its_impl_generics() {
        let input: DeriveInput = parse_quote! {
            struct Sorted<T> { items: Vec<T> }
        };
        let class = scan(&input).unwrap();
        let impls: Vec<ItemImpl> = vec![parse_quote! {
            impl<T: Ord> Sorted<T> {
                fn new(items: Vec<T>) -> Self where T: Clone {
                    Self { items }
                }
            }
        }];
        match select(&class, &impls).unwrap() {
            Initializer::Constructor {
                generics, self_ty, ..
            } => {
                let params = &generics.params;
                assert_eq!(quote::quote!(#params).to_string(), "T : Ord");
                let where_clause = generics.where_clause.unwrap();
                assert_eq!(
                    quote::quote!(#where_clause).to_string(),
                    "where T : Clone"
                );
                assert_eq!(quote::quote!(#self_ty).to_string(), "Sorted < T >");
            }
            Initializer::Memberwise => panic!("expected an explicit constructor"),
        }
    }

    #[test]
    fn generic_constructor_where_clause_stays_on_the_function() {
        let input: DeriveInput = parse_quote! {
            struct Bag<T> { items: Vec<T> }
        };
        let class = scan(&input).unwrap();
        let impls: Vec<ItemImpl> = vec![parse_quote! {
            impl<T> Bag<T> {
                fn new<I>(items: I) -> Self where I: IntoIterator<Item = T> {
                    Self { items: items.into_iter().collect() }
                }
            }
        }];
        match select(&class, &impls).unwrap() {
            Initializer::Constructor { generics, .. } => {
                assert!(generics.where_clause.is_none());
            }
            Initializer::Memberwise => panic!("expected an explicit constructor"),
        }
    }

    #[test]
    fn missing_property_fails_closed() {
        let impls: Vec<ItemImpl> = vec![parse_quote! {
            impl Item {
                fn new(text: String) -> Self {
                    Self { text, value: 0 }
                }
            }
        }];
        let err = select(&item(), &impls).unwrap_err();
        assert!(matches!(err, ExpandError::NoValidInitializer { .. }));
        let message = err.to_string();
        assert!(message.contains("`Item`"));
        assert!(message.contains("closest is `new`, which does not take `value`"));
    }
}
