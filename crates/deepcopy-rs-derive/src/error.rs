use proc_macro2::Span;
use thiserror::Error;

/// Every way an expansion can fail. Any of them aborts the expansion: nothing
/// is generated for the declaration.
#[derive(Debug, Error)]
pub(crate) enum ExpandError {
    #[error("`DeepCopy` can only be applied to a struct with named fields, found {kind}")]
    NotAClass { kind: &'static str, span: Span },

    #[error("no constructor of `{type_name}` takes every stored property as a parameter{detail}")]
    NoValidInitializer {
        type_name: String,
        detail: String,
        span: Span,
    },

    #[error(
        "field `{field}` of type `{ty}` cannot be deep-copied: {reason}; \
         use `#[deep_copy(clone)]`, `#[deep_copy(with = path)]` or `#[deep_copy(skip)]`"
    )]
    PropertyTypeNotSupported {
        field: String,
        ty: String,
        reason: &'static str,
        span: Span,
    },

    #[error(transparent)]
    Attribute(#[from] syn::Error),
}

impl ExpandError {
    pub(crate) fn span(&self) -> Span {
        match self {
            ExpandError::NotAClass { span, .. }
            | ExpandError::NoValidInitializer { span, .. }
            | ExpandError::PropertyTypeNotSupported { span, .. } => *span,
            ExpandError::Attribute(e) => e.span(),
        }
    }
}

impl From<ExpandError> for syn::Error {
    fn from(e: ExpandError) -> Self {
        match e {
            ExpandError::Attribute(inner) => inner,
            other => syn::Error::new(other.span(), other.to_string()),
        }
    }
}
