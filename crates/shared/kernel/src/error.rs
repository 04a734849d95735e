use std::borrow::Cow;

/// Errors raised by the component registry.
#[lhub_derive::lhub_error]
pub enum RegistryError {
    /// A tag was registered twice; each tag maps to exactly one component.
    #[error("Duplicate component tag{}: `{tag}`", format_context(.context))]
    DuplicateTag { tag: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A lookup for a tag nothing was registered under.
    #[error("Unknown component tag{}: `{tag}`", format_context(.context))]
    UnknownTag { tag: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
