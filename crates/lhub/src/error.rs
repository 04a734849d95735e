use std::borrow::Cow;

/// Errors surfaced while composing the feature slices.
#[lhub_derive::lhub_error]
pub enum InitError {
    /// The registration table rejected an entry.
    #[error("Registry error{}: {source}", format_context(.context))]
    Registry { source: lhub_kernel::RegistryError, context: Option<Cow<'static, str>> },

    /// The link list slice failed to initialize.
    #[error("Link list slice error{}: {source}", format_context(.context))]
    LinkList { source: lhub_link_list::LinkListError, context: Option<Cow<'static, str>> },

    /// The how-to slice failed to initialize.
    #[error("How-to slice error{}: {source}", format_context(.context))]
    HowTo { source: lhub_how_to::HowToError, context: Option<Cow<'static, str>> },
}
