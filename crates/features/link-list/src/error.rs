use std::borrow::Cow;

/// A specialized [`LinkListError`] enum of this crate.
#[lhub_derive::lhub_error]
pub enum LinkListError {
    /// Curated content failed validation.
    #[error("Link list content error{}: {message}", format_context(.context))]
    Content { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal link list error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
