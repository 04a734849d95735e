use std::borrow::Cow;

/// A specialized [`HowToError`] enum of this crate.
#[lhub_derive::lhub_error]
pub enum HowToError {
    /// Guide content failed validation.
    #[error("How-to content error{}: {message}", format_context(.context))]
    Content { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal how-to error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
