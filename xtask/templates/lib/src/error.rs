use std::borrow::Cow;

/// Error type for the {{project-name}} library.
#[lhub_derive::lhub_error]
pub enum LibError {
    /// Catch-all for failures callers cannot act on individually.
    #[error("{{project-name}} error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
