use std::borrow::Cow;

/// Error type for the {{project-name}} section.
#[lhub_derive::lhub_error]
pub enum FeatureError {
    /// Catch-all for failures this section cannot recover from.
    #[error("{{project-name}} error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
