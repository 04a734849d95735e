use std::borrow::Cow;

/// Failures raised while building or installing the logging stack.
#[lhub_derive::lhub_error]
pub enum LoggerError {
    /// The rolling file appender rejected its setup (bad path or prefix).
    #[cfg(not(target_arch = "wasm32"))]
    #[error("File appender setup failed{}: {source}", format_context(context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A global tracing subscriber is already installed in this process.
    #[error("Subscriber install failed{}: {source}", format_context(context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// Anything that does not fit the other variants.
    #[error("Internal logger error{}: {message}", format_context(context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The builder was given settings that cannot produce a working logger.
    #[error("Invalid logger configuration{}: {message}", format_context(context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
