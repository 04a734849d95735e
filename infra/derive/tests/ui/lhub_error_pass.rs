use lhub_derive::lhub_error;
use std::borrow::Cow;

#[lhub_error]
pub enum RegistryError {
    #[error("render failed{}: {source}", format_context(.context))]
    Render {
        #[source]
        source: std::fmt::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("unknown component tag `{tag}`")]
    UnknownTag { tag: Cow<'static, str> },

    #[error("internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
