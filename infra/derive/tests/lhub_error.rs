use std::borrow::Cow;

use lhub_derive::lhub_error;

#[lhub_error]
pub enum FetchError {
    #[error("parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("unknown section `{tag}`")]
    UnknownSection { tag: Cow<'static, str> },

    #[error("internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[test]
fn lhub_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/lhub_error_pass.rs");
    t.compile_fail("tests/ui/lhub_error_no_context.rs");
    t.compile_fail("tests/ui/lhub_error_bad_context_type.rs");
    t.compile_fail("tests/ui/lhub_error_tuple_variant.rs");
}

#[test]
fn from_source_without_context() {
    let err: FetchError = "three".parse::<u32>().unwrap_err().into();
    assert!(matches!(err, FetchError::Parse { context: None, .. }));
}

#[test]
fn context_attaches_to_source_result() {
    let err = "three".parse::<u32>().context("link count").unwrap_err();
    let FetchError::Parse { context, .. } = err else {
        panic!("expected Parse variant");
    };
    assert_eq!(context.as_deref(), Some("link count"));
}

#[test]
fn context_attaches_after_conversion() {
    let res: Result<(), FetchError> = Err(FetchError::from("boom"));
    let err = res.context("while mounting").unwrap_err();
    assert_eq!(err.to_string(), "internal error (while mounting): boom");
}

#[test]
fn context_skips_variants_without_slot() {
    let res: Result<(), FetchError> =
        Err(FetchError::UnknownSection { tag: Cow::Borrowed("nav") });
    let err = res.context("ignored").unwrap_err();
    assert_eq!(err.to_string(), "unknown section `nav`");
}

#[test]
fn internal_from_string() {
    let err = FetchError::from(String::from("owned message"));
    assert!(matches!(err, FetchError::Internal { context: None, .. }));
    assert_eq!(err.to_string(), "internal error: owned message");
}
