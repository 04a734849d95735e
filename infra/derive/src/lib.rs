#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the infrastructure.
//! This crate carries the attribute macros shared by the workspace; today that is the
//! error-handling idiom every `error.rs` in the tree is written with.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro that turns a plain enum into a workspace error type.
///
/// Writing an error enum by hand means repeating the same derives, `From`
/// conversions, and context plumbing in every crate. Annotating the enum with
/// `#[lhub_error]` generates all of it in one place.
///
/// # What it generates
///
/// * `#[derive(Debug, thiserror::Error)]` on the enum itself.
/// * A `<ErrorName>Ext` trait whose `.context(...)` method attaches a message to
///   `Result<T, ErrorName>`, and to `Result<T, SourceError>` for every wrapped
///   source error.
/// * `From<SourceError>` for each variant carrying a `source` field next to a
///   `context` field, so `?` lifts upstream errors directly.
/// * `From<&'static str>` and `From<String>` targeting the `Internal` variant,
///   when the enum declares one.
/// * A `format_context` helper the `#[error("...")]` display strings call to render
///   the optional context suffix.
///
/// # Rules
///
/// 1. Only enums are accepted.
/// 2. A variant that wants `.context(...)` must carry a
///    `context: Option<Cow<'static, str>>` field.
/// 3. A variant that wraps another error must name the field `source` or mark it
///    with `#[source]`/`#[from]`, matching `thiserror` conventions.
/// 4. Tuple and unit variants are rejected; named fields keep the wiring explicit.
///
/// # Example
///
/// ```rust,ignore
/// use lhub_derive::lhub_error;
/// use std::borrow::Cow;
///
/// #[lhub_error]
/// pub enum RegistryError {
///     #[error("Duplicate component tag{}: '{tag}'", format_context(.context))]
///     DuplicateTag { tag: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal registry error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// // Usage:
/// fn register_all() -> Result<(), RegistryError> {
///     register("app").context("Registering the root component")?;
///     Err("tag table exhausted".into()) // Uses From<&str> for the Internal variant
/// }
/// ```
#[proc_macro_attribute]
pub fn lhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
