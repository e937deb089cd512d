#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros used across the shell workspace.
//!
//! Consumers add the crate as a regular dependency and annotate their error
//! enums with [`macro@pcx_error`]. The generated code refers to `::thiserror`,
//! so the consuming crate needs `thiserror` in its own dependency table.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a crate error type wired for context propagation.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for variants with a `source` field (or a field marked
///   `#[source]` / `#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A module-private `format_context` helper for `#[error(..)]` strings.
///
/// # Requirements
///
/// Every variant uses named fields. A `context` field must be typed
/// `Option<Cow<'static, str>>`, and variants carrying a source must have one.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[pcx_derive::pcx_error]
/// pub enum StoreError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn fetch(client: &reqwest::Client) -> Result<(), StoreError> {
///     let _ = client.get("https://example.com").build().context("Building offers request")?;
///     Err("not implemented yet".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn pcx_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}
