//! Procedural macros for yamltags
//!
//! This crate provides `#[derive(Tagged)]`, re-exported from `yamltags`.
//! Depend on `yamltags`, not on this crate directly: the generated code
//! refers to `::yamltags::*` paths.

use proc_macro::TokenStream;

mod attrs;
mod tagged;

/// Derive `yamltags::Tagged` and `yamltags::TagValue` for a struct.
///
/// # Attributes
///
/// - `#[yamltags(required)]` - the field must not hold its zero value
/// - `#[yamltags(default = "foo")]` - a zero field gets the literal (string,
///   integer, float, bool, or char literals are accepted)
/// - `#[yamltags(one_of = "group")]` - at most one field of `group` may be
///   set; `oneOf` is accepted as an alias
/// - `#[yamltags(skip)]` - leave the field out entirely
///
/// # Example
///
/// ```ignore
/// #[derive(Tagged, Deserialize, Default)]
/// #[serde(default)]
/// pub struct Deploy {
///     #[yamltags(one_of = "deployer")]
///     pub kubectl: Option<Kubectl>,
///     #[yamltags(one_of = "deployer")]
///     pub helm: Option<Helm>,
///     #[yamltags(default = 60)]
///     pub status_check_deadline_seconds: u32,
/// }
/// ```
#[proc_macro_derive(Tagged, attributes(yamltags))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
    tagged::derive_tagged_impl(input)
}
