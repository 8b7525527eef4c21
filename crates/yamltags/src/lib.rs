//! # yamltags — Declarative Field Constraints
//!
//! A post-deserialization pass for configuration structs. Fields declare
//! constraints with `#[yamltags(...)]`; [`process`] walks the value,
//! enforces them, and fills defaults in place.
//!
//! ```
//! use yamltags::Tagged;
//!
//! #[derive(Tagged, Default)]
//! struct Artifact {
//!     #[yamltags(required)]
//!     image: String,
//!     #[yamltags(default = "Dockerfile")]
//!     dockerfile: String,
//!     #[yamltags(one_of = "builder")]
//!     docker: Option<Docker>,
//!     #[yamltags(one_of = "builder")]
//!     bazel: Option<Bazel>,
//! }
//!
//! #[derive(Tagged, Default)]
//! struct Docker {
//!     #[yamltags(default = "default")]
//!     network: String,
//! }
//!
//! #[derive(Tagged, Default)]
//! struct Bazel {
//!     #[yamltags(required)]
//!     target: String,
//! }
//!
//! let mut artifact = Artifact {
//!     image: "gcr.io/app".into(),
//!     docker: Some(Docker::default()),
//!     ..Default::default()
//! };
//! yamltags::process(&mut artifact).unwrap();
//! assert_eq!(artifact.dockerfile, "Dockerfile");
//! assert_eq!(artifact.docker.unwrap().network, "default");
//! ```
//!
//! ## Constraints
//!
//! - `required` - the field must not hold its zero value.
//! - `default = <literal>` - a zero field is assigned the literal.
//! - `one_of = "<group>"` - at most one field of the group may be set.
//!
//! Nested structs, `Option`/`Box` around structs, and the structured
//! elements of `Vec`s and maps are validated recursively.
//!
//! ## Crate Policy
//!
//! - The first violation is returned; there is no partial success.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

// Lets the derive's `::yamltags::` paths resolve inside this crate's tests.
extern crate self as yamltags;

pub mod error;
pub mod field;
pub mod load;
pub mod process;
pub mod tags;
pub mod value;

pub use error::{LiteralError, TagError, TagParseError};
pub use field::{Field, Tagged};
pub use load::{from_json_str, from_path, from_yaml_str, Format, LoadError};
pub use process::process;
pub use tags::{Directive, FieldTags};
pub use value::{TagValue, ValueKind};

/// Derive [`Tagged`] and [`TagValue`] for a struct.
///
/// Field attributes: `#[yamltags(required)]`, `#[yamltags(default = ...)]`,
/// `#[yamltags(one_of = "...")]` (alias `oneOf`), `#[yamltags(skip)]`.
pub use yamltags_derive::Tagged;
