//! # Field Descriptors
//!
//! [`Tagged`] is the introspection seam the processor walks: a structured
//! value lists its fields, each with a declared name, its raw annotation
//! string, and a mutable handle to its value.
//!
//! Implementations are normally generated by `#[derive(Tagged)]`. A manual
//! implementation looks like this:
//!
//! ```
//! use yamltags::{Field, TagValue, Tagged, ValueKind};
//!
//! #[derive(Default)]
//! struct Registry {
//!     host: String,
//!     port: u16,
//! }
//!
//! impl Tagged for Registry {
//!     fn type_name(&self) -> &'static str {
//!         "Registry"
//!     }
//!
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("host", "required", &mut self.host),
//!             Field::new("port", "default=5000", &mut self.port),
//!         ]
//!     }
//! }
//!
//! impl TagValue for Registry {
//!     fn kind(&self) -> ValueKind {
//!         ValueKind::Struct
//!     }
//!
//!     fn is_zero(&self) -> bool {
//!         self.host.is_zero() && self.port.is_zero()
//!     }
//!
//!     fn as_tagged(&mut self) -> Option<&mut dyn Tagged> {
//!         Some(self)
//!     }
//! }
//!
//! let mut registry = Registry { host: "gcr.io".into(), ..Default::default() };
//! yamltags::process(&mut registry).unwrap();
//! assert_eq!(registry.port, 5000);
//! ```

use std::fmt;

use crate::value::TagValue;

/// A structured value whose fields carry constraint annotations.
pub trait Tagged {
    /// Type name used to qualify field names in errors (`TypeName.field`).
    fn type_name(&self) -> &'static str;

    /// The direct fields, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// One field of a [`Tagged`] value.
pub struct Field<'a> {
    /// Declared field name.
    pub name: &'static str,
    /// Raw annotation string, e.g. `"required,oneOf=set1"`. Empty for none.
    pub tags: &'static str,
    /// Mutable handle to the field's value.
    pub value: &'a mut dyn TagValue,
}

impl<'a> Field<'a> {
    /// Describe one field for [`Tagged::fields`].
    pub fn new(name: &'static str, tags: &'static str, value: &'a mut dyn TagValue) -> Self {
        Self { name, tags, value }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .field("kind", &self.value.kind())
            .field("is_zero", &self.value.is_zero())
            .finish()
    }
}
