//! # Value Handlers
//!
//! [`TagValue`] is the closed set of type handlers the processor needs from
//! a field value: its kind, whether it holds the zero value, how to build
//! it from a `default` literal, and which structured values it contains.
//!
//! ## Zero Values
//!
//! | Kind | Zero |
//! |------|------|
//! | string, path | empty |
//! | integer, float | `0` |
//! | bool | `false` |
//! | char | `'\0'` |
//! | optional | `None`, regardless of what `Some` would hold |
//! | sequence, map | empty |
//! | struct | every described field is zero |
//!
//! ## Literals
//!
//! Only leaf kinds (and `Option` of a leaf) accept `default` literals.
//! Booleans accept the same spellings as a Go `ParseBool`:
//! `1 t T TRUE true True` and `0 f F FALSE false False`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;

use crate::error::LiteralError;
use crate::field::Tagged;

/// The kind of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Bool,
    Char,
    Path,
    /// `Option<T>`; presence is the only thing that counts for zero-ness.
    Optional,
    /// A [`Tagged`] struct.
    Struct,
    Sequence,
    Map,
}

impl ValueKind {
    /// Lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Path => "path",
            Self::Optional => "optional",
            Self::Struct => "struct",
            Self::Sequence => "sequence",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value the processor can inspect.
pub trait TagValue {
    /// The handler kind of this value.
    fn kind(&self) -> ValueKind;

    /// True when the value equals its type's zero value.
    fn is_zero(&self) -> bool;

    /// Build a value from a `default` literal.
    fn parse_literal(_literal: &str) -> Result<Self, LiteralError>
    where
        Self: Sized,
    {
        Err(LiteralError::Unsupported)
    }

    /// Overwrite the value with the parsed `default` literal.
    fn set_default(&mut self, _literal: &str) -> Result<(), LiteralError> {
        Err(LiteralError::Unsupported)
    }

    /// The value as a structured value, looking through `Option` and `Box`.
    fn as_tagged(&mut self) -> Option<&mut dyn Tagged> {
        None
    }

    /// Every structured value directly reachable from this value: itself if
    /// it is a struct, or the structured elements of a sequence or map.
    fn nested(&mut self) -> Vec<&mut dyn Tagged> {
        self.as_tagged().into_iter().collect()
    }
}

macro_rules! leaf_value {
    ($kind:expr, $zero:expr, $parse:expr; $($ty:ty),+ $(,)?) => {$(
        impl TagValue for $ty {
            fn kind(&self) -> ValueKind {
                $kind
            }

            fn is_zero(&self) -> bool {
                let is_zero: fn(&$ty) -> bool = $zero;
                is_zero(self)
            }

            fn parse_literal(literal: &str) -> Result<Self, LiteralError> {
                let parse: fn(&str) -> Result<$ty, LiteralError> = $parse;
                parse(literal)
            }

            fn set_default(&mut self, literal: &str) -> Result<(), LiteralError> {
                *self = Self::parse_literal(literal)?;
                Ok(())
            }
        }
    )+};
}

leaf_value!(
    ValueKind::Integer,
    |v| *v == 0,
    |s| s.parse().map_err(LiteralError::invalid);
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

leaf_value!(
    ValueKind::Float,
    |v| *v == 0.0,
    |s| s.parse().map_err(LiteralError::invalid);
    f32, f64,
);

leaf_value!(ValueKind::Bool, |v| !*v, parse_bool; bool);
leaf_value!(ValueKind::Char, |v| *v == '\0', parse_char; char);
leaf_value!(ValueKind::String, |v| v.is_empty(), |s| Ok(s.to_string()); String);
leaf_value!(
    ValueKind::Path,
    |v| v.as_os_str().is_empty(),
    |s| Ok(PathBuf::from(s));
    PathBuf,
);

fn parse_bool(literal: &str) -> Result<bool, LiteralError> {
    match literal {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(LiteralError::invalid(format!(
            "{other:?} is not a boolean"
        ))),
    }
}

fn parse_char(literal: &str) -> Result<char, LiteralError> {
    let mut chars = literal.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LiteralError::invalid(format!(
            "{literal:?} is not a single character"
        ))),
    }
}

impl<T: TagValue> TagValue for Option<T> {
    fn kind(&self) -> ValueKind {
        ValueKind::Optional
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn parse_literal(literal: &str) -> Result<Self, LiteralError> {
        T::parse_literal(literal).map(Some)
    }

    fn set_default(&mut self, literal: &str) -> Result<(), LiteralError> {
        *self = Some(T::parse_literal(literal)?);
        Ok(())
    }

    fn as_tagged(&mut self) -> Option<&mut dyn Tagged> {
        self.as_mut().and_then(|inner| inner.as_tagged())
    }

    fn nested(&mut self) -> Vec<&mut dyn Tagged> {
        match self {
            Some(inner) => inner.nested(),
            None => Vec::new(),
        }
    }
}

impl<T: TagValue> TagValue for Box<T> {
    fn kind(&self) -> ValueKind {
        (**self).kind()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn parse_literal(literal: &str) -> Result<Self, LiteralError> {
        T::parse_literal(literal).map(Box::new)
    }

    fn set_default(&mut self, literal: &str) -> Result<(), LiteralError> {
        (**self).set_default(literal)
    }

    fn as_tagged(&mut self) -> Option<&mut dyn Tagged> {
        (**self).as_tagged()
    }

    fn nested(&mut self) -> Vec<&mut dyn Tagged> {
        (**self).nested()
    }
}

impl<T: TagValue> TagValue for Vec<T> {
    fn kind(&self) -> ValueKind {
        ValueKind::Sequence
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn nested(&mut self) -> Vec<&mut dyn Tagged> {
        self.iter_mut().flat_map(|item| item.nested()).collect()
    }
}

impl<K, V: TagValue> TagValue for BTreeMap<K, V> {
    fn kind(&self) -> ValueKind {
        ValueKind::Map
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn nested(&mut self) -> Vec<&mut dyn Tagged> {
        self.values_mut().flat_map(|value| value.nested()).collect()
    }
}

impl<K, V: TagValue, S> TagValue for HashMap<K, V, S> {
    fn kind(&self) -> ValueKind {
        ValueKind::Map
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn nested(&mut self) -> Vec<&mut dyn Tagged> {
        self.values_mut().flat_map(|value| value.nested()).collect()
    }
}
