//! # Error Types — Structured Error Hierarchy
//!
//! Defines the errors produced while processing field annotations. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - [`TagError`] is the only error returned by [`crate::process`]. Every
//!   field-level variant carries the struct-qualified field name
//!   (`TypeName.field`).
//! - [`LiteralError`] and [`TagParseError`] are produced by the value
//!   handlers and the annotation parser, which know nothing about field
//!   names. The processor maps them into [`TagError`].

use thiserror::Error;

use crate::value::ValueKind;

/// Error returned by [`crate::process`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// The value handed to the processor is neither a struct nor a
    /// pointer-like wrapper around one.
    #[error("not a struct: {type_name}")]
    NotAStruct {
        /// Rust type name of the rejected value.
        type_name: String,
    },

    /// A `required` field holds the zero value of its type.
    #[error("required field {field} not set")]
    MissingRequiredField {
        /// Qualified field name, e.g. `BuildConfig.image`.
        field: String,
    },

    /// More than one field of a `oneOf` group is set.
    #[error("only one element in set {group} can be set, got {}", .fields.join(" and "))]
    MultipleOneOfFields {
        /// The group name from `oneOf=<group>`.
        group: String,
        /// Qualified names of every non-zero member, in field order.
        fields: Vec<String>,
    },

    /// A `default` literal could not be parsed for the field's type.
    #[error("invalid default {literal:?} for field {field}: {reason}")]
    InvalidDefault {
        /// Qualified field name.
        field: String,
        /// The literal as written in the annotation.
        literal: String,
        /// Parser message.
        reason: String,
    },

    /// A `default` directive sits on a field whose kind has no literal form.
    #[error("field {field} of kind {kind} does not accept a default value")]
    UnsupportedDefault {
        /// Qualified field name.
        field: String,
        /// Kind of the field's value.
        kind: ValueKind,
    },

    /// The annotation string on a field could not be parsed.
    #[error("malformed yamltags {tag:?} on field {field}: {source}")]
    MalformedTag {
        /// Qualified field name.
        field: String,
        /// The raw annotation string.
        tag: String,
        /// What was wrong with it.
        #[source]
        source: TagParseError,
    },
}

impl TagError {
    /// Qualified name of the field the error refers to, if any.
    ///
    /// For [`TagError::MultipleOneOfFields`] this is the first member found.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::NotAStruct { .. } => None,
            Self::MissingRequiredField { field }
            | Self::InvalidDefault { field, .. }
            | Self::UnsupportedDefault { field, .. }
            | Self::MalformedTag { field, .. } => Some(field),
            Self::MultipleOneOfFields { fields, .. } => fields.first().map(String::as_str),
        }
    }
}

/// Error parsing a `default` literal into a concrete value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// The value has no literal representation (structs, sequences, maps).
    #[error("value cannot be built from a literal")]
    Unsupported,

    /// The literal is not valid for the target type.
    #[error("{reason}")]
    Invalid {
        /// Parser message.
        reason: String,
    },
}

impl LiteralError {
    pub(crate) fn invalid(reason: impl ToString) -> Self {
        Self::Invalid {
            reason: reason.to_string(),
        }
    }
}

/// Error parsing an annotation string such as `required,oneOf=set1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagParseError {
    /// The directive key is not one of `required`, `default`, `oneOf`.
    #[error("unknown directive {0:?}")]
    UnknownDirective(String),

    /// `required` was given a value.
    #[error("directive \"required\" takes no value, got {0:?}")]
    UnexpectedValue(String),

    /// `default` or `oneOf` was given without `=<value>`.
    #[error("directive {0:?} requires a value")]
    MissingValue(String),

    /// `oneOf=` with an empty group name.
    #[error("directive \"oneOf\" requires a non-empty group name")]
    EmptyGroup,

    /// The same directive appears twice on one field.
    #[error("directive {0:?} given more than once")]
    Duplicate(String),
}
