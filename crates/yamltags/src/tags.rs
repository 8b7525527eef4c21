//! # Annotation Parser
//!
//! Parses the per-field annotation string into directives.
//!
//! ## Syntax
//!
//! A comma-separated list of directives, each `key` or `key=value`:
//!
//! | Directive | Meaning |
//! |-----------|---------|
//! | `required` | the field must not hold its zero value |
//! | `default=<literal>` | a zero field is assigned the parsed literal |
//! | `oneOf=<group>` | at most one field of `group` may be set |
//!
//! An empty string carries no constraints. Whitespace around directives is
//! trimmed and empty segments are ignored, so `"required, oneOf=set1"` and
//! `"required,oneOf=set1,"` are equivalent. A literal cannot contain `,`.

use std::fmt;

use crate::error::TagParseError;

const REQUIRED: &str = "required";
const DEFAULT: &str = "default";
const ONE_OF: &str = "oneOf";

/// A single parsed directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'t> {
    /// `required`
    Required,
    /// `default=<literal>`
    Default(&'t str),
    /// `oneOf=<group>`
    OneOf(&'t str),
}

impl fmt::Display for Directive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str(REQUIRED),
            Self::Default(literal) => write!(f, "{DEFAULT}={literal}"),
            Self::OneOf(group) => write!(f, "{ONE_OF}={group}"),
        }
    }
}

/// The constraints declared on one field.
///
/// Borrowed from the annotation string; parsing allocates nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldTags<'t> {
    /// `required` was present.
    pub required: bool,
    /// Literal from `default=<literal>`.
    pub default: Option<&'t str>,
    /// Group from `oneOf=<group>`.
    pub one_of: Option<&'t str>,
}

impl<'t> FieldTags<'t> {
    /// Parse an annotation string.
    ///
    /// Keys and group names are trimmed. A `default` literal is everything
    /// after the first `=`, whitespace included.
    ///
    /// # Errors
    ///
    /// Returns [`TagParseError`] for unknown keys, a value on `required`, a
    /// missing value on `default`/`oneOf`, an empty group name, or a
    /// directive given twice.
    pub fn parse(raw: &'t str) -> Result<Self, TagParseError> {
        let mut tags = Self::default();

        for segment in raw.split(',').filter(|s| !s.trim().is_empty()) {
            // A default literal is taken verbatim; everything else is trimmed.
            let (key, value) = match segment.split_once('=') {
                Some((key, value)) if key.trim() == DEFAULT => (DEFAULT, Some(value)),
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (segment.trim(), None),
            };

            match (key, value) {
                (REQUIRED, None) => {
                    if tags.required {
                        return Err(TagParseError::Duplicate(REQUIRED.to_string()));
                    }
                    tags.required = true;
                }
                (REQUIRED, Some(value)) => {
                    return Err(TagParseError::UnexpectedValue(value.to_string()));
                }
                (DEFAULT, Some(literal)) => {
                    if tags.default.replace(literal).is_some() {
                        return Err(TagParseError::Duplicate(DEFAULT.to_string()));
                    }
                }
                (ONE_OF, Some("")) => return Err(TagParseError::EmptyGroup),
                (ONE_OF, Some(group)) => {
                    if tags.one_of.replace(group).is_some() {
                        return Err(TagParseError::Duplicate(ONE_OF.to_string()));
                    }
                }
                (DEFAULT | ONE_OF, None) => {
                    return Err(TagParseError::MissingValue(key.to_string()));
                }
                (other, _) => return Err(TagParseError::UnknownDirective(other.to_string())),
            }
        }

        Ok(tags)
    }

    /// True when no directive is present.
    pub fn is_empty(&self) -> bool {
        !self.required && self.default.is_none() && self.one_of.is_none()
    }

    /// The directives in processing order: required, default, oneOf.
    pub fn directives(&self) -> Vec<Directive<'t>> {
        let mut out = Vec::with_capacity(3);
        if self.required {
            out.push(Directive::Required);
        }
        if let Some(literal) = self.default {
            out.push(Directive::Default(literal));
        }
        if let Some(group) = self.one_of {
            out.push(Directive::OneOf(group));
        }
        out
    }
}

impl fmt::Display for FieldTags<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, directive) in self.directives().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{directive}")?;
        }
        Ok(())
    }
}
