//! # Annotation Processor
//!
//! Walks a structured value depth first and applies the constraints
//! declared on each field.
//!
//! ## Algorithm
//!
//! For every direct field, in declaration order:
//!
//! 1. Parse the annotation string.
//! 2. `required`: a zero value returns [`TagError::MissingRequiredField`]
//!    at once.
//! 3. `default=<literal>`: a zero value is overwritten with the literal.
//! 4. `oneOf=<group>`: a non-zero value is registered under `group`.
//! 5. Recurse into every structured value the field contains.
//!
//! After the last field, any group with more than one registered member
//! returns [`TagError::MultipleOneOfFields`]. Rule order inside a field is
//! fixed, so `required` together with `default` never fills: the required
//! check fires first.
//!
//! The first error ends the walk. Defaults filled before that point stay
//! filled.

use tracing::{debug, trace, trace_span};

use crate::error::{LiteralError, TagError};
use crate::field::{Field, Tagged};
use crate::tags::FieldTags;
use crate::value::TagValue;

/// Validate `value` and fill its defaults in place.
///
/// `value` must be a [`Tagged`] struct or a `Box`/`Some` around one.
///
/// # Errors
///
/// - [`TagError::NotAStruct`] if `value` is not structured; nothing is
///   visited.
/// - [`TagError::MissingRequiredField`] for the first zero `required` field.
/// - [`TagError::MultipleOneOfFields`] when a `oneOf` group has more than
///   one non-zero member.
/// - [`TagError::InvalidDefault`], [`TagError::UnsupportedDefault`] and
///   [`TagError::MalformedTag`] for annotation authoring mistakes.
pub fn process<V: TagValue + ?Sized>(value: &mut V) -> Result<(), TagError> {
    let type_name = std::any::type_name::<V>();
    let _span = trace_span!("yamltags.process", type_name).entered();

    match value.as_tagged() {
        Some(target) => process_struct(target),
        None => {
            debug!(type_name, "rejected non-struct value");
            Err(TagError::NotAStruct {
                type_name: type_name.to_string(),
            })
        }
    }
}

fn process_struct(target: &mut dyn Tagged) -> Result<(), TagError> {
    let type_name = target.type_name();
    let mut groups = OneOfGroups::default();

    for Field { name, tags, value } in target.fields() {
        let field = format!("{type_name}.{name}");
        let parsed = FieldTags::parse(tags).map_err(|source| TagError::MalformedTag {
            field: field.clone(),
            tag: tags.to_string(),
            source,
        })?;

        if parsed.required && value.is_zero() {
            debug!(field = %field, "required field not set");
            return Err(TagError::MissingRequiredField { field });
        }

        if let Some(literal) = parsed.default {
            if value.is_zero() {
                apply_default(&field, literal, value)?;
            }
        }

        if let Some(group) = parsed.one_of {
            if !value.is_zero() {
                groups.register(group, field);
            }
        }

        for nested in value.nested() {
            process_struct(nested)?;
        }
    }

    groups.check()
}

fn apply_default(field: &str, literal: &str, value: &mut dyn TagValue) -> Result<(), TagError> {
    value.set_default(literal).map_err(|e| match e {
        LiteralError::Unsupported => TagError::UnsupportedDefault {
            field: field.to_string(),
            kind: value.kind(),
        },
        LiteralError::Invalid { reason } => TagError::InvalidDefault {
            field: field.to_string(),
            literal: literal.to_string(),
            reason,
        },
    })?;
    trace!(field, literal, "applied default");
    Ok(())
}

/// Non-zero members of each `oneOf` group for one struct instance.
#[derive(Debug, Default)]
struct OneOfGroups<'t> {
    /// Group name and qualified member names, in registration order.
    groups: Vec<(&'t str, Vec<String>)>,
    /// Index of the first group to reach two members.
    first_conflict: Option<usize>,
}

impl<'t> OneOfGroups<'t> {
    fn register(&mut self, group: &'t str, field: String) {
        let index = match self.groups.iter().position(|(name, _)| *name == group) {
            Some(index) => index,
            None => {
                self.groups.push((group, Vec::new()));
                self.groups.len() - 1
            }
        };

        let members = &mut self.groups[index].1;
        members.push(field);
        if members.len() == 2 && self.first_conflict.is_none() {
            self.first_conflict = Some(index);
        }
    }

    fn check(mut self) -> Result<(), TagError> {
        match self.first_conflict {
            Some(index) => {
                let (group, fields) = self.groups.swap_remove(index);
                debug!(group, ?fields, "more than one oneOf field set");
                Err(TagError::MultipleOneOfFields {
                    group: group.to_string(),
                    fields,
                })
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    /// Hand-written descriptor so the engine is tested without the derive.
    #[derive(Debug, Default, PartialEq)]
    struct Manual {
        name: String,
        replicas: u32,
        tags: &'static str,
    }

    impl Tagged for Manual {
        fn type_name(&self) -> &'static str {
            "Manual"
        }

        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("name", self.tags, &mut self.name),
                Field::new("replicas", "default=1", &mut self.replicas),
            ]
        }
    }

    impl TagValue for Manual {
        fn kind(&self) -> ValueKind {
            ValueKind::Struct
        }

        fn is_zero(&self) -> bool {
            self.name.is_zero() && self.replicas.is_zero()
        }

        fn as_tagged(&mut self) -> Option<&mut dyn Tagged> {
            Some(self)
        }
    }

    #[test]
    fn test_manual_descriptor_defaults() {
        let mut m = Manual {
            name: "web".into(),
            ..Default::default()
        };
        process(&mut m).unwrap();
        assert_eq!(m.replicas, 1);
    }

    #[test]
    fn test_manual_descriptor_required() {
        let mut m = Manual {
            tags: "required",
            ..Default::default()
        };
        let err = process(&mut m).unwrap_err();
        assert_eq!(
            err,
            TagError::MissingRequiredField {
                field: "Manual.name".to_string()
            }
        );
    }

    #[test]
    fn test_required_error_skips_default_on_same_field() {
        let mut m = Manual {
            tags: "default=web,required",
            ..Default::default()
        };
        assert!(matches!(
            process(&mut m),
            Err(TagError::MissingRequiredField { .. })
        ));
        assert!(m.name.is_empty());
    }

    #[test]
    fn test_malformed_tag_reported_with_field() {
        let mut m = Manual {
            tags: "requierd",
            ..Default::default()
        };
        let err = process(&mut m).unwrap_err();
        assert_eq!(err.field(), Some("Manual.name"));
        assert!(matches!(err, TagError::MalformedTag { .. }));
        assert!(err.to_string().contains("requierd"));
    }

    #[test]
    fn test_not_a_struct() {
        let err = process(&mut 5u32).unwrap_err();
        assert_eq!(
            err,
            TagError::NotAStruct {
                type_name: "u32".to_string()
            }
        );
        assert!(matches!(
            process(&mut vec![Manual::default()]),
            Err(TagError::NotAStruct { .. })
        ));
        assert!(matches!(
            process(&mut None::<Manual>),
            Err(TagError::NotAStruct { .. })
        ));
    }

    #[test]
    fn test_pointer_to_struct_accepted() {
        let mut boxed = Box::new(Manual {
            name: "api".into(),
            ..Default::default()
        });
        process(&mut boxed).unwrap();
        assert_eq!(boxed.replicas, 1);

        let mut some = Some(Manual {
            name: "api".into(),
            ..Default::default()
        });
        process(&mut some).unwrap();
        assert_eq!(some.map(|m| m.replicas), Some(1));
    }

    #[test]
    fn test_one_of_groups_report_first_conflict() {
        let mut groups = OneOfGroups::default();
        groups.register("set2", "T.c".to_string());
        groups.register("set1", "T.a".to_string());
        groups.register("set1", "T.b".to_string());
        groups.register("set2", "T.d".to_string());
        assert_eq!(
            groups.check(),
            Err(TagError::MultipleOneOfFields {
                group: "set1".to_string(),
                fields: vec!["T.a".to_string(), "T.b".to_string()],
            })
        );
    }

    #[test]
    fn test_one_of_groups_collect_all_members() {
        let mut groups = OneOfGroups::default();
        for f in ["T.a", "T.b", "T.c"] {
            groups.register("set", f.to_string());
        }
        let err = groups.check().unwrap_err();
        assert_eq!(
            err.to_string(),
            "only one element in set set can be set, got T.a and T.b and T.c"
        );
    }

    #[test]
    fn test_one_of_groups_single_members_pass() {
        let mut groups = OneOfGroups::default();
        groups.register("set1", "T.a".to_string());
        groups.register("set2", "T.b".to_string());
        assert_eq!(groups.check(), Ok(()));
    }
}
