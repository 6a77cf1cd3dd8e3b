use crate::{object::MObject, value::Value};
use mdata_schema::{
    node::{Field, TypeRef},
    types::PrimitiveKind,
};
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// FieldError
///

#[derive(Debug, ThisError)]
pub enum FieldError {
    #[error("invalid field value: expected {expected}, got {got}")]
    InvalidFieldValue { expected: String, got: &'static str },

    #[error("unknown primitive type '{name}'")]
    UnknownPrimitiveType { name: String },
}

///
/// ElementKind
///
/// What a slot accepts: a recognized primitive kind or a reference to
/// a named klass.
///

#[derive(Clone, Debug)]
pub(crate) enum ElementKind {
    Primitive(PrimitiveKind),
    Ref(String),
}

impl ElementKind {
    fn resolve(ty: &TypeRef) -> Result<Self, FieldError> {
        match ty {
            TypeRef::Primitive(name) => PrimitiveKind::from_str(name)
                .map(Self::Primitive)
                .map_err(|_| FieldError::UnknownPrimitiveType { name: name.clone() }),
            TypeRef::Klass(name) => Ok(Self::Ref(name.clone())),
        }
    }

    fn expected(&self) -> String {
        match self {
            Self::Primitive(kind) => kind.to_string(),
            Self::Ref(klass) => format!("ref to '{klass}'"),
        }
    }

    fn check(&self, value: &Value) -> Result<(), FieldError> {
        let ok = match self {
            Self::Primitive(kind) => value.matches_primitive(*kind),
            Self::Ref(klass) => value.as_ref().is_some_and(|obj| obj.is_instance_of(klass)),
        };

        if ok {
            Ok(())
        } else {
            Err(FieldError::InvalidFieldValue {
                expected: self.expected(),
                got: value.kind_name(),
            })
        }
    }
}

///
/// FieldSlot
///
/// Per-field storage strategy, keyed by multiplicity first and then
/// primitive-vs-reference. `init` validates before it stores: a failed
/// write leaves the prior value untouched. For a many slot, `init`
/// replaces the entire sequence.
///

#[derive(Clone, Debug)]
pub(crate) enum FieldSlot {
    Many {
        element: ElementKind,
        values: Vec<Value>,
    },
    Primitive {
        kind: PrimitiveKind,
        value: Value,
    },
    Ref {
        klass: String,
        optional: bool,
        value: Option<MObject>,
    },
}

impl FieldSlot {
    pub(crate) fn new(field: &Field) -> Result<Self, FieldError> {
        if field.many {
            return Ok(Self::Many {
                element: ElementKind::resolve(&field.ty)?,
                values: Vec::new(),
            });
        }

        match ElementKind::resolve(&field.ty)? {
            ElementKind::Primitive(kind) => Ok(Self::Primitive {
                kind,
                value: Value::zero(kind),
            }),
            ElementKind::Ref(klass) => Ok(Self::Ref {
                klass,
                optional: field.optional,
                value: None,
            }),
        }
    }

    pub(crate) fn get(&self) -> Value {
        match self {
            Self::Many { values, .. } => Value::List(values.clone()),
            Self::Primitive { value, .. } => value.clone(),
            Self::Ref { value, .. } => value.clone().map_or(Value::Null, Value::Ref),
        }
    }

    pub(crate) fn init(&mut self, new: Value) -> Result<(), FieldError> {
        match self {
            Self::Primitive { kind, value } => {
                ElementKind::Primitive(*kind).check(&new)?;
                *value = new;
                Ok(())
            }

            Self::Ref {
                klass,
                optional,
                value,
            } => match new {
                Value::Null if *optional => {
                    *value = None;
                    Ok(())
                }
                Value::Ref(object) if object.is_instance_of(klass) => {
                    *value = Some(object);
                    Ok(())
                }
                other => Err(FieldError::InvalidFieldValue {
                    expected: format!("ref to '{klass}'"),
                    got: other.kind_name(),
                }),
            },

            Self::Many { element, values } => {
                let Value::List(items) = new else {
                    return Err(FieldError::InvalidFieldValue {
                        expected: format!("list of {}", element.expected()),
                        got: new.kind_name(),
                    });
                };

                for item in &items {
                    element.check(item)?;
                }

                *values = items;
                Ok(())
            }
        }
    }
}
