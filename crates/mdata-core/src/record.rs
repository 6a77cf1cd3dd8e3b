//! The legacy record prototype the managed-object runtime grew out
//! of: a flat, schema-less record built from a declarative field list.
//! No klasses, no references, no observers; kept as the minimal
//! get/set-by-name variant.

use crate::value::Value;
use mdata_schema::types::PrimitiveKind;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// RecordError
///

#[derive(Debug, ThisError)]
pub enum RecordError {
    #[error("no field named '{field}' in record")]
    NoSuchField { field: String },

    #[error("field '{field}': expected {expected}, got {got}")]
    InvalidFieldValue {
        field: String,
        expected: PrimitiveKind,
        got: &'static str,
    },
}

///
/// Record
///

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, (PrimitiveKind, Value)>,
}

impl Record {
    /// Build a record from `(name, kind)` pairs; every field starts at
    /// its kind's zero value.
    #[must_use]
    pub fn new<N: Into<String>>(fields: impl IntoIterator<Item = (N, PrimitiveKind)>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, kind)| (name.into(), (kind, Value::zero(kind))))
                .collect(),
        }
    }

    #[must_use]
    pub fn kind(&self, field: &str) -> Option<PrimitiveKind> {
        self.fields.get(field).map(|(kind, _)| *kind)
    }

    pub fn get(&self, field: &str) -> Result<Value, RecordError> {
        self.fields
            .get(field)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| RecordError::NoSuchField {
                field: field.to_string(),
            })
    }

    pub fn set(&mut self, field: &str, value: Value) -> Result<(), RecordError> {
        let Some((kind, slot)) = self.fields.get_mut(field) else {
            return Err(RecordError::NoSuchField {
                field: field.to_string(),
            });
        };

        if !value.matches_primitive(*kind) {
            return Err(RecordError::InvalidFieldValue {
                field: field.to_string(),
                expected: *kind,
                got: value.kind_name(),
            });
        }

        *slot = value;
        Ok(())
    }
}
