//! The managed-object runtime.
//!
//! An object's life: construction declares one slot per field of its
//! klass at the type's zero value, positional initializers (if any)
//! are then assigned in field-declaration order, and from then on all
//! state changes flow through `set` — the single write choke point.
//!
//! Per-field failures during construction are logged and skipped so a
//! partially invalid initializer list degrades the object instead of
//! aborting it; the same failures are fatal on direct `get`/`set`.

mod slot;

#[cfg(test)]
mod tests;

pub use slot::FieldError;

use crate::value::Value;
use mdata_schema::node::Klass;
use slot::FieldSlot;
use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};
use thiserror::Error as ThisError;

///
/// ObjectError
///

#[derive(Debug, ThisError)]
pub enum ObjectError {
    #[error("no field named '{field}' on klass '{klass}'")]
    NoSuchField { klass: String, field: String },

    #[error("field '{field}' on klass '{klass}': {source}")]
    Field {
        klass: String,
        field: String,
        #[source]
        source: FieldError,
    },
}

///
/// MObject
///
/// A managed object bound to exactly one klass. The handle is cheap to
/// clone and shares one instance; equality is instance identity. Not
/// `Send`: one writer at a time, on the caller's thread.
///

#[derive(Clone)]
pub struct MObject {
    inner: Rc<Inner>,
}

struct Inner {
    klass: Klass,
    slots: RefCell<BTreeMap<String, FieldSlot>>,
}

impl MObject {
    /// Declare slots for every field of the klass at zero values.
    /// Fields with no strategy (unrecognized primitive kinds) are
    /// logged and skipped.
    #[must_use]
    pub fn new(klass: &Klass) -> Self {
        let mut slots = BTreeMap::new();

        for field in klass.fields() {
            match FieldSlot::new(field) {
                Ok(slot) => {
                    slots.insert(field.name.clone(), slot);
                }
                Err(err) => {
                    tracing::warn!(
                        klass = %klass.name,
                        field = %field.name,
                        error = %err,
                        "skipping field with no storage strategy"
                    );
                }
            }
        }

        Self {
            inner: Rc::new(Inner {
                klass: klass.clone(),
                slots: RefCell::new(slots),
            }),
        }
    }

    /// Declare slots, then assign positional initializers in field
    /// declaration order. Fewer initializers than fields leaves the
    /// rest at zero values; extras are ignored; an invalid initializer
    /// is logged and skipped.
    #[must_use]
    pub fn with_inits(klass: &Klass, inits: &[Value]) -> Self {
        let object = Self::new(klass);

        for (field, value) in klass.fields().iter().zip(inits) {
            if let Err(err) = object.set(&field.name, value.clone()) {
                tracing::warn!(
                    klass = %klass.name,
                    field = %field.name,
                    error = %err,
                    "skipping invalid initializer"
                );
            }
        }

        object
    }

    #[must_use]
    pub fn klass(&self) -> &Klass {
        &self.inner.klass
    }

    /// True when this object's klass is `klass` or directly lists it
    /// as a super.
    #[must_use]
    pub fn is_instance_of(&self, klass: &str) -> bool {
        self.inner.klass.name == klass || self.inner.klass.supers.contains(klass)
    }

    /// Names of the fields that have live slots, in declaration order.
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        let slots = self.inner.slots.borrow();
        self.inner
            .klass
            .fields()
            .iter()
            .filter(|f| slots.contains_key(&f.name))
            .map(|f| f.name.clone())
            .collect()
    }

    /// Read one field.
    pub fn get(&self, field: &str) -> Result<Value, ObjectError> {
        let slots = self.inner.slots.borrow();
        let slot = slots.get(field).ok_or_else(|| self.no_such_field(field))?;

        Ok(slot.get())
    }

    /// Write one field. Fails `NoSuchField` on an unknown name and
    /// `InvalidFieldValue` on a type/multiplicity mismatch, leaving
    /// the prior value in place.
    pub fn set(&self, field: &str, value: Value) -> Result<(), ObjectError> {
        let mut slots = self.inner.slots.borrow_mut();
        let slot = slots
            .get_mut(field)
            .ok_or_else(|| self.no_such_field(field))?;

        slot.init(value).map_err(|source| ObjectError::Field {
            klass: self.inner.klass.name.clone(),
            field: field.to_string(),
            source,
        })
    }

    /// Bind an accessor pair to one field of this instance.
    pub fn field(&self, name: &str) -> Result<FieldAccessor, ObjectError> {
        if !self.inner.slots.borrow().contains_key(name) {
            return Err(self.no_such_field(name));
        }

        Ok(FieldAccessor {
            object: self.clone(),
            name: name.to_string(),
        })
    }

    fn no_such_field(&self, field: &str) -> ObjectError {
        ObjectError::NoSuchField {
            klass: self.inner.klass.name.clone(),
            field: field.to_string(),
        }
    }
}

impl PartialEq for MObject {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for MObject {}

// Reference graphs may cycle; print the klass only.
impl fmt::Debug for MObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MObject")
            .field("klass", &self.inner.klass.name)
            .finish_non_exhaustive()
    }
}

///
/// FieldAccessor
///
/// A read/write pair bound to one field of one instance: the explicit
/// replacement for intercepting accessor calls by method name.
///

#[derive(Clone, Debug)]
pub struct FieldAccessor {
    object: MObject,
    name: String,
}

impl FieldAccessor {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get(&self) -> Value {
        self.object
            .get(&self.name)
            .expect("accessor field was resolved at construction")
    }

    pub fn set(&self, value: impl Into<Value>) -> Result<(), ObjectError> {
        self.object.set(&self.name, value.into())
    }
}
