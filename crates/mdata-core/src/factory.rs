//! The construction layer: resolve a klass by name in a schema and
//! delegate object creation to a pluggable builder.
//!
//! The builder is the only specialization point; klass resolution and
//! schema binding are fixed, shared algorithms. A factory's
//! configuration is immutable once constructed.

use crate::{object::MObject, value::Value};
use mdata_schema::node::{Klass, Schema};
use std::rc::Rc;
use thiserror::Error as ThisError;

///
/// FactoryError
///

#[derive(Debug, ThisError)]
pub enum FactoryError {
    #[error("no klass named '{name}' in the schema")]
    KlassResolution { name: String },
}

///
/// ObjectBuilder
///
/// How the factory turns a resolved klass plus initializers into an
/// instance. Implementations decide the produced handle type; they do
/// not participate in resolution.
///

pub trait ObjectBuilder {
    type Object;

    fn create(&self, klass: &Klass, inits: &[Value]) -> Self::Object;
}

///
/// BasicBuilder
///

#[derive(Clone, Copy, Debug, Default)]
pub struct BasicBuilder;

impl ObjectBuilder for BasicBuilder {
    type Object = MObject;

    fn create(&self, klass: &Klass, inits: &[Value]) -> MObject {
        MObject::with_inits(klass, inits)
    }
}

///
/// Factory
///

pub struct Factory<B: ObjectBuilder = BasicBuilder> {
    schema: Rc<Schema>,
    builder: B,
}

impl Factory<BasicBuilder> {
    #[must_use]
    pub const fn basic(schema: Rc<Schema>) -> Self {
        Self::new(schema, BasicBuilder)
    }
}

impl<B: ObjectBuilder> Factory<B> {
    #[must_use]
    pub const fn new(schema: Rc<Schema>, builder: B) -> Self {
        Self { schema, builder }
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Resolve the klass named `target` and build an instance bound to
    /// it. Resolution is an exact lookup in the schema's type set;
    /// a miss is fatal to the call.
    pub fn build(&self, target: &str, inits: &[Value]) -> Result<B::Object, FactoryError> {
        let klass = self
            .schema
            .get_klass(target)
            .ok_or_else(|| FactoryError::KlassResolution {
                name: target.to_string(),
            })?;

        Ok(self.builder.create(klass, inits))
    }
}
