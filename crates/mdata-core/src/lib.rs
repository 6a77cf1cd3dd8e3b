//! Runtime for schema-described managed objects: values, per-field
//! storage strategies, the managed-object runtime, the factory layer,
//! and the observer extension.

pub mod factory;
pub mod object;
pub mod obs;
pub mod record;
pub mod value;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        factory::{BasicBuilder, Factory, FactoryError, ObjectBuilder},
        object::{FieldAccessor, FieldError, MObject, ObjectError},
        obs::{Observable, ObservableBuilder, Observer},
        value::Value,
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Factory(#[from] factory::FactoryError),

    #[error(transparent)]
    Object(#[from] object::ObjectError),

    #[error(transparent)]
    Record(#[from] record::RecordError),
}
