//! ## Crate layout
//! - `core`: runtime values, field slots, managed objects, factories,
//!   and the observer extension.
//! - `schema`: the metamodel nodes, the bootstrap metamodel, and
//!   schema validation.
//!
//! The `prelude` module covers the surface most embedding code needs.

pub use mdata_core as core;
pub use mdata_schema as schema;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        factory::{BasicBuilder, Factory, FactoryError, ObjectBuilder},
        object::{FieldAccessor, FieldError, MObject, ObjectError},
        obs::{Observable, ObservableBuilder, Observer},
        record::Record,
        value::Value,
    };
    pub use crate::schema::{
        boot,
        node::{Field, FieldList, InverseRef, Klass, Primitive, Schema, TypeRef},
        types::PrimitiveKind,
    };
}
