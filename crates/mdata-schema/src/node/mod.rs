mod field;
mod klass;
mod primitive;
mod schema;

pub use field::{Field, FieldList, InverseRef, TypeRef};
pub use klass::{Klass, KlassBuilder};
pub use primitive::Primitive;
pub use schema::{Schema, SchemaBuilder, TypeDef};
