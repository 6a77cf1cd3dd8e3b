//! The bootstrap metamodel: a schema describing what a schema is.
//!
//! Hand-built from the node constructors, never through the factory —
//! deriving it would need an already-existing schema. Published once
//! per process and shared read-only.

use crate::node::{Field, Klass, Schema, TypeRef};
use std::sync::LazyLock;

/// Klass names of the bootstrap metamodel.
pub const TYPE: &str = "Type";
pub const PRIMITIVE: &str = "Primitive";
pub const KLASS: &str = "Klass";
pub const FIELD: &str = "Field";
pub const SCHEMA: &str = "Schema";

/// Primitive names the metamodel's own fields use.
pub const TEXT: &str = "Text";
pub const BOOL: &str = "Bool";

static SCHEMA_SCHEMA: LazyLock<Schema> =
    LazyLock::new(|| build().expect("bootstrap metamodel must validate"));

/// The schema that describes the metamodel itself.
pub fn schema_schema() -> &'static Schema {
    &SCHEMA_SCHEMA
}

fn build() -> Result<Schema, crate::Error> {
    Schema::builder()
        .primitive(TEXT)
        .primitive(BOOL)
        .klass(
            // Type: anything that can appear as a field's value type.
            // Its only immediate specializations are Klass and Primitive.
            Klass::builder(TYPE)
                .field(Field::scalar("name", TypeRef::primitive(TEXT)))
                .field(
                    Field::scalar("schema", TypeRef::klass(SCHEMA))
                        .with_inverse(SCHEMA, "types"),
                )
                .subklass(KLASS)
                .subklass(PRIMITIVE)
                .build(),
        )
        .klass(Klass::builder(PRIMITIVE).superklass(TYPE).build())
        .klass(
            Klass::builder(KLASS)
                .field(Field::scalar("name", TypeRef::primitive(TEXT)))
                .field(
                    Field::many("fields", TypeRef::klass(FIELD))
                        .optional()
                        .with_inverse(FIELD, "owner"),
                )
                .field(
                    Field::many("supers", TypeRef::klass(KLASS))
                        .optional()
                        .with_inverse(KLASS, "subklasses"),
                )
                .field(
                    Field::many("subklasses", TypeRef::klass(KLASS))
                        .optional()
                        .with_inverse(KLASS, "supers"),
                )
                .field(
                    Field::scalar("schema", TypeRef::klass(SCHEMA))
                        .with_inverse(SCHEMA, "klasses"),
                )
                .superklass(TYPE)
                .build(),
        )
        .klass(
            Klass::builder(FIELD)
                .field(Field::scalar("name", TypeRef::primitive(TEXT)))
                .field(Field::scalar("type", TypeRef::klass(TYPE)))
                .field(Field::scalar("many", TypeRef::primitive(BOOL)))
                .field(Field::scalar("optional", TypeRef::primitive(BOOL)))
                .field(Field::scalar("inverse", TypeRef::klass(FIELD)).optional())
                .field(
                    Field::scalar("owner", TypeRef::klass(KLASS))
                        .with_inverse(KLASS, "fields"),
                )
                .build(),
        )
        .klass(
            Klass::builder(SCHEMA)
                .field(
                    Field::many("types", TypeRef::klass(TYPE))
                        .optional()
                        .with_inverse(TYPE, "schema"),
                )
                .field(
                    Field::many("klasses", TypeRef::klass(KLASS))
                        .optional()
                        .with_inverse(KLASS, "schema"),
                )
                .build(),
        )
        .build()
}
