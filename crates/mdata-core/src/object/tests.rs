use crate::{
    object::{FieldError, MObject, ObjectError},
    value::Value,
};
use mdata_schema::node::{Field, Klass, Schema, TypeRef};
use proptest::prelude::*;

// ---- fixtures -----------------------------------------------------------

fn point_schema() -> Schema {
    Schema::builder()
        .primitive("Int")
        .primitive("Text")
        .klass(
            Klass::builder("Point")
                .field(Field::scalar("x", TypeRef::primitive("Int")))
                .field(Field::scalar("y", TypeRef::primitive("Int")))
                .field(Field::scalar("label", TypeRef::primitive("Text")))
                .build(),
        )
        .klass(
            Klass::builder("Line")
                .field(Field::scalar("start", TypeRef::klass("Point")))
                .field(Field::scalar("end", TypeRef::klass("Point")).optional())
                .field(Field::many("points", TypeRef::klass("Point")).optional())
                .field(Field::many("labels", TypeRef::primitive("Text")).optional())
                .build(),
        )
        .build()
        .unwrap()
}

fn point(schema: &Schema, x: i64, y: i64) -> MObject {
    MObject::with_inits(
        schema.get_klass("Point").unwrap(),
        &[Value::Int(x), Value::Int(y)],
    )
}

// ---- construction -------------------------------------------------------

#[test]
fn fresh_object_holds_zero_values() {
    let schema = point_schema();
    let line = MObject::new(schema.get_klass("Line").unwrap());
    let point = MObject::new(schema.get_klass("Point").unwrap());

    assert_eq!(point.get("x").unwrap(), Value::Int(0));
    assert_eq!(point.get("label").unwrap(), Value::Text(String::new()));
    assert_eq!(line.get("start").unwrap(), Value::Null);
    assert_eq!(line.get("points").unwrap(), Value::List(vec![]));
}

#[test]
fn positional_initializers_follow_field_order() {
    let schema = point_schema();
    let p = point(&schema, 3, 4);

    assert_eq!(p.get("x").unwrap(), Value::Int(3));
    assert_eq!(p.get("y").unwrap(), Value::Int(4));
    // No initializer for 'label': stays at its zero value.
    assert_eq!(p.get("label").unwrap(), Value::Text(String::new()));
}

#[test]
fn extra_initializers_are_ignored() {
    let schema = point_schema();
    let p = MObject::with_inits(
        schema.get_klass("Point").unwrap(),
        &[
            Value::Int(1),
            Value::Int(2),
            Value::Text("origin".into()),
            Value::Int(99),
        ],
    );

    assert_eq!(p.get("x").unwrap(), Value::Int(1));
    assert_eq!(p.get("label").unwrap(), Value::Text("origin".into()));
}

#[test]
fn invalid_initializer_is_skipped_not_fatal() {
    let schema = point_schema();
    let p = MObject::with_inits(
        schema.get_klass("Point").unwrap(),
        &[Value::Text("oops".into()), Value::Int(4)],
    );

    // x kept its zero value, y was still assigned.
    assert_eq!(p.get("x").unwrap(), Value::Int(0));
    assert_eq!(p.get("y").unwrap(), Value::Int(4));
}

#[test]
fn unrecognized_primitive_kind_drops_only_that_slot() {
    let schema = Schema::builder()
        .primitive("Blob")
        .primitive("Text")
        .klass(
            Klass::builder("Attachment")
                .field(Field::scalar("data", TypeRef::primitive("Blob")))
                .field(Field::scalar("name", TypeRef::primitive("Text")))
                .build(),
        )
        .build()
        .unwrap();

    let obj = MObject::new(schema.get_klass("Attachment").unwrap());

    assert_eq!(obj.field_names(), vec!["name".to_string()]);
    assert!(matches!(
        obj.get("data"),
        Err(ObjectError::NoSuchField { .. })
    ));
    assert_eq!(obj.get("name").unwrap(), Value::Text(String::new()));
}

// ---- reads and writes ---------------------------------------------------

#[test]
fn write_then_read_round_trips() {
    let schema = point_schema();
    let p = point(&schema, 3, 4);

    p.set("x", Value::Int(5)).unwrap();
    assert_eq!(p.get("x").unwrap(), Value::Int(5));
}

#[test]
fn incompatible_write_fails_and_keeps_prior_value() {
    let schema = point_schema();
    let p = point(&schema, 3, 4);

    let err = p.set("x", Value::Text("five".into())).unwrap_err();
    assert!(matches!(
        err,
        ObjectError::Field {
            source: FieldError::InvalidFieldValue { .. },
            ..
        }
    ));
    assert_eq!(p.get("x").unwrap(), Value::Int(3));
}

#[test]
fn unknown_field_fails_on_read_and_write() {
    let schema = point_schema();
    let p = point(&schema, 3, 4);

    assert!(matches!(p.get("z"), Err(ObjectError::NoSuchField { .. })));
    assert!(matches!(
        p.set("z", Value::Int(1)),
        Err(ObjectError::NoSuchField { .. })
    ));
}

#[test]
fn reference_fields_accept_matching_klass_only() {
    let schema = point_schema();
    let line = MObject::new(schema.get_klass("Line").unwrap());
    let p = point(&schema, 1, 2);

    line.set("start", Value::Ref(p.clone())).unwrap();
    assert_eq!(line.get("start").unwrap(), Value::Ref(p));

    let other = MObject::new(schema.get_klass("Line").unwrap());
    let err = line.set("start", Value::Ref(other)).unwrap_err();
    assert!(matches!(err, ObjectError::Field { .. }));
}

#[test]
fn null_clears_an_optional_reference_but_not_a_required_one() {
    let schema = point_schema();
    let line = MObject::new(schema.get_klass("Line").unwrap());
    let p = point(&schema, 1, 2);

    line.set("end", Value::Ref(p.clone())).unwrap();
    line.set("end", Value::Null).unwrap();
    assert_eq!(line.get("end").unwrap(), Value::Null);

    line.set("start", Value::Ref(p)).unwrap();
    assert!(line.set("start", Value::Null).is_err());
    assert!(line.get("start").unwrap().as_ref().is_some());
}

#[test]
fn reference_accepts_an_instance_of_a_subklass() {
    let schema = Schema::builder()
        .klass(Klass::builder("Shape").subklass("Circle").build())
        .klass(Klass::builder("Circle").superklass("Shape").build())
        .klass(
            Klass::builder("Canvas")
                .field(Field::scalar("shape", TypeRef::klass("Shape")).optional())
                .build(),
        )
        .build()
        .unwrap();

    let canvas = MObject::new(schema.get_klass("Canvas").unwrap());
    let circle = MObject::new(schema.get_klass("Circle").unwrap());

    canvas.set("shape", Value::Ref(circle)).unwrap();
}

// ---- many fields --------------------------------------------------------

#[test]
fn many_init_replaces_the_whole_sequence() {
    let schema = point_schema();
    let line = MObject::new(schema.get_klass("Line").unwrap());

    line.set(
        "labels",
        Value::List(vec![Value::Text("a".into()), Value::Text("b".into())]),
    )
    .unwrap();
    line.set("labels", Value::List(vec![Value::Text("c".into())]))
        .unwrap();

    assert_eq!(
        line.get("labels").unwrap(),
        Value::List(vec![Value::Text("c".into())])
    );
}

#[test]
fn many_accepts_the_empty_sequence() {
    let schema = point_schema();
    let line = MObject::new(schema.get_klass("Line").unwrap());

    line.set("labels", Value::List(vec![Value::Text("a".into())]))
        .unwrap();
    line.set("labels", Value::List(vec![])).unwrap();

    assert_eq!(line.get("labels").unwrap(), Value::List(vec![]));
}

#[test]
fn many_rejects_scalars_and_mistyped_elements() {
    let schema = point_schema();
    let line = MObject::new(schema.get_klass("Line").unwrap());

    assert!(line.set("labels", Value::Text("a".into())).is_err());

    let err = line
        .set(
            "labels",
            Value::List(vec![Value::Text("a".into()), Value::Int(1)]),
        )
        .unwrap_err();
    assert!(matches!(err, ObjectError::Field { .. }));

    // The failed write left the prior (empty) sequence intact.
    assert_eq!(line.get("labels").unwrap(), Value::List(vec![]));
}

// ---- accessors ----------------------------------------------------------

#[test]
fn field_accessor_reads_and_writes_one_slot() {
    let schema = point_schema();
    let p = point(&schema, 3, 4);

    let x = p.field("x").unwrap();
    assert_eq!(x.get(), Value::Int(3));

    x.set(5i64).unwrap();
    assert_eq!(x.get(), Value::Int(5));
    assert_eq!(p.get("x").unwrap(), Value::Int(5));

    assert!(matches!(
        p.field("missing"),
        Err(ObjectError::NoSuchField { .. })
    ));
}

// ---- properties ---------------------------------------------------------

fn scalar_value() -> impl Strategy<Value = (&'static str, Value)> {
    prop_oneof![
        any::<i64>().prop_map(|v| ("i", Value::Int(v))),
        any::<bool>().prop_map(|v| ("b", Value::Bool(v))),
        ".*".prop_map(|v: String| ("t", Value::Text(v))),
    ]
}

proptest! {
    #[test]
    fn init_then_get_returns_the_value((field, value) in scalar_value()) {
        let schema = Schema::builder()
            .primitive("Bool")
            .primitive("Int")
            .primitive("Text")
            .klass(
                Klass::builder("Mixed")
                    .field(Field::scalar("i", TypeRef::primitive("Int")))
                    .field(Field::scalar("b", TypeRef::primitive("Bool")))
                    .field(Field::scalar("t", TypeRef::primitive("Text")))
                    .build(),
            )
            .build()
            .unwrap();

        let obj = MObject::new(schema.get_klass("Mixed").unwrap());
        obj.set(field, value.clone()).unwrap();
        prop_assert_eq!(obj.get(field).unwrap(), value);
    }
}
