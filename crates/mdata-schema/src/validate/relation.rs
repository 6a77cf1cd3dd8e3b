use crate::{node::Schema, prelude::*};

/// Validate cross-type invariants: type-reference closure, field
/// ownership, inverse resolution and reciprocity, and super/subklass
/// symmetry.
pub fn validate_relations(schema: &Schema, errs: &mut ErrorTree) {
    for klass in schema.klasses() {
        for field in klass.fields() {
            validate_owner(&klass.name, field, errs);
            validate_type_ref(schema, &klass.name, field, errs);
            validate_inverse(schema, &klass.name, field, errs);
        }

        validate_hierarchy(schema, klass, errs);
    }
}

// Field owner must be the declaring klass.
fn validate_owner(klass: &str, field: &Field, errs: &mut ErrorTree) {
    if field.owner != klass {
        err!(
            errs,
            "field '{}' on klass '{klass}' has owner '{}'",
            field.name,
            field.owner
        );
    }
}

// Every type reachable from a field must be a member of the schema.
fn validate_type_ref(schema: &Schema, klass: &str, field: &Field, errs: &mut ErrorTree) {
    let resolved = match &field.ty {
        TypeRef::Primitive(name) => schema.get_primitive(name).is_some(),
        TypeRef::Klass(name) => schema.get_klass(name).is_some(),
    };

    if !resolved {
        let kind = if field.ty.is_primitive() { "primitive" } else { "klass" };
        err!(
            errs,
            "field '{}' on klass '{klass}' references {kind} '{}' which is not in the schema",
            field.name,
            field.ty.name()
        );
    }
}

// An inverse must name an existing field on the field's value klass,
// and that field's own inverse must point back.
fn validate_inverse(schema: &Schema, klass: &str, field: &Field, errs: &mut ErrorTree) {
    let Some(inverse) = &field.inverse else {
        return;
    };

    if field.ty.is_primitive() {
        err!(
            errs,
            "field '{}' on klass '{klass}' declares an inverse but has primitive type '{}'",
            field.name,
            field.ty.name()
        );
        return;
    }

    if inverse.klass != field.ty.name() {
        err!(
            errs,
            "field '{}' on klass '{klass}': inverse names klass '{}' but the field type is '{}'",
            field.name,
            inverse.klass,
            field.ty.name()
        );
        return;
    }

    let Some(target_klass) = schema.get_klass(&inverse.klass) else {
        err!(
            errs,
            "field '{}' on klass '{klass}': inverse klass '{}' is not in the schema",
            field.name,
            inverse.klass
        );
        return;
    };

    let Some(target_field) = target_klass.field(&inverse.field) else {
        err!(
            errs,
            "field '{}' on klass '{klass}': inverse field '{}.{}' does not exist",
            field.name,
            inverse.klass,
            inverse.field
        );
        return;
    };

    let reciprocal = target_field
        .inverse
        .as_ref()
        .is_some_and(|back| back.klass == klass && back.field == field.name);

    if !reciprocal {
        err!(
            errs,
            "field '{}' on klass '{klass}': inverse field '{}.{}' does not point back",
            field.name,
            inverse.klass,
            inverse.field
        );
    }
}

// supers/subklasses must resolve to klasses and be symmetric.
fn validate_hierarchy(schema: &Schema, klass: &Klass, errs: &mut ErrorTree) {
    for name in &klass.supers {
        match schema.get_klass(name) {
            Some(superklass) if superklass.subklasses.contains(&klass.name) => {}
            Some(_) => {
                err!(
                    errs,
                    "klass '{}' lists super '{name}' but '{name}' does not list it as a subklass",
                    klass.name
                );
            }
            None => {
                err!(errs, "klass '{}' lists unknown super '{name}'", klass.name);
            }
        }
    }

    for name in &klass.subklasses {
        match schema.get_klass(name) {
            Some(subklass) if subklass.supers.contains(&klass.name) => {}
            Some(_) => {
                err!(
                    errs,
                    "klass '{}' lists subklass '{name}' but '{name}' does not list it as a super",
                    klass.name
                );
            }
            None => {
                err!(
                    errs,
                    "klass '{}' lists unknown subklass '{name}'",
                    klass.name
                );
            }
        }
    }
}
