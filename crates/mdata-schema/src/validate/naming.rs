use crate::{MAX_FIELD_NAME_LEN, MAX_TYPE_NAME_LEN, node::Schema, prelude::*};
use std::collections::BTreeSet;

/// Validate type and field identifiers: charset, length, uniqueness of
/// field names within each klass. Type-name uniqueness is guaranteed by
/// the schema's keyed type set and is not re-checked here.
pub fn validate_naming(schema: &Schema, errs: &mut ErrorTree) {
    for def in schema.types() {
        check_ident(def.name(), MAX_TYPE_NAME_LEN, "type", errs);
    }

    for klass in schema.klasses() {
        let mut seen = BTreeSet::new();

        for field in klass.fields() {
            check_ident(&field.name, MAX_FIELD_NAME_LEN, "field", errs);

            if !seen.insert(field.name.as_str()) {
                err!(
                    errs,
                    "duplicate field name '{}' on klass '{}'",
                    field.name,
                    klass.name
                );
            }
        }
    }
}

fn check_ident(name: &str, max_len: usize, what: &str, errs: &mut ErrorTree) {
    if name.is_empty() {
        err!(errs, "empty {what} name");
        return;
    }

    if name.len() > max_len {
        err!(errs, "{what} name '{name}' exceeds {max_len} characters");
    }

    let mut chars = name.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_alpha || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        err!(
            errs,
            "{what} name '{name}' must start with a letter and contain only letters, digits, and underscores"
        );
    }
}
