use crate::prelude::*;
use std::collections::BTreeSet;

///
/// Klass
///
/// Describes one kind of managed object: its fields and its place in
/// the type hierarchy. `supers`/`subklasses` are mutual bookkeeping by
/// name and may reference each other; the instantiation graph never
/// cycles because instances hold values, not definitions.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Klass {
    pub name: String,
    pub fields: FieldList,
    pub supers: BTreeSet<String>,
    pub subklasses: BTreeSet<String>,
}

impl Klass {
    #[must_use]
    pub fn builder(name: impl Into<String>) -> KlassBuilder {
        KlassBuilder {
            name: name.into(),
            fields: Vec::new(),
            supers: BTreeSet::new(),
            subklasses: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Declared fields, in declaration order. Idempotent and
    /// side-effect-free: repeated calls see the same structure.
    #[must_use]
    pub const fn fields(&self) -> &FieldList {
        &self.fields
    }
}

///
/// KlassBuilder
///

pub struct KlassBuilder {
    name: String,
    fields: Vec<Field>,
    supers: BTreeSet<String>,
    subklasses: BTreeSet<String>,
}

impl KlassBuilder {
    /// Add a field, stamping this klass as its owner.
    #[must_use]
    pub fn field(mut self, mut field: Field) -> Self {
        field.owner.clone_from(&self.name);
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn superklass(mut self, name: impl Into<String>) -> Self {
        self.supers.insert(name.into());
        self
    }

    #[must_use]
    pub fn subklass(mut self, name: impl Into<String>) -> Self {
        self.subklasses.insert(name.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Klass {
        Klass {
            name: self.name,
            fields: FieldList::new(self.fields),
            supers: self.supers,
            subklasses: self.subklasses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> Klass {
        Klass::builder("Point")
            .field(Field::scalar("x", TypeRef::primitive("Int")))
            .field(Field::scalar("y", TypeRef::primitive("Int")))
            .build()
    }

    #[test]
    fn builder_stamps_field_owner() {
        let klass = point();
        for field in klass.fields() {
            assert_eq!(field.owner, "Point");
        }
    }

    #[test]
    fn fields_are_idempotent_and_structurally_equal() {
        let klass = point();
        assert_eq!(klass.fields(), klass.fields());

        // Two independently built klasses describing the same shape
        // compare equal.
        assert_eq!(point(), point());
    }
}
