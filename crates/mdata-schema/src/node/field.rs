use crate::prelude::*;

///
/// TypeRef
///
/// A by-name reference to a type in the owning schema. Nodes never own
/// the types they point at; the relation validation pass guarantees
/// every reference resolves inside the schema's type set.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TypeRef {
    Klass(String),
    Primitive(String),
}

impl TypeRef {
    #[must_use]
    pub fn klass(name: impl Into<String>) -> Self {
        Self::Klass(name.into())
    }

    #[must_use]
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Klass(name) | Self::Primitive(name) => name,
        }
    }

    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }
}

///
/// InverseRef
///
/// Explicit back-reference to a field on the related klass. A field
/// with no inverse carries `None` instead of a null-object sentinel.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct InverseRef {
    pub klass: String,
    pub field: String,
}

impl InverseRef {
    #[must_use]
    pub fn new(klass: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            klass: klass.into(),
            field: field.into(),
        }
    }
}

///
/// Field
///
/// One named slot on a klass. Constructed at klass-definition time and
/// immutable afterwards; `owner` is stamped by the klass builder.
///
/// Equality covers name, owner, multiplicity, optionality, and inverse.
/// The value type is owned and compared by the schema, not as part of
/// field identity.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
    pub many: bool,
    pub optional: bool,
    pub inverse: Option<InverseRef>,
    pub owner: String,
}

impl Field {
    /// A single-valued, required field.
    #[must_use]
    pub fn scalar(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            many: false,
            optional: false,
            inverse: None,
            owner: String::new(),
        }
    }

    /// An ordered multi-valued field.
    #[must_use]
    pub fn many(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            many: true,
            ..Self::scalar(name, ty)
        }
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn with_inverse(mut self, klass: impl Into<String>, field: impl Into<String>) -> Self {
        self.inverse = Some(InverseRef::new(klass, field));
        self
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.owner == other.owner
            && self.many == other.many
            && self.optional == other.optional
            && self.inverse == other.inverse
    }
}

impl Eq for Field {}

///
/// FieldList
///
/// Ordered field set with unique names; iteration order is the
/// positional-initializer order for managed objects.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_equality_ignores_the_value_type() {
        let a = Field::scalar("x", TypeRef::primitive("Int"));
        let b = Field::scalar("x", TypeRef::primitive("Text"));
        assert_eq!(a, b);

        let c = Field::scalar("x", TypeRef::primitive("Int")).optional();
        assert_ne!(a, c);

        let d = Field::many("x", TypeRef::primitive("Int"));
        assert_ne!(a, d);
    }

    #[test]
    fn field_equality_covers_owner_and_inverse() {
        let mut a = Field::scalar("schema", TypeRef::klass("Schema"));
        let mut b = a.clone();
        assert_eq!(a, b);

        a.owner = "Type".to_string();
        assert_ne!(a, b);

        b.owner = "Type".to_string();
        b = b.with_inverse("Schema", "types");
        assert_ne!(a, b);
    }

    #[test]
    fn field_list_preserves_declaration_order() {
        let list = FieldList::new(vec![
            Field::scalar("x", TypeRef::primitive("Int")),
            Field::scalar("y", TypeRef::primitive("Int")),
        ]);

        assert_eq!(list.names(), vec!["x", "y"]);
        assert!(list.get("y").is_some());
        assert!(list.get("z").is_none());
    }
}
