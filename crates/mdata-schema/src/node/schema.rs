use crate::{Error, err, prelude::*, validate::validate_schema};
use std::collections::BTreeMap;

///
/// TypeDef
///
/// A member of a schema's type set: a klass or a primitive.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TypeDef {
    Klass(Klass),
    Primitive(Primitive),
}

impl TypeDef {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Klass(klass) => &klass.name,
            Self::Primitive(primitive) => &primitive.name,
        }
    }

    #[must_use]
    pub const fn as_klass(&self) -> Option<&Klass> {
        match self {
            Self::Klass(klass) => Some(klass),
            Self::Primitive(_) => None,
        }
    }

    #[must_use]
    pub const fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Self::Primitive(primitive) => Some(primitive),
            Self::Klass(_) => None,
        }
    }
}

///
/// Schema
///
/// The closed universe of klasses and primitives for one modeling
/// domain, keyed by name. Published schemas are read-only; share them
/// freely across factories and instances.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Schema {
    types: BTreeMap<String, TypeDef>,
}

impl Schema {
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    #[must_use]
    pub fn get_klass(&self, name: &str) -> Option<&Klass> {
        self.types.get(name).and_then(TypeDef::as_klass)
    }

    #[must_use]
    pub fn get_primitive(&self, name: &str) -> Option<&Primitive> {
        self.types.get(name).and_then(TypeDef::as_primitive)
    }

    #[must_use]
    pub fn contains_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    pub fn klasses(&self) -> impl Iterator<Item = &Klass> {
        self.types.values().filter_map(TypeDef::as_klass)
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.types.values().filter_map(TypeDef::as_primitive)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

///
/// SchemaBuilder
///
/// Accumulates type definitions and validates the whole schema on
/// `build`. Duplicate names are rejected rather than tie-broken, which
/// keeps klass resolution in the factory an exact lookup.
///

#[derive(Default)]
pub struct SchemaBuilder {
    types: BTreeMap<String, TypeDef>,
    duplicates: Vec<String>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn primitive(self, name: impl Into<String>) -> Self {
        self.insert(TypeDef::Primitive(Primitive::new(name)))
    }

    #[must_use]
    pub fn klass(self, klass: Klass) -> Self {
        self.insert(TypeDef::Klass(klass))
    }

    fn insert(mut self, def: TypeDef) -> Self {
        let name = def.name().to_string();
        if self.types.insert(name.clone(), def).is_some() {
            self.duplicates.push(name);
        }
        self
    }

    /// Validate and publish the schema.
    pub fn build(self) -> Result<Schema, Error> {
        let mut errs = ErrorTree::new();
        for name in &self.duplicates {
            err!(errs, "duplicate type name '{name}' in schema");
        }

        let schema = Schema { types: self.types };
        if let Err(tree) = validate_schema(&schema) {
            for msg in tree.errors() {
                errs.add(msg);
            }
        }

        errs.result().map_err(Error::Validation)?;

        Ok(schema)
    }
}
