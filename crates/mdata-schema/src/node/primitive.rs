use crate::prelude::*;

///
/// Primitive
///
/// A terminal type with no internal structure, owned by the schema
/// that declares it. The name set is open: whether a primitive has a
/// runtime representation is decided by the strategy layer, not here.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Primitive {
    pub name: String,
}

impl Primitive {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
