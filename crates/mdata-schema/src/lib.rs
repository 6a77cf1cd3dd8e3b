//! Metamodel for schema-described managed objects: the node vocabulary
//! (`Schema`, `Klass`, `Field`, `TypeRef`, `Primitive`), the hand-built
//! bootstrap metamodel that describes itself, and schema validation.

pub mod boot;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for type (klass/primitive) schema identifiers.
pub const MAX_TYPE_NAME_LEN: usize = 64;

/// Maximum length for field schema identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::PrimitiveKind,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}
