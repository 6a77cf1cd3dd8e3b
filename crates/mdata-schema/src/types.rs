use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// PrimitiveKind
///
/// The closed registry of primitive kinds the runtime strategy layer
/// knows how to store. Schema-level `Primitive` nodes are an open name
/// set; a primitive name that does not parse into a `PrimitiveKind`
/// has no strategy and surfaces as an unknown-primitive error at
/// object-construction time.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
#[remain::sorted]
pub enum PrimitiveKind {
    Bool,
    Float,
    Int,
    Text,
}

impl PrimitiveKind {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Float | Self::Int)
    }
}
