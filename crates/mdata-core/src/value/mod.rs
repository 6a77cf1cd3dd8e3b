
use crate::object::MObject;
use mdata_schema::types::PrimitiveKind;

///
/// Value
///
/// The runtime value of one field.
///
/// Null → a reference field is unset.
/// List → many-cardinality transport; insertion order is preserved.
///

#[derive(Clone, Debug)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    /// Ordered list of values for many-cardinality fields.
    List(Vec<Self>),
    Null,
    /// A reference to another managed object. Equality is identity,
    /// not structure.
    Ref(MObject),
    Text(String),
}

impl Value {
    /// The zero value of a primitive kind: false / 0.0 / 0 / "".
    #[must_use]
    pub const fn zero(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Bool => Self::Bool(false),
            PrimitiveKind::Float => Self::Float(0.0),
            PrimitiveKind::Int => Self::Int(0),
            PrimitiveKind::Text => Self::Text(String::new()),
        }
    }

    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Float(_) => "Float",
            Self::Int(_) => "Int",
            Self::List(_) => "List",
            Self::Null => "Null",
            Self::Ref(_) => "Ref",
            Self::Text(_) => "Text",
        }
    }

    #[must_use]
    pub const fn matches_primitive(&self, kind: PrimitiveKind) -> bool {
        matches!(
            (self, kind),
            (Self::Bool(_), PrimitiveKind::Bool)
                | (Self::Float(_), PrimitiveKind::Float)
                | (Self::Int(_), PrimitiveKind::Int)
                | (Self::Text(_), PrimitiveKind::Text)
        )
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_ref(&self) -> Option<&MObject> {
        match self {
            Self::Ref(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Ref(a), Self::Ref(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl From<MObject> for Value {
    fn from(v: MObject) -> Self {
        Self::Ref(v)
    }
}
