//! # Primitive Kinds
//!
//! The closed set of primitive kind tokens a property may be declared with.
//! `Null` and `Undefined` are distinct: `Null` accepts the explicit
//! [`Value::Null`](crate::Value::Null) marker, `Undefined` accepts only an
//! absent value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownKind;
use crate::value::Value;

/// A primitive runtime kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Boolean,
    String,
    Number,
    Function,
    Symbol,
    /// Absent / unset.
    Undefined,
    /// The explicit null marker.
    Null,
    /// An ordered, heterogeneous sequence. Keyed records never match.
    Array,
}

/// Every primitive kind, in token order.
pub const ALL_KINDS: [Kind; 8] = [
    Kind::Boolean,
    Kind::String,
    Kind::Number,
    Kind::Function,
    Kind::Symbol,
    Kind::Undefined,
    Kind::Null,
    Kind::Array,
];

impl Kind {
    /// The lowercase token used in schema documents and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Function => "function",
            Kind::Symbol => "symbol",
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Array => "array",
        }
    }

    /// Whether `value` is of this kind. `None` is the absent value.
    ///
    /// Matching is exact: no coercion between kinds is ever attempted.
    pub fn matches(&self, value: Option<&Value>) -> bool {
        match (self, value) {
            (Kind::Undefined, None) => true,
            (_, None) => false,
            (Kind::Boolean, Some(Value::Bool(_))) => true,
            (Kind::String, Some(Value::String(_))) => true,
            (Kind::Number, Some(Value::Number(_))) => true,
            (Kind::Function, Some(Value::Function(_))) => true,
            (Kind::Symbol, Some(Value::Symbol(_))) => true,
            (Kind::Null, Some(Value::Null)) => true,
            (Kind::Array, Some(Value::Array(_))) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
