//! # Type Predicate Resolver
//!
//! Maps a normalized declaration to a predicate over a candidate value.
//! Always returns a boolean and never has side effects, so union members
//! can be tried left to right without the order changing the result.

use std::fmt;

use typeshape_core::{ClassTag, Kind, Value};

/// A declaration with its default expressions stripped, ready to test values.
#[derive(Debug, Clone)]
pub enum ResolvedType {
    Primitive(Kind),
    /// Nested schemas and custom classes alike: identity of the tag.
    Tagged(ClassTag),
    Union(Vec<ResolvedType>),
}

impl ResolvedType {
    /// Whether `value` satisfies this type. `None` is the absent value.
    pub fn accepts(&self, value: Option<&Value>) -> bool {
        is_valid(self, value)
    }

    /// Whether an absent value satisfies this type.
    pub fn accepts_absence(&self) -> bool {
        is_valid(self, None)
    }
}

/// Evaluate `declaration` against `value`.
pub fn is_valid(declaration: &ResolvedType, value: Option<&Value>) -> bool {
    match declaration {
        ResolvedType::Primitive(kind) => kind.matches(value),
        ResolvedType::Tagged(tag) => value.is_some_and(|v| v.is_tagged(tag)),
        ResolvedType::Union(members) => members.iter().any(|m| is_valid(m, value)),
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedType::Primitive(kind) => write!(f, "{kind}"),
            ResolvedType::Tagged(tag) => write!(f, "{tag}"),
            ResolvedType::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
        }
    }
}
