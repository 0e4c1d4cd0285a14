//! # Identity Types
//!
//! Values whose equality is identity, not structure: symbols, callables,
//! and the nominal class tags that mark records as instances of a class or
//! of a compiled schema.
//!
//! Two `ClassTag`s created with the same name are still distinct. This is
//! what lets a nested-schema check reject a structurally identical record
//! produced by a different schema.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::value::Value;

static NEXT_SYMBOL: AtomicU64 = AtomicU64::new(1);

/// A unique symbol with an optional description.
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a fresh symbol. Every call yields a distinct symbol.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed),
            description: Some(Arc::from(description.into())),
        }
    }

    /// Create a fresh symbol without a description.
    pub fn anonymous() -> Self {
        Self {
            id: NEXT_SYMBOL.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(d) => write!(f, "Symbol({d})"),
            None => f.write_str("Symbol()"),
        }
    }
}

type Callable = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shareable callable value.
#[derive(Clone)]
pub struct FunctionValue(Arc<Callable>);

impl FunctionValue {
    pub fn new(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the function with the given arguments.
    pub fn call(&self, args: &[Value]) -> Value {
        (*self.0)(args)
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

/// A nominal type tag.
///
/// Cloning a tag shares its identity; constructing a new one with the same
/// name does not.
#[derive(Clone)]
pub struct ClassTag(Arc<str>);

impl ClassTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::from(name.into()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Identity comparison.
    pub fn same(&self, other: &ClassTag) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ClassTag {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for ClassTag {}

impl fmt::Debug for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassTag({})", self.name())
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique() {
        let a = Symbol::new("x");
        let b = Symbol::new("x");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.description(), Some("x"));
        assert_eq!(Symbol::anonymous().description(), None);
    }

    #[test]
    fn class_tags_compare_by_identity() {
        let money = ClassTag::new("Money");
        let other_money = ClassTag::new("Money");
        assert_eq!(money, money.clone());
        assert_ne!(money, other_money);
        assert_eq!(money.name(), other_money.name());
    }

    #[test]
    fn functions_compare_by_identity() {
        let f = FunctionValue::new(|args| args.first().cloned().unwrap_or(Value::Null));
        let g = FunctionValue::new(|args| args.first().cloned().unwrap_or(Value::Null));
        assert_eq!(f, f.clone());
        assert_ne!(f, g);
        assert_eq!(f.call(&[Value::from(2.0)]), Value::from(2.0));
    }
}
