//! # Dynamic Values
//!
//! The untyped input model that schemas shape into instances. A `Value` is
//! what parsed JSON (or a hand-built record) looks like before validation.
//!
//! There is no `Undefined` variant. An absent value is `None` at the lookup
//! site: a key missing from a [`Record`] is the absent value.

use std::collections::BTreeMap;

use crate::identity::{ClassTag, FunctionValue, Symbol};

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
    Function(FunctionValue),
    Array(Vec<Value>),
    Object(Record),
}

impl Value {
    /// Runtime kind name used in diagnostics.
    ///
    /// Tagged records report their class name.
    pub fn kind_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Array(_) => "array",
            Value::Object(record) => match record.class() {
                Some(tag) => tag.name(),
                None => "object",
            },
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Whether this value is a record tagged with exactly `tag`.
    pub fn is_tagged(&self, tag: &ClassTag) -> bool {
        self.as_record()
            .and_then(Record::class)
            .is_some_and(|own| own.same(tag))
    }
}

/// Displays a possibly-absent value's kind.
pub fn kind_name_of(value: Option<&Value>) -> &str {
    value.map_or("undefined", Value::kind_name)
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<FunctionValue> for Value {
    fn from(f: FunctionValue) -> Self {
        Value::Function(f)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Object(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

/// A keyed record, optionally tagged with a class.
///
/// Untagged records are plain input maps. Records produced by a schema
/// builder, or by a custom class constructor, carry that class's tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    class: Option<ClassTag>,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// An empty, untagged record.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty record tagged as an instance of `class`.
    pub fn tagged(class: ClassTag) -> Self {
        Self {
            class: Some(class),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn class(&self) -> Option<&ClassTag> {
        self.class.as_ref()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Consume the record, returning its tag and fields.
    pub fn into_parts(self) -> (Option<ClassTag>, BTreeMap<String, Value>) {
        (self.class, self.fields)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            class: None,
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::from(true).kind_name(), "boolean");
        assert_eq!(Value::from(1.5).kind_name(), "number");
        assert_eq!(Value::from("x").kind_name(), "string");
        assert_eq!(Value::from(vec![1, 2]).kind_name(), "array");
        assert_eq!(Value::from(Record::new()).kind_name(), "object");
        assert_eq!(kind_name_of(None), "undefined");
    }

    #[test]
    fn tagged_records_report_class_name() {
        let money = ClassTag::new("Money");
        let value = Value::from(Record::tagged(money.clone()).with("value", 6.99));
        assert_eq!(value.kind_name(), "Money");
        assert!(value.is_tagged(&money));
        assert!(!value.is_tagged(&ClassTag::new("Money")));
        assert!(!Value::from(Record::new()).is_tagged(&money));
    }

    #[test]
    fn record_accessors() {
        let mut record: Record = [("price", 9.99)].into_iter().collect();
        assert_eq!(record.get("price").and_then(Value::as_f64), Some(9.99));
        assert!(record.get("missing").is_none());
        record.insert("topping", "cheese");
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["price", "topping"]);
        assert_eq!(record.remove("price"), Some(Value::Number(9.99)));
        assert_eq!(record.len(), 1);
        assert!(record.class().is_none());
    }
}
