//! # Initializer Context
//!
//! The in-progress instance a custom initializer works on. It holds exactly
//! the declared properties that currently have a value; there is no way to
//! add a property the schema does not declare.

use std::collections::BTreeMap;

use typeshape_core::Value;

use crate::compile::CompiledSchema;
use crate::error::InitError;

/// An instance under construction, before validation.
pub struct Draft<'a> {
    schema: &'a CompiledSchema,
    values: BTreeMap<String, Value>,
}

impl<'a> Draft<'a> {
    pub(crate) fn new(schema: &'a CompiledSchema, values: BTreeMap<String, Value>) -> Self {
        Self { schema, values }
    }

    pub(crate) fn into_values(self) -> BTreeMap<String, Value> {
        self.values
    }

    pub fn schema_name(&self) -> &str {
        &self.schema.name
    }

    /// Current value of a declared property, `None` if absent.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.values.get(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.values.contains_key(property)
    }

    /// Assign a declared property, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`InitError::UndeclaredProperty`] if the schema does not declare it.
    pub fn set(
        &mut self,
        property: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, InitError> {
        if !self.schema.declares(property) {
            return Err(InitError::UndeclaredProperty(property.to_string()));
        }
        Ok(self.values.insert(property.to_string(), value.into()))
    }

    /// Assign only if the property is still absent. Returns whether the
    /// value was assigned.
    pub fn set_if_absent(
        &mut self,
        property: &str,
        value: impl Into<Value>,
    ) -> Result<bool, InitError> {
        if self.contains(property) {
            return Ok(false);
        }
        self.set(property, value)?;
        Ok(true)
    }

    /// Unset a property. It is then absent for validation.
    pub fn remove(&mut self, property: &str) -> Option<Value> {
        self.values.remove(property)
    }
}
