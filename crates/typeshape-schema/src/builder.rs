//! # Instance Builder
//!
//! A compiled schema's constructor. Each build runs four passes in a fixed
//! order, and the order is part of the contract:
//!
//! 1. **Defaults.** Every property the input omits and that carries a
//!    default expression gets the computed value.
//! 2. **Assignment.** Declared properties are copied from the input (or
//!    the default). Undeclared input fields are never copied.
//! 3. **Initializer.** The custom initializer, if any, runs once over the
//!    draft with the raw input in hand.
//! 4. **Validation.** Properties are checked in declaration order. The
//!    first failure aborts the build: an absent value that the declaration
//!    does not accept is a missing property, any other mismatch is an
//!    invalid type.
//!
//! A returned [`Instance`] always satisfies its schema.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use typeshape_core::{kind_name_of, ClassTag, ConversionError, Record, Value};

use crate::compile::{CompiledSchema, Property};
use crate::draft::Draft;
use crate::error::BuildError;

/// Reusable constructor for one schema. Cheap to clone; clones share the
/// schema and its tag.
#[derive(Clone)]
pub struct Builder(Arc<CompiledSchema>);

impl Builder {
    pub(crate) fn from_compiled(schema: CompiledSchema) -> Self {
        Self(Arc::new(schema))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The tag every instance of this schema carries.
    pub fn class(&self) -> &ClassTag {
        &self.0.tag
    }

    /// Normalized properties, in declaration order.
    pub fn properties(&self) -> &[Property] {
        &self.0.properties
    }

    pub fn has_initializer(&self) -> bool {
        self.0.initializer.is_some()
    }

    /// Whether `value` is an instance built by this builder.
    pub fn is_instance(&self, value: &Value) -> bool {
        value.is_tagged(&self.0.tag)
    }

    /// Build with no input at all.
    pub fn build_empty(&self) -> Result<Instance, BuildError> {
        self.build(&Record::new())
    }

    /// Build from an arbitrary value, which must be a record.
    pub fn build_value(&self, input: &Value) -> Result<Instance, BuildError> {
        match input {
            Value::Object(record) => self.build(record),
            other => Err(BuildError::InputNotRecord {
                schema: self.0.name.clone(),
                actual: other.kind_name().to_string(),
            }),
        }
    }

    /// Build from parsed JSON, which must be an object.
    pub fn build_json(&self, input: &serde_json::Value) -> Result<Instance, BuildError> {
        self.build_value(&Value::from(input.clone()))
    }

    /// Build an instance from `input`.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MissingRequiredProperty`] for the first declared
    ///   property left absent whose declaration does not accept absence.
    /// - [`BuildError::InvalidPropertyType`] for the first declared property
    ///   holding a value of the wrong kind.
    /// - [`BuildError::Initializer`] if the custom initializer fails.
    pub fn build(&self, input: &Record) -> Result<Instance, BuildError> {
        let schema = &*self.0;

        let mut values = BTreeMap::new();
        for property in &schema.properties {
            let value = match input.get(property.name()) {
                Some(supplied) => Some(supplied.clone()),
                None => property.default().map(|d| d.compute(input)),
            };
            if let Some(value) = value {
                values.insert(property.name().to_string(), value);
            }
        }

        if let Some(initializer) = &schema.initializer {
            let mut draft = Draft::new(schema, values);
            (**initializer)(&mut draft, input).map_err(|source| {
                tracing::debug!(schema = %schema.name, error = %source, "initializer failed");
                BuildError::Initializer {
                    schema: schema.name.clone(),
                    source,
                }
            })?;
            values = draft.into_values();
        }

        for property in &schema.properties {
            let value = values.get(property.name());
            if property.accepts().accepts(value) {
                continue;
            }
            let err = match value {
                None => BuildError::MissingRequiredProperty {
                    schema: schema.name.clone(),
                    property: property.name().to_string(),
                },
                Some(_) => BuildError::InvalidPropertyType {
                    schema: schema.name.clone(),
                    property: property.name().to_string(),
                    expected: property.accepts().to_string(),
                    actual: kind_name_of(value).to_string(),
                },
            };
            tracing::debug!(schema = %schema.name, error = %err, "input rejected");
            return Err(err);
        }

        let mut record = Record::tagged(schema.tag.clone());
        for (name, value) in values {
            record.insert(name, value);
        }
        tracing::trace!(schema = %schema.name, "instance built");
        Ok(Instance {
            class: schema.tag.clone(),
            record,
        })
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("name", &self.0.name)
            .field("properties", &self.0.properties)
            .field("initializer", &self.0.initializer.is_some())
            .finish()
    }
}

/// A validated value object. Only a [`Builder`] can produce one.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class: ClassTag,
    record: Record,
}

impl Instance {
    /// A declared property's value, `None` if absent.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.record.get(property)
    }

    /// The instance's fields as a tagged record.
    pub fn fields(&self) -> &Record {
        &self.record
    }

    pub fn class(&self) -> &ClassTag {
        &self.class
    }

    pub fn schema_name(&self) -> &str {
        self.class().name()
    }

    /// Whether this instance was built by `builder`.
    pub fn is_instance_of(&self, builder: &Builder) -> bool {
        self.class().same(builder.class())
    }

    pub fn into_record(self) -> Record {
        self.record
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.record)
    }

    pub fn to_json(&self) -> Result<serde_json::Value, ConversionError> {
        self.record.to_json()
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        instance.into_value()
    }
}
