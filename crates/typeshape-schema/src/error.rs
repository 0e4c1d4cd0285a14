//! # Error Types
//!
//! Construction failures are exactly two classes, both fatal to the build
//! call: a required property with no value, and a value of the wrong kind.
//! Everything else here is rejected before any instance is built (bad
//! definitions, unreadable documents) or raised by user code in a custom
//! initializer.

use thiserror::Error;

/// A schema definition was rejected at compile time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// The same property name was declared twice.
    #[error("schema '{schema}' declares property '{property}' more than once")]
    DuplicateProperty { schema: String, property: String },

    /// A union with no members can never be satisfied.
    #[error("property '{property}' of schema '{schema}' declares an empty union")]
    EmptyUnion { schema: String, property: String },

    /// More than one member of a declaration carries a default expression.
    #[error(
        "property '{property}' of schema '{schema}' declares {count} default expressions; at most one is allowed"
    )]
    ConflictingDefaults {
        schema: String,
        property: String,
        count: usize,
    },
}

/// A custom initializer failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// The initializer tried to set a property the schema does not declare.
    #[error("property '{0}' is not declared by the schema")]
    UndeclaredProperty(String),

    /// The initializer rejected the input.
    #[error("{0}")]
    Rejected(String),
}

/// Building an instance failed. No partial instance is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A declared property has no value and its declaration does not
    /// accept absence.
    #[error("Required property {property} missing.")]
    MissingRequiredProperty { schema: String, property: String },

    /// A declared property holds a value no accepted kind matches.
    #[error("Value for {property} has an invalid type. Expected {expected}, got {actual}.")]
    InvalidPropertyType {
        schema: String,
        property: String,
        /// Accepted kinds, e.g. `string | null`.
        expected: String,
        /// Runtime kind of the offending value.
        actual: String,
    },

    /// The custom initializer returned an error.
    #[error("initializer of schema '{schema}' failed: {source}")]
    Initializer {
        schema: String,
        #[source]
        source: InitError,
    },

    /// The input was not a keyed record.
    #[error("input to schema '{schema}' must be an object, got {actual}")]
    InputNotRecord { schema: String, actual: String },
}

impl BuildError {
    /// The property this error names, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            BuildError::MissingRequiredProperty { property, .. }
            | BuildError::InvalidPropertyType { property, .. } => Some(property),
            BuildError::Initializer { .. } | BuildError::InputNotRecord { .. } => None,
        }
    }

    /// The schema that rejected the input.
    pub fn schema(&self) -> &str {
        match self {
            BuildError::MissingRequiredProperty { schema, .. }
            | BuildError::InvalidPropertyType { schema, .. }
            | BuildError::Initializer { schema, .. }
            | BuildError::InputNotRecord { schema, .. } => schema,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, BuildError::MissingRequiredProperty { .. })
    }

    pub fn is_invalid_type(&self) -> bool {
        matches!(self, BuildError::InvalidPropertyType { .. })
    }
}

/// A schema document could not be loaded.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document is not valid YAML/JSON.
    #[error("cannot parse schema document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed but does not have the expected shape.
    #[error("malformed schema document at '{path}': {reason}")]
    Malformed { path: String, reason: String },

    /// A type token names neither a primitive kind nor a known schema.
    #[error("unknown type '{name}' at '{path}'")]
    UnknownType { path: String, name: String },

    /// A schema name collides with a primitive kind token.
    #[error("schema name '{0}' is reserved for the {0} kind")]
    ReservedName(String),

    /// Two schemas share a name.
    #[error("schema '{0}' is already registered")]
    DuplicateSchema(String),

    /// A schema in the document failed to compile.
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// IO error reading the document.
    #[error("io error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
