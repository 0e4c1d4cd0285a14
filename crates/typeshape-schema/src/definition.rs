//! # Schema Definitions
//!
//! An ordered list of property declarations plus an optional custom
//! initializer. A definition is inert; [`define_schema`](crate::define_schema)
//! compiles it into a [`Builder`](crate::Builder).

use std::fmt;
use std::sync::Arc;

use typeshape_core::Record;

use crate::decl::TypeDecl;
use crate::draft::Draft;
use crate::error::InitError;

/// Custom post-assignment logic.
///
/// Runs once per build, after defaults and input values are assigned and
/// before validation. It receives the raw input, so it can read fields the
/// schema does not declare (a transient `discount`, say).
pub type InitializerFn = dyn Fn(&mut Draft<'_>, &Record) -> Result<(), InitError> + Send + Sync;

/// A schema as written by the caller.
#[derive(Clone)]
pub struct SchemaDefinition {
    pub(crate) name: String,
    pub(crate) properties: Vec<(String, TypeDecl)>,
    pub(crate) initializer: Option<Arc<InitializerFn>>,
}

impl SchemaDefinition {
    /// Start a definition. `name` appears in error messages and is the tag
    /// name carried by every instance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            initializer: None,
        }
    }

    /// Declare a property. Declaration order is validation order.
    pub fn property(mut self, name: impl Into<String>, decl: impl Into<TypeDecl>) -> Self {
        self.properties.push((name.into(), decl.into()));
        self
    }

    /// Set the custom initializer, replacing any previous one.
    pub fn initializer(
        mut self,
        f: impl Fn(&mut Draft<'_>, &Record) -> Result<(), InitError> + Send + Sync + 'static,
    ) -> Self {
        self.initializer = Some(Arc::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared properties, in declaration order.
    pub fn properties(&self) -> &[(String, TypeDecl)] {
        &self.properties
    }
}

impl fmt::Debug for SchemaDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaDefinition")
            .field("name", &self.name)
            .field("properties", &self.properties)
            .field("initializer", &self.initializer.is_some())
            .finish()
    }
}
