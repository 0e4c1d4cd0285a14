//! # Schema Registry
//!
//! Compiled builders indexed by schema name. Schema documents are loaded
//! into a registry so that later schemas can nest earlier ones by name.
//!
//! Loading is all-or-nothing: if any schema in a document fails, the
//! registry is left exactly as it was.

use std::collections::BTreeMap;
use std::path::Path;

use typeshape_core::{ClassTag, Kind};

use crate::builder::Builder;
use crate::document;
use crate::error::DocumentError;

/// Named schema builders.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Builder>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a single YAML/JSON schema document.
    pub fn from_yaml_str(source: &str) -> Result<Self, DocumentError> {
        let mut registry = Self::new();
        registry.load_yaml_str(source)?;
        Ok(registry)
    }

    /// Add a compiled builder under its own name.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::ReservedName`] if the name is a kind token.
    /// - [`DocumentError::DuplicateSchema`] if the name is taken.
    pub fn register(&mut self, builder: Builder) -> Result<(), DocumentError> {
        let name = builder.name().to_string();
        if name.parse::<Kind>().is_ok() {
            return Err(DocumentError::ReservedName(name));
        }
        if self.schemas.contains_key(&name) {
            return Err(DocumentError::DuplicateSchema(name));
        }
        self.schemas.insert(name, builder);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Builder> {
        self.schemas.get(name)
    }

    /// The registered builder whose instances carry `tag`.
    pub fn by_class(&self, tag: &ClassTag) -> Option<&Builder> {
        self.schemas.values().find(|b| b.class() == tag)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Load every schema in a document. Returns the loaded names in
    /// document order.
    pub fn load_yaml_str(&mut self, source: &str) -> Result<Vec<String>, DocumentError> {
        let mut staged = self.clone();
        let loaded = document::load_into(&mut staged, source)?;
        *self = staged;
        tracing::info!(schemas = loaded.len(), "schema document loaded");
        Ok(loaded)
    }

    /// Load a schema document from disk.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<Vec<String>, DocumentError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let loaded = self.load_yaml_str(&source)?;
        tracing::debug!(path = %path.display(), "schema document read from disk");
        Ok(loaded)
    }
}
