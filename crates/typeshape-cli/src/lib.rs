//! # typeshape-cli: Command-Line Interface
//!
//! Shapes JSON records with schemas declared in YAML documents.
//!
//! ## Subcommands
//!
//! - `check`: build every input record against a named schema and print
//!   the resulting instances as JSON.
//! - `describe`: list the schemas in a document with their properties.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers; handlers write to any
//!   `io::Write` so they can be exercised without a process.
//! - No schema logic here; everything delegates to `typeshape-schema`.

pub mod check;
pub mod describe;

use std::path::Path;

use anyhow::Context;
use typeshape_schema::SchemaRegistry;

/// Load the schema document at `path` into a fresh registry.
pub fn load_registry(path: &Path) -> anyhow::Result<SchemaRegistry> {
    let mut registry = SchemaRegistry::new();
    registry
        .load_path(path)
        .with_context(|| format!("loading schemas from {}", path.display()))?;
    Ok(registry)
}
