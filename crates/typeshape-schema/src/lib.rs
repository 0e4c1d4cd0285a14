//! # typeshape-schema: Declarative Schema Compiler
//!
//! Compiles a flat map of property declarations into a [`Builder`] that
//! shapes untyped input (parsed JSON, hand-built [`Record`]s) into validated
//! [`Instance`]s.
//!
//! ```ignore
//! use typeshape_schema::{
//!     define_schema, union, with_default, SchemaDefinition, NULL, NUMBER, STRING,
//! };
//!
//! let pizza = define_schema(
//!     SchemaDefinition::new("Pizza")
//!         .property("price", NUMBER)
//!         .property("size", union([STRING, NULL]))
//!         .property("topping", with_default(STRING, "cheese"))
//!         .initializer(|draft, input| {
//!             let discount = input.get("discount").and_then(Value::as_f64).unwrap_or(0.0);
//!             if let Some(price) = draft.get("price").and_then(Value::as_f64) {
//!                 draft.set("price", price - discount)?;
//!             }
//!             Ok(())
//!         }),
//! )?;
//! ```
//!
//! ## Pieces
//!
//! - [`decl`]: type declarations and the exported kind constants.
//! - [`resolver`]: whether a value satisfies a declaration.
//! - [`compile`]: one-time normalization of a definition.
//! - [`builder`]: the four-pass build (defaults, assignment, initializer,
//!   validation) and [`Instance`].
//! - `document` / [`registry`]: YAML schema documents and named lookup.
//!
//! ## Crate Policy
//!
//! - Depends only on `typeshape-core` internally.
//! - No coercion: a mismatched kind is always an error, never converted.
//! - A compiled schema is immutable. Builds share it freely across threads.

pub mod builder;
pub mod compile;
pub mod decl;
pub mod definition;
mod document;
pub mod draft;
pub mod error;
pub mod registry;
pub mod resolver;

pub use builder::{Builder, Instance};
pub use compile::{define_schema, Property};
pub use decl::{
    union, with_default, with_default_fn, DefaultDecl, DefaultFn, TypeDecl, ARRAY, BOOLEAN,
    FUNCTION, NULL, NUMBER, STRING, SYMBOL, UNDEFINED,
};
pub use definition::{InitializerFn, SchemaDefinition};
pub use draft::Draft;
pub use error::{BuildError, DefinitionError, DocumentError, InitError};
pub use registry::SchemaRegistry;
pub use resolver::{is_valid, ResolvedType};

pub use typeshape_core::{ClassTag, FunctionValue, Kind, Record, Symbol, Value};
