//! # Schema Compiler
//!
//! Turns a [`SchemaDefinition`] into an immutable, fully normalized schema
//! before any instance is built. Every default expression is split into the
//! kind it is validated against and the computation that supplies it, once.
//! Builds never rewrite the schema, so a compiled schema can be shared
//! across threads without coordination.
//!
//! Definitions are rejected here, not at build time, when they could never
//! behave sensibly: duplicate property names, empty unions, and more than
//! one default expression in a single declaration (there is no precedence
//! between two defaults).

use std::collections::HashSet;
use std::sync::Arc;

use typeshape_core::ClassTag;

use crate::builder::Builder;
use crate::decl::{DefaultFn, TypeDecl};
use crate::definition::{InitializerFn, SchemaDefinition};
use crate::error::DefinitionError;
use crate::resolver::ResolvedType;

/// A normalized property.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    accepts: ResolvedType,
    default: Option<DefaultFn>,
}

impl Property {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type values of this property are validated against.
    pub fn accepts(&self) -> &ResolvedType {
        &self.accepts
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub(crate) fn default(&self) -> Option<&DefaultFn> {
        self.default.as_ref()
    }

    /// Whether the property may be left unset.
    pub fn is_optional(&self) -> bool {
        self.default.is_some() || self.accepts.accepts_absence()
    }
}

pub(crate) struct CompiledSchema {
    pub(crate) name: String,
    pub(crate) tag: ClassTag,
    pub(crate) properties: Vec<Property>,
    pub(crate) initializer: Option<Arc<InitializerFn>>,
}

impl CompiledSchema {
    pub(crate) fn declares(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p.name == property)
    }
}

/// Compile a definition into a reusable builder.
///
/// # Errors
///
/// Returns [`DefinitionError`] if a property is declared twice, a union is
/// empty, or a declaration carries more than one default expression.
pub fn define_schema(definition: SchemaDefinition) -> Result<Builder, DefinitionError> {
    let SchemaDefinition {
        name,
        properties: declared,
        initializer,
    } = definition;

    let mut seen = HashSet::new();
    let mut properties = Vec::with_capacity(declared.len());

    for (property, decl) in declared {
        if !seen.insert(property.clone()) {
            return Err(DefinitionError::DuplicateProperty {
                schema: name,
                property,
            });
        }

        let count = decl.default_count();
        if count > 1 {
            return Err(DefinitionError::ConflictingDefaults {
                schema: name,
                property,
                count,
            });
        }

        let mut default = None;
        let Some(accepts) = normalize(&decl, &mut default) else {
            return Err(DefinitionError::EmptyUnion {
                schema: name,
                property,
            });
        };

        properties.push(Property {
            name: property,
            accepts,
            default,
        });
    }

    tracing::debug!(
        schema = %name,
        properties = properties.len(),
        defaults = properties.iter().filter(|p| p.has_default()).count(),
        initializer = initializer.is_some(),
        "schema compiled"
    );

    Ok(Builder::from_compiled(CompiledSchema {
        tag: ClassTag::new(name.clone()),
        name,
        properties,
        initializer,
    }))
}

/// Strip default expressions, recording the (single) computation found.
/// Returns `None` if any union in the declaration is empty.
fn normalize(decl: &TypeDecl, default: &mut Option<DefaultFn>) -> Option<ResolvedType> {
    match decl {
        TypeDecl::Primitive(kind) => Some(ResolvedType::Primitive(*kind)),
        TypeDecl::Nested(builder) => Some(ResolvedType::Tagged(builder.class().clone())),
        TypeDecl::Class(tag) => Some(ResolvedType::Tagged(tag.clone())),
        TypeDecl::Union(members) if members.is_empty() => None,
        TypeDecl::Union(members) => members
            .iter()
            .map(|m| normalize(m, default))
            .collect::<Option<Vec<_>>>()
            .map(ResolvedType::Union),
        TypeDecl::Default(d) => {
            *default = Some(d.compute.clone());
            normalize(&d.kind, default)
        }
    }
}
