//! # Schema Documents
//!
//! Declarative schemas written in YAML (JSON parses as YAML too):
//!
//! ```yaml
//! schemas:
//!   Money:
//!     properties:
//!       value: number
//!   Pizza:
//!     properties:
//!       price: Money
//!       size: [string, null]
//!       topping: { type: string, default: cheese }
//! ```
//!
//! Property order in the document is declaration order. A type is a kind
//! token, the name of a schema defined earlier (in this document or already
//! registered), a sequence (union), YAML `null` (the null kind), or a mapping
//! with `type` and an optional constant `default`.
//!
//! Documents cannot express custom initializers or computed defaults; those
//! need code.

use serde_yaml::{Mapping, Value as Yaml};
use typeshape_core::{Kind, Value};

use crate::decl::{with_default, TypeDecl};
use crate::definition::SchemaDefinition;
use crate::error::DocumentError;
use crate::registry::SchemaRegistry;
use crate::{define_schema, Builder};

/// Parse `source` and compile each schema in order, registering each one
/// before the next is parsed so later schemas can nest earlier ones.
pub(crate) fn load_into(
    registry: &mut SchemaRegistry,
    source: &str,
) -> Result<Vec<String>, DocumentError> {
    let root: Yaml = serde_yaml::from_str(source)?;
    let root = as_mapping(&root, "$")?;
    let schemas = root
        .get("schemas")
        .ok_or_else(|| malformed("$", "missing 'schemas' mapping"))?;
    let schemas = as_mapping(schemas, "$.schemas")?;

    let mut loaded = Vec::with_capacity(schemas.len());
    for (name, body) in schemas {
        let name = name
            .as_str()
            .ok_or_else(|| malformed("$.schemas", "schema names must be strings"))?;
        let builder = parse_schema(registry, name, body)?;
        registry.register(builder)?;
        loaded.push(name.to_string());
    }
    Ok(loaded)
}

fn parse_schema(
    registry: &SchemaRegistry,
    name: &str,
    body: &Yaml,
) -> Result<Builder, DocumentError> {
    let path = format!("$.schemas.{name}");
    let body = as_mapping(body, &path)?;

    for key in body.keys() {
        if key.as_str() != Some("properties") {
            return Err(malformed(&path, format!("unexpected key {}", describe(key))));
        }
    }

    let mut definition = SchemaDefinition::new(name);
    if let Some(properties) = body.get("properties") {
        let props_path = format!("{path}.properties");
        for (property, decl) in as_mapping(properties, &props_path)? {
            let property = property
                .as_str()
                .ok_or_else(|| malformed(&props_path, "property names must be strings"))?;
            let decl = parse_type(registry, decl, &format!("{props_path}.{property}"))?;
            definition = definition.property(property, decl);
        }
    }

    Ok(define_schema(definition)?)
}

fn parse_type(
    registry: &SchemaRegistry,
    node: &Yaml,
    path: &str,
) -> Result<TypeDecl, DocumentError> {
    match node {
        Yaml::Null => Ok(TypeDecl::Primitive(Kind::Null)),
        Yaml::String(token) => match token.parse::<Kind>() {
            Ok(kind) => Ok(TypeDecl::Primitive(kind)),
            Err(_) => registry
                .get(token)
                .map(TypeDecl::from)
                .ok_or_else(|| DocumentError::UnknownType {
                    path: path.to_string(),
                    name: token.clone(),
                }),
        },
        Yaml::Sequence(members) => members
            .iter()
            .enumerate()
            .map(|(i, member)| parse_type(registry, member, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(TypeDecl::Union),
        Yaml::Mapping(spec) => parse_default(registry, spec, path),
        other => Err(malformed(path, format!("expected a type, got {}", describe(other)))),
    }
}

fn parse_default(
    registry: &SchemaRegistry,
    spec: &Mapping,
    path: &str,
) -> Result<TypeDecl, DocumentError> {
    for key in spec.keys() {
        match key.as_str() {
            Some("type") | Some("default") => {}
            _ => return Err(malformed(path, format!("unexpected key {}", describe(key)))),
        }
    }
    let kind = spec
        .get("type")
        .ok_or_else(|| malformed(path, "missing 'type'"))?;
    let kind = parse_type(registry, kind, &format!("{path}.type"))?;

    match spec.get("default") {
        None => Ok(kind),
        Some(default) => {
            let default_path = format!("{path}.default");
            if has_non_finite(default) {
                return Err(malformed(&default_path, "defaults must be finite numbers"));
            }
            let json = serde_json::to_value(default)
                .map_err(|e| malformed(&default_path, e.to_string()))?;
            Ok(with_default(kind, Value::from(json)))
        }
    }
}

/// JSON has no NaN or infinity; `serde_json` would turn them into null.
fn has_non_finite(node: &Yaml) -> bool {
    match node {
        Yaml::Number(n) => n.as_f64().is_some_and(|f| !f.is_finite()),
        Yaml::Sequence(items) => items.iter().any(has_non_finite),
        Yaml::Mapping(map) => map.values().any(has_non_finite),
        Yaml::Tagged(t) => has_non_finite(&t.value),
        Yaml::Null | Yaml::Bool(_) | Yaml::String(_) => false,
    }
}

fn as_mapping<'a>(node: &'a Yaml, path: &str) -> Result<&'a Mapping, DocumentError> {
    node.as_mapping()
        .ok_or_else(|| malformed(path, format!("expected a mapping, got {}", describe(node))))
}

fn describe(node: &Yaml) -> String {
    match node {
        Yaml::Null => "null".into(),
        Yaml::Bool(b) => format!("boolean {b}"),
        Yaml::Number(n) => format!("number {n}"),
        Yaml::String(s) => format!("'{s}'"),
        Yaml::Sequence(_) => "a sequence".into(),
        Yaml::Mapping(_) => "a mapping".into(),
        Yaml::Tagged(t) => format!("tagged value {}", t.tag),
    }
}

fn malformed(path: &str, reason: impl Into<String>) -> DocumentError {
    DocumentError::Malformed {
        path: path.to_string(),
        reason: reason.into(),
    }
}
