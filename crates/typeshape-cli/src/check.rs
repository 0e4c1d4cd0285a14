//! # Check Subcommand
//!
//! Builds each input record against one schema. Input is a JSON object or
//! an array of objects; output is one JSON instance per line. The first
//! rejected record aborts the run.
//!
//! JSON cannot carry class tags, so a plain object supplied for a property
//! declared with another registered schema is built through that schema's
//! builder first. Union members are tried in declaration order.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::Args;

use typeshape_schema::{BuildError, Builder, Instance, ResolvedType, SchemaRegistry, Value};

use crate::load_registry;

/// Arguments for the check subcommand.
///
/// Nested-schema properties may be given as plain JSON objects; they are
/// built with the nested schema before the outer record is checked.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema document (YAML or JSON).
    #[arg(long)]
    pub schemas: PathBuf,

    /// Name of the schema to build with.
    #[arg(long)]
    pub schema: String,

    /// JSON input file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Pretty-print each instance.
    #[arg(long)]
    pub pretty: bool,
}

/// Run the check subcommand, writing instances to `out`. Returns the
/// number of instances built.
pub fn run(args: &CheckArgs, out: &mut impl Write) -> anyhow::Result<usize> {
    let registry = load_registry(&args.schemas)?;
    let builder = registry.get(&args.schema).ok_or_else(|| {
        let known: Vec<_> = registry.names().collect();
        anyhow!(
            "schema '{}' not found in {} (known: {})",
            args.schema,
            args.schemas.display(),
            known.join(", ")
        )
    })?;

    let source = read_input(&args.input)?;
    let parsed: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("parsing {} as JSON", args.input.display()))?;
    let records = match parsed {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };

    for (i, record) in records.iter().enumerate() {
        let instance = build_record(&registry, builder, &Value::from(record.clone()))
            .with_context(|| format!("record {i} rejected by schema '{}'", args.schema))?;
        let json = instance
            .to_json()
            .with_context(|| format!("record {i} cannot be written as JSON"))?;
        if args.pretty {
            serde_json::to_writer_pretty(&mut *out, &json)?;
        } else {
            serde_json::to_writer(&mut *out, &json)?;
        }
        writeln!(out)?;
    }

    tracing::info!(schema = %args.schema, records = records.len(), "check passed");
    Ok(records.len())
}

/// Build `input` with `builder`, first building untagged records held by
/// nested-schema properties.
pub fn build_record(
    registry: &SchemaRegistry,
    builder: &Builder,
    input: &Value,
) -> Result<Instance, BuildError> {
    let Value::Object(record) = input else {
        return builder.build_value(input);
    };

    let mut record = record.clone();
    for property in builder.properties() {
        let raw = match record.get(property.name()) {
            Some(Value::Object(fields)) if fields.class().is_none() => {
                Value::Object(fields.clone())
            }
            _ => continue,
        };

        let mut first_err = None;
        for nested in nested_builders(registry, property.accepts()) {
            match build_record(registry, nested, &raw) {
                Ok(instance) => {
                    record.insert(property.name(), instance);
                    first_err = None;
                    break;
                }
                Err(err) => {
                    first_err.get_or_insert(err);
                }
            }
        }
        if let Some(err) = first_err {
            return Err(err);
        }
    }
    builder.build(&record)
}

fn nested_builders<'r>(
    registry: &'r SchemaRegistry,
    accepts: &ResolvedType,
) -> Vec<&'r Builder> {
    match accepts {
        ResolvedType::Primitive(_) => Vec::new(),
        ResolvedType::Tagged(tag) => registry.by_class(tag).into_iter().collect(),
        ResolvedType::Union(members) => members
            .iter()
            .flat_map(|m| nested_builders(registry, m))
            .collect(),
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
