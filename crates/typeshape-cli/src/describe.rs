//! # Describe Subcommand
//!
//! Prints each schema in a document with its properties, the type each
//! accepts, and whether it is optional or defaulted.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::load_registry;

/// Arguments for the describe subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Schema document (YAML or JSON).
    #[arg(long)]
    pub schemas: PathBuf,

    /// Only describe this schema.
    #[arg(long)]
    pub schema: Option<String>,
}

pub fn run(args: &DescribeArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let registry = load_registry(&args.schemas)?;
    let names: Vec<String> = match &args.schema {
        Some(name) => vec![name.clone()],
        None => registry.names().map(str::to_string).collect(),
    };

    for name in names {
        let builder = registry
            .get(&name)
            .ok_or_else(|| anyhow::anyhow!("schema '{name}' not found"))?;
        writeln!(out, "{}", builder.name())?;
        for property in builder.properties() {
            let marker = if property.has_default() {
                " (default)"
            } else if property.is_optional() {
                " (optional)"
            } else {
                ""
            };
            writeln!(out, "  {}: {}{}", property.name(), property.accepts(), marker)?;
        }
    }
    Ok(())
}
