//! # typeshape CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::io;

use clap::Parser;

/// Shape JSON records with declarative schemas.
#[derive(Parser, Debug)]
#[command(name = "typeshape", version, about)]
struct Cli {
    /// Emit logs as JSON lines instead of text.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Build input records against a schema.
    Check(typeshape_cli::check::CheckArgs),
    /// List schemas and their properties.
    Describe(typeshape_cli::describe::DescribeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries instances.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Check(args) => {
            typeshape_cli::check::run(&args, &mut stdout)?;
        }
        Commands::Describe(args) => {
            typeshape_cli::describe::run(&args, &mut stdout)?;
        }
    }

    Ok(())
}
