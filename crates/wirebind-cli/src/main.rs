//! wirebind CLI - Marshalling code generator
//!
//! Commands:
//! - `wirebind generate` - Generate the converter source from a schema
//! - `wirebind check` - Validate a schema and report what generation would skip
//! - `wirebind json-schema` - Export the schema's wire shapes as JSON Schema

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod generate;
mod input;
mod json_schema;
mod logging;

#[derive(Parser)]
#[command(name = "wirebind")]
#[command(author, version, about = "Marshalling code generator for DAP-style protocols", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the converter source
    Generate(GenerateArgs),

    /// Validate a schema and dry-run generation
    Check(CheckArgs),

    /// Export a JSON Schema of the message shapes
    JsonSchema(JsonSchemaArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Schema file (.toml, otherwise JSON)
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Output path for the generated source
    #[arg(short, long)]
    pub output: PathBuf,

    /// Generator configuration (default: ./wirebind.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template with {{slot}} placeholders (default: built-in QuickJS converter)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Fail if generation records any diagnostic
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Schema file (.toml, otherwise JSON)
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Generator configuration (default: ./wirebind.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail if generation would record any diagnostic
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct JsonSchemaArgs {
    /// Schema file (.toml, otherwise JSON)
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Output path for the JSON Schema document
    #[arg(short, long)]
    pub output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            generate::run(&args, cli.verbose)?;
        }
        Commands::Check(args) => {
            check::run(&args, cli.verbose)?;
        }
        Commands::JsonSchema(args) => {
            json_schema::run(&args, cli.verbose)?;
        }
    }

    Ok(())
}
