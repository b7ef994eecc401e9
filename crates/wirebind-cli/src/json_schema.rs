//! JSON Schema export command

use crate::JsonSchemaArgs;
use crate::{input, logging};
use anyhow::{Context, Result};
use wirebind_codegen::generate_json_schema;

/// Run the json-schema command
pub fn run(args: &JsonSchemaArgs, verbose: bool) -> Result<()> {
    logging::init("info", verbose);

    let schema = input::load_schema(&args.schema)?;
    let document = generate_json_schema(&schema);
    let json = serde_json::to_string_pretty(&document).context("Failed to serialize JSON Schema")?;

    input::write_output(&args.output, &json)?;

    let definitions = document["definitions"].as_object().map_or(0, |d| d.len());
    println!("✓ Wrote {definitions} definitions to {}", args.output.display());

    Ok(())
}
