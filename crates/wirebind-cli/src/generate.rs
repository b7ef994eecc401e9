//! Generate command implementation

use crate::GenerateArgs;
use crate::{input, logging};
use anyhow::{Context, Result};
use wirebind_codegen::{Generation, generate_with};
use wirebind_core::Diagnostic;

/// Run the generate command
pub fn run(args: &GenerateArgs, verbose: bool) -> Result<()> {
    let mut config = input::load_config(args.config.as_deref())?;
    if args.strict {
        config.strict = true;
    }
    logging::init(&config.log_level, verbose);

    let schema = input::load_schema(&args.schema)?;
    let template = input::load_template(args.template.as_deref())?;

    println!("Generating converter from: {}", args.schema.display());

    let generation = match generate_with(&schema, &config, &template) {
        Ok(generation) => generation,
        Err(err) => {
            print_diagnostics(err.diagnostics());
            return Err(err).context("Generation failed");
        }
    };

    input::write_output(&args.output, &generation.output)?;

    println!("✓ {}", summary(&generation));
    print_diagnostics(&generation.diagnostics);
    println!("Output: {}", args.output.display());

    Ok(())
}

/// One-line description of what a run produced
pub fn summary(generation: &Generation) -> String {
    let branches: usize = generation
        .unit
        .blocks
        .iter()
        .map(|block| block.branches.len())
        .sum();
    format!(
        "{} functions, {} dispatch branches, {} diagnostics",
        generation.unit.functions.len(),
        branches,
        generation.diagnostics.len()
    )
}

pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    println!("⚠ Diagnostics:");
    for diagnostic in diagnostics {
        println!("  - {diagnostic}");
    }
}
