//! Check command implementation

use crate::CheckArgs;
use crate::generate::print_diagnostics;
use crate::{input, logging};
use anyhow::Result;
use wirebind_codegen::build_unit;
use wirebind_core::{Diagnostic, NamingConfig, Schema};

/// Result of validating a schema and dry-running generation
#[derive(Debug)]
pub struct CheckReport {
    /// Structural problems: invalid or duplicate names, dangling references
    pub problems: Vec<Diagnostic>,
    /// What generation would skip or degrade, excluding `problems`
    pub warnings: Vec<Diagnostic>,
    pub functions: usize,
    pub branches: usize,
}

/// Validate `schema` and build (but do not render) the generated unit.
pub fn inspect(schema: &Schema, naming: &NamingConfig) -> CheckReport {
    let problems = schema.validate();
    let (unit, diagnostics) = build_unit(schema, naming);
    let warnings = diagnostics
        .into_vec()
        .into_iter()
        .filter(|d| !problems.contains(d))
        .collect();

    CheckReport {
        problems,
        warnings,
        functions: unit.functions.len(),
        branches: unit.blocks.iter().map(|b| b.branches.len()).sum(),
    }
}

/// Run the check command
pub fn run(args: &CheckArgs, verbose: bool) -> Result<()> {
    let mut config = input::load_config(args.config.as_deref())?;
    if args.strict {
        config.strict = true;
    }
    config.validate()?;
    logging::init(&config.log_level, verbose);

    println!("Checking schema: {}", args.schema.display());

    let schema = input::load_schema(&args.schema)?;
    let report = inspect(&schema, &config.naming);

    println!(
        "✓ Types: {} requests, {} responses, {} events, {} others",
        schema.requests.len(),
        schema.responses.len(),
        schema.events.len(),
        schema.others.len()
    );
    println!(
        "✓ Would generate: {} functions, {} dispatch branches",
        report.functions, report.branches
    );
    print_diagnostics(&report.warnings);

    if !report.problems.is_empty() {
        println!("✗ Problems:");
        for problem in &report.problems {
            println!("  - {problem}");
        }
        anyhow::bail!("Schema has {} problem(s)", report.problems.len());
    }

    if config.strict && !report.warnings.is_empty() {
        anyhow::bail!(
            "Generation would record {} diagnostic(s) in strict mode",
            report.warnings.len()
        );
    }

    println!("\nSchema is valid!");

    Ok(())
}
