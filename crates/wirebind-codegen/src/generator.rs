//! One full generation run: schema in, converter source out.

use crate::assembler::{self, Slots, SlotTemplate, TemplateRenderer};
use crate::backend::QuickJsBackend;
use crate::context::GeneratorContext;
use crate::fragment::{DispatchKind, GeneratedUnit};
use tracing::info;
use wirebind_core::{
    Diagnostic, Diagnostics, GenerateError, GenerateResult, GeneratorConfig, NamingConfig, Schema,
};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Structured output, before rendering
    pub unit: GeneratedUnit,
    /// Rendered slots, before templating
    pub slots: Slots,
    /// Final artifact with blank lines removed
    pub output: String,
    /// Everything that was skipped or degraded, in recording order
    pub diagnostics: Vec<Diagnostic>,
}

/// Generate the converter source using the embedded default template.
pub fn generate(schema: &Schema, config: &GeneratorConfig) -> GenerateResult<Generation> {
    generate_with(schema, config, &SlotTemplate::default_converter())
}

/// Generate the converter source, rendering the final artifact with `renderer`.
///
/// # Errors
///
/// Fails on an invalid configuration, on a template error, and in strict mode
/// when the run recorded any diagnostic or [`Schema::validate`] reports a
/// problem (duplicate or invalid names).
pub fn generate_with(
    schema: &Schema,
    config: &GeneratorConfig,
    renderer: &dyn TemplateRenderer,
) -> GenerateResult<Generation> {
    config.validate()?;

    let (unit, diagnostics) = build_unit(schema, &config.naming);

    if config.strict {
        let mut rejected = schema.validate();
        for diagnostic in diagnostics.iter() {
            if !rejected.contains(diagnostic) {
                rejected.push(diagnostic.clone());
            }
        }
        if !rejected.is_empty() {
            return Err(GenerateError::Strict {
                diagnostics: rejected,
            });
        }
    }

    let backend = QuickJsBackend::new(&config.runtime, config.indent);
    let slots = assembler::assemble(&unit, &backend);
    let output = assembler::strip_blank_lines(&renderer.render(&slots)?);

    info!(
        functions = unit.functions.len(),
        branches = unit.blocks.iter().map(|b| b.branches.len()).sum::<usize>(),
        diagnostics = diagnostics.len(),
        "generation complete"
    );

    Ok(Generation {
        unit,
        slots,
        output,
        diagnostics: diagnostics.into_vec(),
    })
}

/// Run the engines over `schema` with a fresh memo.
///
/// Dispatch blocks are built in [`DispatchKind::ALL`] order; the functions they
/// request accumulate in first-completed order.
pub fn build_unit(schema: &Schema, naming: &NamingConfig) -> (GeneratedUnit, Diagnostics) {
    let mut ctx = GeneratorContext::new(schema, naming);
    let blocks = DispatchKind::ALL
        .into_iter()
        .map(|kind| ctx.dispatch_block(kind))
        .collect();
    ctx.finish(blocks)
}
