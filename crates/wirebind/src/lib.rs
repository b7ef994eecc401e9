//! # wirebind
//!
//! A code generator that turns a schema of DAP-style protocol messages into
//! C marshalling code for an embedded JavaScript engine.
//!
//! For every request, response, and event the schema declares, wirebind emits:
//! - A parser from a script value into a native record
//! - A serializer from a native record back into a script value
//! - Name-keyed dispatch branches that route a wire name to the right function
//!
//! Each composite type gets exactly one parser and one serializer per run, in
//! dependency order, so the output compiles as a single translation unit.
//!
//! ## Quick Start
//!
//! ```rust
//! use wirebind::prelude::*;
//!
//! let mut schema = Schema::new();
//! schema.requests.push(CompositeType::new("SetBreakpointsRequest"));
//! schema.others.push(
//!     CompositeType::new("SetBreakpointsArguments")
//!         .with_field(FieldDescriptor::new("source", FieldType::reference("Source"))),
//! );
//! schema.others.push(
//!     CompositeType::new("Source")
//!         .with_field(FieldDescriptor::new("path", FieldType::String).optional()),
//! );
//!
//! let generation = generate(&schema, &GeneratorConfig::default()).unwrap();
//!
//! assert!(generation.diagnostics.is_empty());
//! assert!(generation.output.contains("get_property_Source"));
//! assert!(generation.output.contains("strcmp(command, \"setBreakpoints\")"));
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`wirebind_core`] - Schema descriptors, diagnostics, errors, and configuration
//! - [`wirebind_codegen`] - Generation, rendering, templates, and JSON Schema export

// Re-export core types
pub use wirebind_core::{
    CompositeType, Diagnostic, Diagnostics, FieldDescriptor, FieldType, GenerateError,
    GenerateResult, GeneratorConfig, MessageCategory, NamingConfig, RuntimeApi, ScalarKind,
    Schema,
};

// Re-export generation entry points
pub use wirebind_codegen::{
    Backend, DispatchKind, FunctionKind, GeneratedUnit, Generation, PlainRenderer,
    QuickJsBackend, SlotTemplate, Slots, TemplateRenderer, build_unit, generate,
    generate_json_schema, generate_with,
};

// Lower-level modules for custom backends
pub use wirebind_codegen::{assembler, fragment};

pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use wirebind::prelude::*;` to import the schema descriptors and the
/// generation entry points.
pub mod prelude {
    pub use crate::{
        CompositeType, Diagnostic, FieldDescriptor, FieldType, GenerateError, GenerateResult,
        Generation, GeneratorConfig, MessageCategory, ScalarKind, Schema, SlotTemplate,
        TemplateRenderer, generate, generate_json_schema, generate_with,
    };
}
