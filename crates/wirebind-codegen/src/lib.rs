//! wirebind-codegen - Marshalling code generation for DAP-style messages
//!
//! Walks a [`Schema`](wirebind_core::Schema) of request, response, and event
//! types and emits C code converting between native records and a script
//! engine's dynamic values, plus name-keyed dispatch tables.
//!
//! # Architecture
//!
//! ```text
//! Schema
//!    ↓
//!  [Dispatch Generator] ──→ [Type Codegen] ──→ [Field Codegen]
//!    ↓                           ↑                   │
//!    ↓                           └───── references ──┘
//!  GeneratedUnit (fragment IR)
//!    ↓
//!  [Backend] → [Assembler] → slots → template → converter.c
//! ```
//!
//! Every composite type gets at most one parser and one serializer per run;
//! the [`GenerationMemo`] is marked before a type's fields are walked, so
//! recursive types terminate.
//!
//! # Usage
//!
//! ```rust
//! use wirebind_codegen::generate;
//! use wirebind_core::{CompositeType, FieldDescriptor, FieldType, GeneratorConfig, Schema};
//!
//! let mut schema = Schema::new();
//! schema.requests.push(CompositeType::new("LaunchRequest"));
//! schema.others.push(
//!     CompositeType::new("LaunchArguments")
//!         .with_field(FieldDescriptor::new("noDebug", FieldType::Boolean).optional()),
//! );
//!
//! let generation = generate(&schema, &GeneratorConfig::default()).unwrap();
//!
//! assert!(generation.output.contains("get_property_LaunchArguments"));
//! assert!(generation.output.contains("strcmp(command, \"launch\")"));
//! ```
//!
//! # See Also
//!
//! - [`fragment`] for the intermediate representation
//! - [`backend`] for rendering
//! - [`assembler`] for slots and templates
//! - [`json_schema`] for documenting wire shapes

pub mod assembler;
pub mod backend;
pub mod dispatch;
pub mod field;
pub mod fragment;
pub mod generator;
pub mod json_schema;
pub mod naming;
pub mod types;

mod context;

pub use assembler::{PlainRenderer, SlotTemplate, Slots, TemplateRenderer};
pub use backend::{Backend, QuickJsBackend};
pub use context::{GenerationMemo, GeneratorContext};
pub use fragment::{DispatchKind, FunctionKind, GeneratedUnit};
pub use generator::{Generation, build_unit, generate, generate_with};
pub use json_schema::generate_json_schema;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Generation, GeneratorContext, SlotTemplate, TemplateRenderer, generate,
        generate_json_schema, generate_with,
    };
    pub use wirebind_core::prelude::*;
}
