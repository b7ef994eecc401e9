//! wirebind-core - Type descriptors, diagnostics, and configuration
//!
//! This crate provides the foundational types shared by the wirebind code generator:
//! - [`Schema`] and its [`CompositeType`] / [`FieldDescriptor`] / [`FieldType`] descriptors
//! - [`Diagnostic`] and [`Diagnostics`] for non-fatal generation findings
//! - [`GenerateError`] for hard failures
//! - [`GeneratorConfig`] for naming, runtime API, and strictness settings

mod config;
mod diagnostic;
mod error;
mod schema;

pub use config::{GeneratorConfig, NamingConfig, RuntimeApi};
pub use diagnostic::{Diagnostic, Diagnostics};
pub use error::{GenerateError, GenerateResult};
pub use schema::{
    CompositeType, FieldDescriptor, FieldType, MessageCategory, ScalarKind, Schema,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CompositeType, Diagnostic, FieldDescriptor, FieldType, GenerateError, GenerateResult,
        GeneratorConfig, MessageCategory, ScalarKind, Schema,
    };
}
