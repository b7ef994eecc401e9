//! Per-run generation state.

use crate::fragment::{DispatchBlock, Function, FunctionKind, GeneratedUnit};
use std::collections::HashSet;
use wirebind_core::{Diagnostic, Diagnostics, NamingConfig, Schema};

/// "Already emitted" marks for one generation run, keyed by composite type name.
///
/// Parser and serializer marks are independent. Marks are only ever added.
#[derive(Debug, Clone, Default)]
pub struct GenerationMemo {
    parsers: HashSet<String>,
    serializers: HashSet<String>,
}

impl GenerationMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `type_name` for `kind`. Returns `false` if it was already marked.
    pub fn mark(&mut self, kind: FunctionKind, type_name: &str) -> bool {
        let marks = match kind {
            FunctionKind::Parser => &mut self.parsers,
            FunctionKind::Serializer => &mut self.serializers,
        };
        if marks.contains(type_name) {
            return false;
        }
        marks.insert(type_name.to_string())
    }

    pub fn is_marked(&self, kind: FunctionKind, type_name: &str) -> bool {
        match kind {
            FunctionKind::Parser => self.parsers.contains(type_name),
            FunctionKind::Serializer => self.serializers.contains(type_name),
        }
    }
}

/// State owned by exactly one generation run.
///
/// Holds the schema being walked, the [`GenerationMemo`], the shared buffer of
/// finished functions, and the diagnostics recorded so far. The Field and Type
/// Codegen Engines and the Dispatch Generator are implemented as methods on
/// this type (see `field`, `types`, and `dispatch`).
pub struct GeneratorContext<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) naming: &'a NamingConfig,
    pub(crate) memo: GenerationMemo,
    functions: Vec<Function>,
    diagnostics: Diagnostics,
}

impl<'a> GeneratorContext<'a> {
    /// Create a context with an empty memo.
    pub fn new(schema: &'a Schema, naming: &'a NamingConfig) -> Self {
        Self {
            schema,
            naming,
            memo: GenerationMemo::new(),
            functions: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn memo(&self) -> &GenerationMemo {
        &self.memo
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Functions finished so far, in completion order.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Generated function name for a type.
    pub fn function_name(&self, kind: FunctionKind, type_name: &str) -> String {
        let prefix = match kind {
            FunctionKind::Parser => &self.naming.parser_prefix,
            FunctionKind::Serializer => &self.naming.serializer_prefix,
        };
        format!("{prefix}{type_name}")
    }

    /// Name of the companion length member of an array field.
    pub fn length_member(&self, field_name: &str) -> String {
        format!("{field_name}{}", self.naming.length_suffix)
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn push_function(&mut self, function: Function) {
        self.functions.push(function);
    }

    /// End the run, pairing the finished functions with the dispatch blocks.
    pub fn finish(self, blocks: Vec<DispatchBlock>) -> (GeneratedUnit, Diagnostics) {
        let unit = GeneratedUnit {
            functions: self.functions,
            blocks,
        };
        (unit, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn GenerationMemo___mark___returns_false_on_repeat() {
        let mut memo = GenerationMemo::new();

        assert!(memo.mark(FunctionKind::Parser, "Source"));
        assert!(!memo.mark(FunctionKind::Parser, "Source"));
    }

    #[test]
    fn GenerationMemo___directions___are_independent() {
        let mut memo = GenerationMemo::new();

        memo.mark(FunctionKind::Parser, "Source");

        assert!(memo.is_marked(FunctionKind::Parser, "Source"));
        assert!(!memo.is_marked(FunctionKind::Serializer, "Source"));
        assert!(memo.mark(FunctionKind::Serializer, "Source"));
    }

    #[test]
    fn GeneratorContext___function_name___uses_configured_prefixes() {
        let schema = Schema::new();
        let naming = NamingConfig {
            parser_prefix: "parse_".into(),
            serializer_prefix: "stringify_".into(),
            length_suffix: "Count".into(),
        };
        let ctx = GeneratorContext::new(&schema, &naming);

        assert_eq!(ctx.function_name(FunctionKind::Parser, "Source"), "parse_Source");
        assert_eq!(
            ctx.function_name(FunctionKind::Serializer, "Source"),
            "stringify_Source"
        );
        assert_eq!(ctx.length_member("breakpoints"), "breakpointsCount");
    }
}
