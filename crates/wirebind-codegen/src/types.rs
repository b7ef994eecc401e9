//! Type Codegen Engine: one parser and one serializer per composite type.
//!
//! The memo is marked *before* a type's fields are walked, so a reference
//! cycle terminates on the second visit. A function is appended to the output
//! only after its own fields are generated, which places every referenced
//! function ahead of the functions that call it (cycles excepted, which is why
//! the assembler emits prototypes).

use crate::context::GeneratorContext;
use crate::fragment::{Expr, Function, FunctionKind, Param, Stmt, TypeRef, ValueOp};
use tracing::debug;
use wirebind_core::CompositeType;

/// Parser parameter holding the parent dynamic value.
pub const PARSER_OBJECT: &str = "this_object";
/// Parser parameter holding the property key.
pub const PARSER_KEY: &str = "prop";
/// Serializer parameter holding the record pointer.
pub const SERIALIZER_VALUE: &str = "value";

impl GeneratorContext<'_> {
    /// Emit the parser for `ty` unless already emitted, returning its name.
    ///
    /// The generated function reads the property `prop` of `this_object`,
    /// allocates a record, fills every field, releases the property value, and
    /// returns the record.
    pub fn ensure_parser(&mut self, ty: &CompositeType) -> String {
        let name = self.function_name(FunctionKind::Parser, &ty.name);
        if !self.memo.mark(FunctionKind::Parser, &ty.name) {
            return name;
        }
        debug!(type_name = %ty.name, function = %name, "emitting parser");

        let source = Expr::ident("arguments");
        let target = Expr::ident("args");

        let mut body = vec![
            Stmt::declare(
                TypeRef::Value,
                "arguments",
                ValueOp::GetProperty {
                    object: Box::new(Expr::ident(PARSER_OBJECT)),
                    key: Box::new(Expr::ident(PARSER_KEY)),
                },
            ),
            Stmt::declare(
                TypeRef::Record(ty.name.clone()),
                "args",
                ValueOp::Alloc {
                    ty: ty.name.clone(),
                },
            ),
        ];
        for field in &ty.fields {
            body.extend(self.parse_fragment(&ty.name, field, &target, &source));
        }
        body.push(Stmt::eval(ValueOp::Free(Box::new(source))));
        body.push(Stmt::Return(target));

        self.push_function(Function {
            kind: FunctionKind::Parser,
            type_name: ty.name.clone(),
            name: name.clone(),
            returns: TypeRef::Record(ty.name.clone()),
            params: vec![
                Param::new(TypeRef::Value, PARSER_OBJECT),
                Param::new(TypeRef::Name, PARSER_KEY),
            ],
            body,
        });
        name
    }

    /// Emit the serializer for `ty` unless already emitted, returning its name.
    ///
    /// The generated function builds a fresh object holding every field of
    /// `value` that produced code, in declaration order.
    pub fn ensure_serializer(&mut self, ty: &CompositeType) -> String {
        let name = self.function_name(FunctionKind::Serializer, &ty.name);
        if !self.memo.mark(FunctionKind::Serializer, &ty.name) {
            return name;
        }
        debug!(type_name = %ty.name, function = %name, "emitting serializer");

        let source = Expr::ident(SERIALIZER_VALUE);
        let object = Expr::ident("object");

        let mut body = vec![Stmt::declare(TypeRef::Value, "object", ValueOp::NewObject)];
        for field in &ty.fields {
            if let Some(stmts) = self.serialize_fragment(&ty.name, field, &source, &object) {
                body.extend(stmts);
            }
        }
        body.push(Stmt::Return(object));

        self.push_function(Function {
            kind: FunctionKind::Serializer,
            type_name: ty.name.clone(),
            name: name.clone(),
            returns: TypeRef::Value,
            params: vec![Param::new(
                TypeRef::Record(ty.name.clone()),
                SERIALIZER_VALUE,
            )],
            body,
        });
        name
    }

    /// Statements writing the zero value of every field of `ty` into `target`.
    pub fn default_initializer(&self, ty: &CompositeType, target: &Expr) -> Vec<Stmt> {
        ty.fields
            .iter()
            .flat_map(|field| self.zero_fill(target, field))
            .collect()
    }
}
