//! C rendering against the QuickJS embedding API.
//!
//! Every embedding call is looked up in [`RuntimeApi`], so the same backend
//! also serves engines with a QuickJS-shaped C API under different names.

use super::Backend;
use crate::fragment::{DispatchBlock, Expr, Function, Param, Stmt, TypeRef, ValueOp};
use wirebind_core::{RuntimeApi, ScalarKind};

/// Renders fragments as C99 for a QuickJS-style runtime.
#[derive(Debug, Clone)]
pub struct QuickJsBackend<'a> {
    api: &'a RuntimeApi,
    indent: usize,
}

impl<'a> QuickJsBackend<'a> {
    pub fn new(api: &'a RuntimeApi, indent: usize) -> Self {
        Self { api, indent }
    }

    fn pad(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }

    fn type_name(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Value => self.api.value_type.clone(),
            TypeRef::Record(name) => format!("{name}*"),
            TypeRef::Name => "const char*".to_string(),
        }
    }

    fn signature(&self, function: &Function) -> String {
        let mut params = vec![format!(
            "{}* {}",
            self.api.context_type, self.api.context_name
        )];
        params.extend(
            function
                .params
                .iter()
                .map(|Param { ty, name }| format!("{} {}", self.type_name(ty), name)),
        );
        format!(
            "static {} {}({})",
            self.type_name(&function.returns),
            function.name,
            params.join(", ")
        )
    }

    fn render_stmts(&self, code: &mut String, stmts: &[Stmt], level: usize) {
        for stmt in stmts {
            self.render_stmt(code, stmt, level);
        }
    }

    fn render_stmt(&self, code: &mut String, stmt: &Stmt, level: usize) {
        let pad = self.pad(level);
        match stmt {
            Stmt::Declare { ty, name, value } => {
                code.push_str(&format!(
                    "{pad}{} {name} = {};\n",
                    self.type_name(ty),
                    self.expr(value)
                ));
            }
            Stmt::Assign { target, value } => {
                code.push_str(&format!("{pad}{} = {};\n", self.expr(target), self.expr(value)));
            }
            Stmt::Eval(expr) => {
                code.push_str(&format!("{pad}{};\n", self.expr(expr)));
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                code.push_str(&format!("{pad}if ({}) {{\n", self.expr(condition)));
                self.render_stmts(code, then_branch, level + 1);
                if !else_branch.is_empty() {
                    code.push_str(&format!("{pad}}} else {{\n"));
                    self.render_stmts(code, else_branch, level + 1);
                }
                code.push_str(&format!("{pad}}}\n"));
            }
            Stmt::Scope(body) => {
                code.push_str(&format!("{pad}{{\n"));
                self.render_stmts(code, body, level + 1);
                code.push_str(&format!("{pad}}}\n"));
            }
            Stmt::Loop { index, bound, body } => {
                code.push_str(&format!(
                    "{pad}for (int {index} = 0; {index} < {}; {index}++) {{\n",
                    self.expr(bound)
                ));
                self.render_stmts(code, body, level + 1);
                code.push_str(&format!("{pad}}}\n"));
            }
            Stmt::Return(expr) => {
                code.push_str(&format!("{pad}return {};\n", self.expr(expr)));
            }
        }
    }

    fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Null => "NULL".to_string(),
            Expr::Int(value) => value.to_string(),
            Expr::Real(value) => format!("{value:?}"),
            Expr::Str(value) => quote(value),
            Expr::Ident(name) => name.clone(),
            Expr::Member { base, name } => format!("{}->{name}", self.expr(base)),
            Expr::Index { base, index } => format!("{}[{}]", self.expr(base), self.expr(index)),
            Expr::AddressOf(inner) => format!("&{}", self.expr(inner)),
            Expr::Cast { ty, expr } => format!("({ty}*) {}", self.expr(expr)),
            Expr::PostIncrement(inner) => format!("{}++", self.expr(inner)),
            Expr::NotNull(inner) => format!("{} != NULL", self.expr(inner)),
            Expr::Call { function, args } => {
                self.call(function, args.iter().map(|a| self.expr(a)).collect())
            }
            Expr::Value(op) => self.value_op(op),
        }
    }

    fn value_op(&self, op: &ValueOp) -> String {
        let api = self.api;
        match op {
            ValueOp::HasProperty { object, key } => {
                self.call(&api.has_property, vec![self.expr(object), quote(key)])
            }
            ValueOp::GetProperty { object, key } => {
                self.call(&api.get_property, vec![self.expr(object), self.expr(key)])
            }
            ValueOp::Read { kind, object, key } => {
                let reader = match kind {
                    ScalarKind::String => &api.read_string,
                    ScalarKind::Double => &api.read_double,
                    ScalarKind::Int64 => &api.read_int64,
                    ScalarKind::Boolean => &api.read_boolean,
                };
                self.call(reader, vec![self.expr(object), quote(key)])
            }
            ValueOp::New { kind, value } => {
                let constructor = match kind {
                    ScalarKind::String => &api.new_string,
                    ScalarKind::Double => &api.new_double,
                    ScalarKind::Int64 => &api.new_int64,
                    ScalarKind::Boolean => &api.new_boolean,
                };
                self.call(constructor, vec![self.expr(value)])
            }
            ValueOp::NewObject => self.call(&api.new_object, vec![]),
            ValueOp::NewArray => self.call(&api.new_array, vec![]),
            ValueOp::SetProperty { object, key, value } => self.call(
                &api.set_property,
                vec![self.expr(object), quote(key), self.expr(value)],
            ),
            ValueOp::SetElement {
                array,
                index,
                value,
            } => self.call(
                &api.set_element,
                vec![self.expr(array), self.expr(index), self.expr(value)],
            ),
            ValueOp::Free(value) => self.call(&api.free_value, vec![self.expr(value)]),
            ValueOp::Alloc { ty } => self.call(&api.alloc, vec![format!("sizeof({ty})")]),
        }
    }

    /// `function(ctx, args...)`
    fn call(&self, function: &str, args: Vec<String>) -> String {
        let mut all = vec![self.api.context_name.clone()];
        all.extend(args);
        format!("{function}({})", all.join(", "))
    }
}

impl Backend for QuickJsBackend<'_> {
    fn prototype(&self, function: &Function) -> String {
        format!("{};", self.signature(function))
    }

    fn render_function(&self, function: &Function) -> String {
        let mut code = String::new();
        code.push_str(&format!("{} {{\n", self.signature(function)));
        self.render_stmts(&mut code, &function.body, 1);
        code.push_str("}\n");
        code
    }

    fn render_block(&self, block: &DispatchBlock) -> String {
        let mut code = String::new();
        let pad = self.pad(1);
        for branch in &block.branches {
            code.push_str(&format!(
                "{pad}if (strcmp({}, {}) == 0) {{\n",
                block.kind.discriminant(),
                quote(&branch.wire_name)
            ));
            self.render_stmts(&mut code, &branch.body, 2);
            code.push_str(&format!("{pad}}}\n"));
        }
        code
    }
}

/// C string literal.
fn quote(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
