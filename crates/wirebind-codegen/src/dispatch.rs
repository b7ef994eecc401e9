//! Dispatch Generator: name-matching branches for each message category.
//!
//! Each message type is correlated with its payload type (Arguments for
//! requests, Body for responses and events). Messages without a payload type
//! get no branch.

use crate::context::GeneratorContext;
use crate::fragment::{DispatchBlock, DispatchBranch, DispatchKind, Expr, Stmt, TypeRef, ValueOp};
use crate::naming::{self, to_snake_case};
use wirebind_core::{CompositeType, Diagnostic, MessageCategory};

/// Category whose messages a dispatch block iterates.
pub fn category(kind: DispatchKind) -> MessageCategory {
    match kind {
        DispatchKind::RequestParser => MessageCategory::Request,
        DispatchKind::EventInit | DispatchKind::EventBodyStringify => MessageCategory::Event,
        DispatchKind::ResponseInit | DispatchKind::ResponseBodyStringify => {
            MessageCategory::Response
        }
    }
}

impl<'a> GeneratorContext<'a> {
    /// Build the dispatch block of `kind`, one branch per correlated message in
    /// schema order.
    pub fn dispatch_block(&mut self, kind: DispatchKind) -> DispatchBlock {
        let category = category(kind);
        let schema = self.schema;
        let candidates = schema.correlates(category);

        let mut branches = Vec::new();
        for message in schema.messages(category) {
            let Some(payload) = self.correlate(category, message, &candidates) else {
                continue;
            };
            let body = match kind {
                DispatchKind::RequestParser => self.request_parser_branch(payload),
                DispatchKind::EventInit => self.event_init_branch(message, payload),
                DispatchKind::ResponseInit => self.response_init_branch(message, payload),
                DispatchKind::EventBodyStringify | DispatchKind::ResponseBodyStringify => {
                    self.body_stringify_branch(message, payload)
                }
            };
            branches.push(DispatchBranch {
                message: message.name.clone(),
                wire_name: naming::wire_name(&message.name, category),
                body,
            });
        }

        DispatchBlock { kind, branches }
    }

    fn correlate(
        &mut self,
        category: MessageCategory,
        message: &CompositeType,
        candidates: &[&'a CompositeType],
    ) -> Option<&'a CompositeType> {
        let suffix = category.correlate_suffix();
        let Some(correlation) = naming::correlate(&message.name, candidates, suffix) else {
            self.report(Diagnostic::MissingCorrelate {
                category,
                message: message.name.clone(),
                suffix,
            });
            return None;
        };
        if correlation.is_ambiguous() {
            self.report(Diagnostic::AmbiguousCorrelate {
                category,
                message: message.name.clone(),
                chosen: correlation.chosen.name.clone(),
                others: correlation.others.iter().map(|s| s.to_string()).collect(),
            });
        }
        Some(correlation.chosen)
    }

    /// `return <parser>(request, "arguments");`
    fn request_parser_branch(&mut self, arguments: &CompositeType) -> Vec<Stmt> {
        let parser = self.ensure_parser(arguments);
        vec![Stmt::Return(Expr::call(
            parser,
            vec![Expr::ident("request"), Expr::str("arguments")],
        ))]
    }

    fn event_init_branch(&self, message: &CompositeType, body: &CompositeType) -> Vec<Stmt> {
        let result = Expr::ident("result");
        let mut stmts = vec![
            allocate(message, "result"),
            Stmt::assign(result.member("event"), Expr::ident("event")),
        ];
        stmts.extend(self.attach_body(&result, body));
        stmts
    }

    fn response_init_branch(&self, message: &CompositeType, body: &CompositeType) -> Vec<Stmt> {
        let result = Expr::ident("result");
        let request = Expr::ident("corresponding_request");
        let mut stmts = vec![
            allocate(message, "result"),
            Stmt::assign(result.member("type"), Expr::str("response")),
            Stmt::assign(
                result.member("seq"),
                Expr::PostIncrement(Box::new(Expr::ident("response_seq"))),
            ),
            Stmt::assign(result.member("request_seq"), request.member("seq")),
            Stmt::assign(result.member("command"), request.member("command")),
            Stmt::assign(result.member("success"), Expr::Int(1)),
            Stmt::assign(result.member("message"), Expr::Null),
        ];
        stmts.extend(self.attach_body(&result, body));
        stmts
    }

    /// Allocate a zero-initialized body, hang it off `result`, return `result`.
    fn attach_body(&self, result: &Expr, body: &CompositeType) -> Vec<Stmt> {
        let body_var = Expr::ident("body");
        let mut stmts = vec![allocate(body, "body")];
        stmts.extend(self.default_initializer(body, &body_var));
        stmts.push(Stmt::assign(result.member("body"), body_var));
        stmts.push(Stmt::Return(result.clone()));
        stmts
    }

    /// Reinterpret the opaque `body` pointer and serialize each field into
    /// `object`.
    fn body_stringify_branch(&mut self, message: &CompositeType, body: &CompositeType) -> Vec<Stmt> {
        let var = format!("{}_body", to_snake_case(&message.name));
        let source = Expr::ident(&var);
        let object = Expr::ident("object");

        let mut stmts = vec![Stmt::declare(
            TypeRef::Record(body.name.clone()),
            var,
            Expr::Cast {
                ty: body.name.clone(),
                expr: Box::new(Expr::ident("body")),
            },
        )];
        for field in &body.fields {
            if let Some(fragment) = self.serialize_fragment(&body.name, field, &source, &object) {
                stmts.extend(fragment);
            }
        }
        stmts
    }
}

fn allocate(ty: &CompositeType, var: &str) -> Stmt {
    Stmt::declare(
        TypeRef::Record(ty.name.clone()),
        var,
        ValueOp::Alloc {
            ty: ty.name.clone(),
        },
    )
}

#[cfg(test)]
#[path = "dispatch/dispatch_tests.rs"]
mod dispatch_tests;
