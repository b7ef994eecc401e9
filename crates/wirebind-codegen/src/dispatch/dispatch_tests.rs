#![allow(non_snake_case)]

use super::*;
use crate::fragment::FunctionKind;
use wirebind_core::{FieldDescriptor, FieldType, NamingConfig, Schema};

fn launch_schema() -> Schema {
    let mut schema = Schema::new();
    schema.requests.push(CompositeType::new("LaunchRequest"));
    schema.requests.push(CompositeType::new("PauseRequest"));
    schema.others.push(
        CompositeType::new("LaunchArguments")
            .with_field(FieldDescriptor::new("noDebug", FieldType::Boolean).optional()),
    );
    schema
}

fn stopped_schema() -> Schema {
    let mut schema = Schema::new();
    schema.events.push(CompositeType::new("StoppedEvent"));
    schema.responses.push(CompositeType::new("StackTraceResponse"));
    schema.others.push(
        CompositeType::new("StoppedEventBody")
            .with_field(FieldDescriptor::new("reason", FieldType::String))
            .with_field(FieldDescriptor::new("threadId", FieldType::Int64).optional()),
    );
    schema.others.push(
        CompositeType::new("StackTraceResponseBody")
            .with_field(FieldDescriptor::new("totalFrames", FieldType::Int64)),
    );
    schema
}

#[test]
fn category___maps_blocks_to_message_lists() {
    assert_eq!(category(DispatchKind::RequestParser), MessageCategory::Request);
    assert_eq!(category(DispatchKind::EventInit), MessageCategory::Event);
    assert_eq!(category(DispatchKind::EventBodyStringify), MessageCategory::Event);
    assert_eq!(category(DispatchKind::ResponseInit), MessageCategory::Response);
    assert_eq!(
        category(DispatchKind::ResponseBodyStringify),
        MessageCategory::Response
    );
}

#[test]
fn dispatch_block___request___returns_arguments_parser_call() {
    let schema = launch_schema();
    let naming = NamingConfig::default();
    let mut ctx = GeneratorContext::new(&schema, &naming);

    let block = ctx.dispatch_block(DispatchKind::RequestParser);

    assert_eq!(block.branches.len(), 1);
    let branch = &block.branches[0];
    assert_eq!(branch.message, "LaunchRequest");
    assert_eq!(branch.wire_name, "launch");
    assert_eq!(
        branch.body,
        vec![Stmt::Return(Expr::call(
            "get_property_LaunchArguments",
            vec![Expr::ident("request"), Expr::str("arguments")]
        ))]
    );
    assert!(ctx.memo().is_marked(FunctionKind::Parser, "LaunchArguments"));
}

#[test]
fn dispatch_block___uncorrelated_message___no_branch_and_diagnostic() {
    let schema = launch_schema();
    let naming = NamingConfig::default();
    let mut ctx = GeneratorContext::new(&schema, &naming);

    ctx.dispatch_block(DispatchKind::RequestParser);

    assert_eq!(
        ctx.diagnostics().iter().collect::<Vec<_>>(),
        vec![&Diagnostic::MissingCorrelate {
            category: MessageCategory::Request,
            message: "PauseRequest".to_string(),
            suffix: "Arguments",
        }]
    );
}

#[test]
fn dispatch_block___ambiguous_correlate___first_wins_with_diagnostic() {
    let mut schema = Schema::new();
    schema.requests.push(CompositeType::new("StepInTargetsRequest"));
    schema.others.push(CompositeType::new("StepInArguments"));
    schema.others.push(CompositeType::new("StepInTargetsArguments"));
    let naming = NamingConfig::default();
    let mut ctx = GeneratorContext::new(&schema, &naming);

    let block = ctx.dispatch_block(DispatchKind::RequestParser);

    assert_eq!(
        block.branches[0].body,
        vec![Stmt::Return(Expr::call(
            "get_property_StepInArguments",
            vec![Expr::ident("request"), Expr::str("arguments")]
        ))]
    );
    assert!(matches!(
        ctx.diagnostics().iter().next(),
        Some(Diagnostic::AmbiguousCorrelate { chosen, .. }) if chosen == "StepInArguments"
    ));
}

#[test]
fn dispatch_block___event_init___allocates_and_zero_initializes_body() {
    let schema = stopped_schema();
    let naming = NamingConfig::default();
    let mut ctx = GeneratorContext::new(&schema, &naming);
    let result = Expr::ident("result");
    let body = Expr::ident("body");

    let block = ctx.dispatch_block(DispatchKind::EventInit);

    assert_eq!(block.branches[0].wire_name, "stopped");
    assert_eq!(
        block.branches[0].body,
        vec![
            Stmt::declare(
                TypeRef::Record("StoppedEvent".to_string()),
                "result",
                ValueOp::Alloc {
                    ty: "StoppedEvent".to_string()
                }
            ),
            Stmt::assign(result.member("event"), Expr::ident("event")),
            Stmt::declare(
                TypeRef::Record("StoppedEventBody".to_string()),
                "body",
                ValueOp::Alloc {
                    ty: "StoppedEventBody".to_string()
                }
            ),
            Stmt::assign(body.member("reason"), Expr::Null),
            Stmt::assign(body.member("threadId"), Expr::Int(0)),
            Stmt::assign(result.member("body"), body.clone()),
            Stmt::Return(result.clone()),
        ]
    );
    assert!(ctx.functions().is_empty());
}

#[test]
fn dispatch_block___response_init___fills_bookkeeping_from_request() {
    let schema = stopped_schema();
    let naming = NamingConfig::default();
    let mut ctx = GeneratorContext::new(&schema, &naming);
    let result = Expr::ident("result");
    let request = Expr::ident("corresponding_request");

    let block = ctx.dispatch_block(DispatchKind::ResponseInit);

    let branch = &block.branches[0];
    assert_eq!(branch.wire_name, "stackTrace");
    assert_eq!(
        branch.body[1..7],
        [
            Stmt::assign(result.member("type"), Expr::str("response")),
            Stmt::assign(
                result.member("seq"),
                Expr::PostIncrement(Box::new(Expr::ident("response_seq")))
            ),
            Stmt::assign(result.member("request_seq"), request.member("seq")),
            Stmt::assign(result.member("command"), request.member("command")),
            Stmt::assign(result.member("success"), Expr::Int(1)),
            Stmt::assign(result.member("message"), Expr::Null),
        ]
    );
    assert_eq!(branch.body.last(), Some(&Stmt::Return(result.clone())));
}

#[test]
fn dispatch_block___body_stringify___casts_opaque_body() {
    let schema = stopped_schema();
    let naming = NamingConfig::default();
    let mut ctx = GeneratorContext::new(&schema, &naming);

    let block = ctx.dispatch_block(DispatchKind::EventBodyStringify);

    let body = &block.branches[0].body;
    assert_eq!(
        body[0],
        Stmt::declare(
            TypeRef::Record("StoppedEventBody".to_string()),
            "stopped_event_body",
            Expr::Cast {
                ty: "StoppedEventBody".to_string(),
                expr: Box::new(Expr::ident("body")),
            }
        )
    );
    // one scope per field
    assert_eq!(body.len(), 3);
    assert!(body[1..].iter().all(|s| matches!(s, Stmt::Scope(_))));
}

#[test]
fn dispatch_block___response_body_stringify___keyed_by_command() {
    let schema = stopped_schema();
    let naming = NamingConfig::default();
    let mut ctx = GeneratorContext::new(&schema, &naming);

    let block = ctx.dispatch_block(DispatchKind::ResponseBodyStringify);

    assert_eq!(block.kind.discriminant(), "command");
    assert_eq!(block.branches[0].message, "StackTraceResponse");
    assert!(matches!(
        &block.branches[0].body[0],
        Stmt::Declare { name, .. } if name == "stack_trace_response_body"
    ));
}

#[test]
fn dispatch_block___follows_schema_order() {
    let mut schema = Schema::new();
    for name in ["Continue", "Attach", "Launch"] {
        schema.requests.push(CompositeType::new(format!("{name}Request")));
    }
    for name in ["Launch", "Continue", "Attach"] {
        schema.others.push(CompositeType::new(format!("{name}Arguments")));
    }
    let naming = NamingConfig::default();
    let mut ctx = GeneratorContext::new(&schema, &naming);

    let block = ctx.dispatch_block(DispatchKind::RequestParser);

    let wire_names: Vec<&str> = block.branches.iter().map(|b| b.wire_name.as_str()).collect();
    assert_eq!(wire_names, vec!["continue", "attach", "launch"]);
}
