#![allow(non_snake_case)]

use super::*;
use crate::backend::QuickJsBackend;
use crate::fragment::{
    DispatchBlock, DispatchBranch, Expr, Function, FunctionKind, Param, Stmt, TypeRef,
};
use wirebind_core::RuntimeApi;

fn slots(entries: &[(&str, &str)]) -> Slots {
    let mut slots = Slots::new();
    for (name, value) in entries {
        slots.insert(*name, *value);
    }
    slots
}

#[test]
fn Slots___insert_existing___keeps_position() {
    let mut slots = slots(&[("a", "1"), ("b", "2")]);

    slots.insert("a", "3");

    assert_eq!(slots.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(slots.get("a"), Some("3"));
}

#[test]
fn Slots___concat___joins_values_in_order() {
    let slots = slots(&[("a", "first"), ("b", "second")]);

    assert_eq!(slots.concat(), "first\nsecond");
}

#[test]
fn strip_blank_lines___removes_empty_and_whitespace_lines() {
    assert_eq!(strip_blank_lines("a\n\n  \nb\n"), "a\nb\n");
    assert_eq!(strip_blank_lines("\n\n"), "");
}

#[test]
fn SlotTemplate___render___replaces_placeholders() {
    let template = SlotTemplate::new("head\n{{prototypes}}\nmid {{request_parser}} tail");
    let slots = slots(&[("prototypes", "P"), ("request_parser", "R")]);

    let rendered = template.render(&slots).unwrap();

    assert_eq!(rendered, "head\nP\nmid R tail");
}

#[test]
fn SlotTemplate___render___unknown_placeholder___fails() {
    let template = SlotTemplate::new("{{nope}}");

    let err = template.render(&Slots::new()).unwrap_err();

    assert!(matches!(err, GenerateError::Template(ref msg) if msg.contains("{{nope}}")));
}

#[test]
fn SlotTemplate___render___leaves_non_placeholder_braces() {
    let template = SlotTemplate::new("int x[1][1] = {{0}}; {{ a b }} {{slot}}");
    let slots = slots(&[("slot", "S")]);

    let rendered = template.render(&slots).unwrap();

    assert_eq!(rendered, "int x[1][1] = {{0}}; {{ a b }} S");
}

#[test]
fn SlotTemplate___render___triple_braces___fill_inner_placeholder() {
    let template = SlotTemplate::new("{{{prototypes}}}");
    let slots = slots(&[("prototypes", "P")]);

    let rendered = template.render(&slots).unwrap();

    assert_eq!(rendered, "{P}");
    assert_eq!(template.placeholders(), vec!["prototypes"]);
}

#[test]
fn SlotTemplate___render___triple_braces_unknown_slot___fails() {
    let template = SlotTemplate::new("{{{nope}}}");

    let err = template.render(&Slots::new()).unwrap_err();

    assert!(matches!(err, GenerateError::Template(ref msg) if msg.contains("{{nope}}")));
}

#[test]
fn SlotTemplate___default_converter___has_every_slot_once() {
    let template = SlotTemplate::default_converter();

    assert_eq!(
        template.placeholders(),
        vec![
            PROTOTYPES,
            EXTERNAL_INITIALIZE,
            "request_parser",
            "event_init",
            "response_init",
            "event_body_stringify",
            "response_body_stringify",
        ]
    );
}

#[test]
fn PlainRenderer___render___concatenates() {
    let slots = slots(&[("a", "1"), ("b", "2")]);

    assert_eq!(PlainRenderer.render(&slots).unwrap(), "1\n2");
}

#[test]
fn assemble___fills_slots_in_output_order() {
    let api = RuntimeApi::default();
    let backend = QuickJsBackend::new(&api, 2);
    let unit = GeneratedUnit {
        functions: vec![Function {
            kind: FunctionKind::Serializer,
            type_name: "Source".to_string(),
            name: "stringify_property_Source".to_string(),
            returns: TypeRef::Value,
            params: vec![Param::new(TypeRef::Record("Source".to_string()), "value")],
            body: vec![Stmt::Return(Expr::ident("object"))],
        }],
        blocks: vec![DispatchBlock {
            kind: DispatchKind::EventInit,
            branches: vec![DispatchBranch {
                message: "StoppedEvent".to_string(),
                wire_name: "stopped".to_string(),
                body: vec![Stmt::Return(Expr::Null)],
            }],
        }],
    };

    let slots = assemble(&unit, &backend);

    assert_eq!(
        slots.names().collect::<Vec<_>>(),
        vec![
            PROTOTYPES,
            EXTERNAL_INITIALIZE,
            "request_parser",
            "event_init",
            "response_init",
            "event_body_stringify",
            "response_body_stringify",
        ]
    );
    assert_eq!(
        slots.get(PROTOTYPES),
        Some("static JSValue stringify_property_Source(JSContext* ctx, Source* value);")
    );
    assert_eq!(slots.get("request_parser"), Some(""));
    assert!(
        slots
            .get("event_init")
            .is_some_and(|code| code.contains("strcmp(event, \"stopped\")"))
    );
}
