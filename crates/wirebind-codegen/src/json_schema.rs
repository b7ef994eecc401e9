//! JSON Schema generation from a collected schema.
//!
//! Documents the wire shapes the generated marshallers accept and produce.

use crate::naming;
use serde_json::{Value, json};
use wirebind_core::{CompositeType, FieldType, MessageCategory, Schema};

/// Generate a Draft-07 JSON Schema with one definition per composite type.
///
/// Message types carry their wire name under `x-wire-name`.
pub fn generate_json_schema(schema: &Schema) -> Value {
    let mut definitions = serde_json::Map::new();

    for category in [
        MessageCategory::Request,
        MessageCategory::Response,
        MessageCategory::Event,
    ] {
        for message in schema.messages(category) {
            let mut definition = generate_type_schema(message);
            definition["x-wire-name"] = json!(naming::wire_name(&message.name, category));
            definitions.entry(message.name.clone()).or_insert(definition);
        }
    }

    for ty in &schema.others {
        definitions
            .entry(ty.name.clone())
            .or_insert_with(|| generate_type_schema(ty));
    }

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "definitions": definitions,
    })
}

/// Generate JSON Schema for a single composite type.
fn generate_type_schema(ty: &CompositeType) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for field in &ty.fields {
        properties.insert(field.name.clone(), generate_field_schema(&field.ty));

        if !field.optional {
            required.push(field.name.clone());
        }
    }

    let mut schema = json!({
        "type": "object",
        "properties": properties,
    });

    if !required.is_empty() {
        schema["required"] = json!(required);
    }

    schema
}

/// Generate JSON Schema for a field type.
fn generate_field_schema(ty: &FieldType) -> Value {
    match ty {
        FieldType::String => json!({"type": "string"}),
        FieldType::Boolean => json!({"type": "boolean"}),
        FieldType::Int64 => json!({"type": "integer"}),
        FieldType::Double => json!({"type": "number"}),
        FieldType::Array { element } => json!({
            "type": "array",
            "items": generate_field_schema(element),
        }),
        FieldType::Reference { name } => json!({
            "$ref": format!("#/definitions/{}", name)
        }),
    }
}
