//! Type descriptor model for collected protocol schemas
//!
//! A [`Schema`] is the read-only input of a generation run. It is produced by an
//! external collector (or loaded from a JSON/TOML document) and holds four ordered
//! lists of [`CompositeType`]: requests, responses, events, and every other type
//! reachable from them (Arguments, Body, and nested record types).
//!
//! # Serialized form
//!
//! ```json
//! {
//!   "requests": [{ "name": "LaunchRequest", "fields": [] }],
//!   "others": [{
//!     "name": "LaunchArguments",
//!     "fields": [
//!       { "name": "noDebug", "type": { "kind": "boolean" }, "optional": true },
//!       { "name": "source", "type": { "kind": "reference", "name": "Source" } },
//!       { "name": "lines", "type": { "kind": "array", "element": { "kind": "int64" } } }
//!     ]
//!   }]
//! }
//! ```

use crate::diagnostic::Diagnostic;
use crate::error::GenerateResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Primitive field kinds with a direct native representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Owned heap string (`char*`)
    String,
    /// 64-bit float
    Double,
    /// 64-bit signed integer
    Int64,
    /// Boolean stored as an integer flag
    Boolean,
}

impl ScalarKind {
    /// Lowercase kind name used in diagnostics and schema documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Double => "double",
            ScalarKind::Int64 => "int64",
            ScalarKind::Boolean => "boolean",
        }
    }
}

/// The type of one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldType {
    String,
    Double,
    Int64,
    Boolean,

    /// Reference to another composite type by name.
    Reference { name: String },

    /// Array of another field type.
    Array { element: Box<FieldType> },
}

impl FieldType {
    /// Create a reference to the named composite type.
    pub fn reference(name: impl Into<String>) -> Self {
        FieldType::Reference { name: name.into() }
    }

    /// Create an array of `element`.
    pub fn array(element: FieldType) -> Self {
        FieldType::Array {
            element: Box::new(element),
        }
    }

    /// Returns the scalar kind for primitive types.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            FieldType::String => Some(ScalarKind::String),
            FieldType::Double => Some(ScalarKind::Double),
            FieldType::Int64 => Some(ScalarKind::Int64),
            FieldType::Boolean => Some(ScalarKind::Boolean),
            FieldType::Reference { .. } | FieldType::Array { .. } => None,
        }
    }

    /// Whether the native member is a single pointer that serializers skip
    /// when null. Arrays are bounded by their length member instead.
    pub fn is_null_guarded(&self) -> bool {
        matches!(self, FieldType::String | FieldType::Reference { .. })
    }
}

/// One member of a composite type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name, used both as the native member name and the wire property name.
    pub name: String,

    /// Field type.
    #[serde(rename = "type")]
    pub ty: FieldType,

    /// Whether the wire property may be absent.
    #[serde(default)]
    pub optional: bool,
}

impl FieldDescriptor {
    /// Create a required field.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// Mark the field as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A named record type with ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeType {
    /// Type name, exactly as used for the native record.
    pub name: String,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl CompositeType {
    /// Create a composite type with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// Top-level message categories of the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCategory {
    Request,
    Response,
    Event,
}

impl MessageCategory {
    /// Suffix carried by message type names of this category.
    pub fn suffix(&self) -> &'static str {
        match self {
            MessageCategory::Request => "Request",
            MessageCategory::Response => "Response",
            MessageCategory::Event => "Event",
        }
    }

    /// Suffix carried by the payload type correlated with messages of this category.
    pub fn correlate_suffix(&self) -> &'static str {
        match self {
            MessageCategory::Request => "Arguments",
            MessageCategory::Response | MessageCategory::Event => "Body",
        }
    }
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageCategory::Request => write!(f, "request"),
            MessageCategory::Response => write!(f, "response"),
            MessageCategory::Event => write!(f, "event"),
        }
    }
}

/// The collected schema: the lookup domain of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub requests: Vec<CompositeType>,

    #[serde(default)]
    pub responses: Vec<CompositeType>,

    #[serde(default)]
    pub events: Vec<CompositeType>,

    /// Every other referenced type, including Arguments and Body types.
    #[serde(default)]
    pub others: Vec<CompositeType>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a schema from a JSON document.
    pub fn from_json(content: &str) -> GenerateResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a schema from a TOML document.
    pub fn from_toml(content: &str) -> GenerateResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Message types of the given category, in schema order.
    pub fn messages(&self, category: MessageCategory) -> &[CompositeType] {
        match category {
            MessageCategory::Request => &self.requests,
            MessageCategory::Response => &self.responses,
            MessageCategory::Event => &self.events,
        }
    }

    /// Arguments types (members of `others` ending in `Arguments`).
    pub fn arguments(&self) -> impl Iterator<Item = &CompositeType> {
        self.others.iter().filter(|t| t.name.ends_with("Arguments"))
    }

    /// Body types (members of `others` ending in `Body`).
    pub fn bodies(&self) -> impl Iterator<Item = &CompositeType> {
        self.others.iter().filter(|t| t.name.ends_with("Body"))
    }

    /// Candidate correlates for messages of `category`.
    pub fn correlates(&self, category: MessageCategory) -> Vec<&CompositeType> {
        match category {
            MessageCategory::Request => self.arguments().collect(),
            MessageCategory::Response | MessageCategory::Event => self.bodies().collect(),
        }
    }

    /// Resolve a referenced type name; the first declaration wins.
    pub fn resolve(&self, name: &str) -> Option<&CompositeType> {
        self.others.iter().find(|t| t.name == name)
    }

    /// Iterate over every composite type in the schema.
    pub fn all_types(&self) -> impl Iterator<Item = &CompositeType> {
        self.requests
            .iter()
            .chain(&self.responses)
            .chain(&self.events)
            .chain(&self.others)
    }

    /// Report structural problems without failing.
    ///
    /// Checks identifier validity, duplicate type and field names, and references
    /// (including array element references) that do not resolve.
    pub fn validate(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut seen_types = HashSet::new();

        for ty in self.all_types() {
            if !is_identifier(&ty.name) {
                diagnostics.push(Diagnostic::InvalidTypeName {
                    name: ty.name.clone(),
                });
            }
            if !seen_types.insert(ty.name.as_str()) {
                diagnostics.push(Diagnostic::DuplicateTypeName {
                    name: ty.name.clone(),
                });
            }

            let mut seen_fields = HashSet::new();
            for field in &ty.fields {
                if !is_identifier(&field.name) {
                    diagnostics.push(Diagnostic::InvalidFieldName {
                        owner: ty.name.clone(),
                        field: field.name.clone(),
                    });
                }
                if !seen_fields.insert(field.name.as_str()) {
                    diagnostics.push(Diagnostic::DuplicateFieldName {
                        owner: ty.name.clone(),
                        field: field.name.clone(),
                    });
                }

                let mut field_type = &field.ty;
                while let FieldType::Array { element } = field_type {
                    field_type = element;
                }
                if let FieldType::Reference { name } = field_type {
                    if self.resolve(name).is_none() {
                        diagnostics.push(Diagnostic::UnresolvedReference {
                            owner: ty.name.clone(),
                            field: field.name.clone(),
                            target: name.clone(),
                        });
                    }
                }
            }
        }

        diagnostics
    }
}

/// Whether `name` is a valid C identifier.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
