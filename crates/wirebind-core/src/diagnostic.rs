//! Non-fatal findings recorded during validation and generation
//!
//! A generation run never aborts on a structural problem. Fields whose reference
//! cannot be resolved are skipped, messages without a correlate get no dispatch
//! branch, and so on. Each such omission is recorded as a [`Diagnostic`] so that
//! callers can inspect, print, or (in strict mode) reject the result.

use crate::schema::MessageCategory;
use thiserror::Error;

/// A single generation or validation finding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A field references a type that is not declared in the schema
    #[error("{owner}.{field}: referenced type `{target}` is not declared; field skipped")]
    UnresolvedReference {
        owner: String,
        field: String,
        target: String,
    },

    /// A message has no Arguments/Body type whose base name it contains
    #[error("{category} `{message}` has no correlated {suffix} type; no dispatch branch emitted")]
    MissingCorrelate {
        category: MessageCategory,
        message: String,
        suffix: &'static str,
    },

    /// More than one Arguments/Body type matched a message name
    #[error("{category} `{message}` matches several types ({}); using `{chosen}`", .others.join(", "))]
    AmbiguousCorrelate {
        category: MessageCategory,
        message: String,
        chosen: String,
        others: Vec<String>,
    },

    /// Array fields are serialized but never parsed
    #[error("{owner}.{field}: array fields are not parsed; zero-filled instead")]
    UnparsedArray { owner: String, field: String },

    /// Arrays of arrays have no native layout
    #[error("{owner}.{field}: nested arrays are not supported; field skipped")]
    NestedArray { owner: String, field: String },

    /// Two types share a name
    #[error("type `{name}` is declared more than once")]
    DuplicateTypeName { name: String },

    /// Two fields of one type share a name
    #[error("{owner}.{field}: field is declared more than once")]
    DuplicateFieldName { owner: String, field: String },

    /// A type name is not a valid identifier
    #[error("type name `{name}` is not a valid identifier")]
    InvalidTypeName { name: String },

    /// A field name is not a valid identifier
    #[error("{owner}.{field}: field name is not a valid identifier")]
    InvalidFieldName { owner: String, field: String },
}

/// Ordered, duplicate-free collection of diagnostics.
///
/// Every newly recorded diagnostic is also logged at `WARN` level.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Exact repeats are ignored.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.entries.contains(&diagnostic) {
            return;
        }
        tracing::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Consume the collection, returning diagnostics in recording order.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        for diagnostic in iter {
            self.push(diagnostic);
        }
    }
}
