//! Emission Assembler: rendered fragments in named, ordered slots.
//!
//! A [`TemplateRenderer`] turns [`Slots`] into the final artifact. The default
//! [`SlotTemplate`] is the QuickJS converter source with one `{{slot-name}}`
//! placeholder per slot.

use crate::backend::Backend;
use crate::fragment::{DispatchKind, GeneratedUnit};
use wirebind_core::{GenerateError, GenerateResult};

/// Slot holding forward declarations of every generated function.
pub const PROTOTYPES: &str = "prototypes";
/// Slot holding parser and serializer definitions.
pub const EXTERNAL_INITIALIZE: &str = "external_initialize";

const DEFAULT_TEMPLATE: &str = include_str!("../templates/dap_converter.c.tmpl");

/// Named text slots in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots {
    entries: Vec<(String, String)>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slot, keeping its original position when it already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// All slot values in order, without a template.
    pub fn concat(&self) -> String {
        self.entries
            .iter()
            .map(|(_, v)| v.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a generated unit into slots using `backend`.
pub fn assemble(unit: &GeneratedUnit, backend: &dyn Backend) -> Slots {
    let mut slots = Slots::new();

    let prototypes: Vec<String> = unit.functions.iter().map(|f| backend.prototype(f)).collect();
    slots.insert(PROTOTYPES, prototypes.join("\n"));

    let definitions: Vec<String> = unit
        .functions
        .iter()
        .map(|f| backend.render_function(f))
        .collect();
    slots.insert(EXTERNAL_INITIALIZE, definitions.join("\n"));

    for kind in DispatchKind::ALL {
        let rendered = unit
            .block(kind)
            .map(|block| backend.render_block(block))
            .unwrap_or_default();
        slots.insert(kind.slot(), rendered);
    }

    slots
}

/// Remove every line that is empty or whitespace-only.
pub fn strip_blank_lines(text: &str) -> String {
    let mut out = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Turns filled slots into the final artifact.
pub trait TemplateRenderer {
    fn render(&self, slots: &Slots) -> GenerateResult<String>;
}

/// Slot values concatenated in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl TemplateRenderer for PlainRenderer {
    fn render(&self, slots: &Slots) -> GenerateResult<String> {
        Ok(slots.concat())
    }
}

/// Text template with `{{slot-name}}` placeholders.
///
/// Placeholder names are identifiers (letters, digits, `_`, `-`, not starting
/// with a digit). Double braces around anything else, such as a C aggregate
/// initializer `{{0}}`, are copied through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTemplate {
    source: String,
}

impl SlotTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The embedded QuickJS DAP converter template.
    pub fn default_converter() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names in order of appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.source.as_str();
        while let Some((_, name, after)) = next_placeholder(rest) {
            names.extend(name);
            rest = after;
        }
        names
    }
}

impl Default for SlotTemplate {
    fn default() -> Self {
        Self::default_converter()
    }
}

impl TemplateRenderer for SlotTemplate {
    fn render(&self, slots: &Slots) -> GenerateResult<String> {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some((before, name, after)) = next_placeholder(rest) {
            out.push_str(before);
            match name {
                Some(name) => {
                    let value = slots.get(name).ok_or_else(|| {
                        GenerateError::Template(format!("unknown placeholder `{{{{{name}}}}}`"))
                    })?;
                    out.push_str(value);
                }
                None => out.push('{'),
            }
            rest = after;
        }
        out.push_str(rest);

        Ok(out)
    }
}

/// Find the next `{{...}}` in `text`.
///
/// Returns the text before it, the placeholder name when the contents are a
/// valid name, and the text after it. For non-placeholders only the first `{`
/// is consumed, so `{{{name}}}` still finds `{{name}}`.
fn next_placeholder(text: &str) -> Option<(&str, Option<&str>, &str)> {
    let start = text.find("{{")?;
    let before = &text[..start];
    let inner_start = start + 2;

    if let Some(len) = text[inner_start..].find("}}") {
        let inner = &text[inner_start..inner_start + len];
        if is_slot_name(inner) {
            return Some((before, Some(inner), &text[inner_start + len + 2..]));
        }
    }
    Some((before, None, &text[start + 1..]))
}

fn is_slot_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
#[path = "assembler/assembler_tests.rs"]
mod assembler_tests;
