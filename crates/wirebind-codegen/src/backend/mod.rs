//! Rendering of the fragment IR into target source text.

mod quickjs;

pub use quickjs::QuickJsBackend;

use crate::fragment::{DispatchBlock, Function};

/// A target language renderer.
///
/// Implementations are pure: the same fragment always renders to the same text.
pub trait Backend {
    /// Forward declaration of a generated function.
    fn prototype(&self, function: &Function) -> String;

    /// Full definition of a generated function.
    fn render_function(&self, function: &Function) -> String;

    /// All branches of a dispatch block, indented one level for placement
    /// inside a template-provided function body.
    fn render_block(&self, block: &DispatchBlock) -> String;
}
