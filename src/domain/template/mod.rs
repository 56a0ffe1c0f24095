//! Structural template engine.
//!
//! Templates are nested [`Node`] trees whose string leaves may be placeholder
//! slots (`{{ key }}` or `{{ BLOCK:name }}`). Rendering rebuilds the tree with
//! every slot resolved against a [`Context`] and a [`LogicBlocks`] source.

mod blocks;
mod engine;
mod node;
pub mod placeholder;

pub use blocks::{BlockRegistry, LogicBlocks, NoBlocks};
pub use engine::TemplateEngine;
pub use node::Node;

/// Per-render mapping from placeholder key to value.
pub type Context = serde_json::Map<String, serde_json::Value>;
