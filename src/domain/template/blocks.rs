use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use super::Context;

/// Capability for resolving `BLOCK:<name>` placeholders.
pub trait LogicBlocks {
    /// Compute the value of block `name` from the full render context.
    ///
    /// Returns `None` when no block with that name exists.
    fn invoke(&self, name: &str, context: &Context) -> Option<Value>;
}

/// Block source with no blocks; every reference falls back to context lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBlocks;

impl LogicBlocks for NoBlocks {
    fn invoke(&self, _name: &str, _context: &Context) -> Option<Value> {
        None
    }
}

type BlockFn = dyn Fn(&Context) -> Value + Send + Sync;

/// Registry of named logic-block functions.
#[derive(Default)]
pub struct BlockRegistry {
    blocks: BTreeMap<String, Box<BlockFn>>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block, replacing any previous block with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, block: F) -> &mut Self
    where
        F: Fn(&Context) -> Value + Send + Sync + 'static,
    {
        self.blocks.insert(name.into(), Box::new(block));
        self
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with<F>(mut self, name: impl Into<String>, block: F) -> Self
    where
        F: Fn(&Context) -> Value + Send + Sync + 'static,
    {
        self.register(name, block);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl fmt::Debug for BlockRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockRegistry").field("blocks", &self.blocks.keys().collect::<Vec<_>>()).finish()
    }
}

impl LogicBlocks for BlockRegistry {
    fn invoke(&self, name: &str, context: &Context) -> Option<Value> {
        self.blocks.get(name).map(|block| block(context))
    }
}

impl<B: LogicBlocks + ?Sized> LogicBlocks for &B {
    fn invoke(&self, name: &str, context: &Context) -> Option<Value> {
        (**self).invoke(name, context)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn no_blocks_never_resolves() {
        assert_eq!(NoBlocks.invoke("anything", &Context::new()), None);
    }

    #[test]
    fn registry_invokes_block_with_context() {
        let registry = BlockRegistry::new().with("shout", |ctx: &Context| {
            let name = ctx.get("name").and_then(Value::as_str).unwrap_or_default();
            json!(name.to_uppercase())
        });

        let mut ctx = Context::new();
        ctx.insert("name".into(), json!("glow"));

        assert_eq!(registry.invoke("shout", &ctx), Some(json!("GLOW")));
        assert_eq!(registry.invoke("whisper", &ctx), None);
    }

    #[test]
    fn later_registration_replaces_block() {
        let mut registry = BlockRegistry::new();
        registry.register("v", |_: &Context| json!(1)).register("v", |_: &Context| json!(2));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.invoke("v", &Context::new()), Some(json!(2)));
    }

    #[test]
    fn debug_lists_block_names_only() {
        let registry = BlockRegistry::new().with("b", |_: &Context| Value::Null).with("a", |_: &Context| Value::Null);
        assert_eq!(format!("{:?}", registry), r#"BlockRegistry { blocks: ["a", "b"] }"#);
        assert_eq!(registry.names().collect::<Vec<_>>(), ["a", "b"]);
    }
}
