use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::placeholder::{self, Placeholder};
use super::{Context, LogicBlocks, Node};
use crate::domain::AppError;

/// Registry of named templates and the slot resolver that renders them.
///
/// Registration needs `&mut self` and rendering `&self`, so a shared engine is
/// read-only for the duration of every render.
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
    registry: HashMap<String, Node>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `structure` under `name`, replacing any earlier registration.
    pub fn register_template(&mut self, name: impl Into<String>, structure: impl Into<Node>) {
        let name = name.into();
        if self.registry.insert(name.clone(), structure.into()).is_some() {
            debug!(template = %name, "replaced registered template");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    pub fn template(&self, name: &str) -> Option<&Node> {
        self.registry.get(name)
    }

    /// Registered template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.registry.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Render template `name`, resolving every placeholder slot.
    ///
    /// Fails only when `name` is not registered. Missing context keys render as
    /// `MISSING: <key>` markers.
    pub fn render<B>(&self, name: &str, context: &Context, blocks: &B) -> Result<Node, AppError>
    where
        B: LogicBlocks + ?Sized,
    {
        let template =
            self.registry.get(name).ok_or_else(|| AppError::TemplateNotFound(name.to_string()))?;

        debug!(template = name, "rendering template");
        Ok(resolve(template, context, blocks))
    }
}

fn resolve<B: LogicBlocks + ?Sized>(node: &Node, context: &Context, blocks: &B) -> Node {
    match node {
        Node::Sequence(items) => {
            Node::Sequence(items.iter().map(|item| resolve(item, context, blocks)).collect())
        }
        Node::Mapping(entries) => Node::Mapping(
            entries.iter().map(|(key, item)| (key.clone(), resolve(item, context, blocks))).collect(),
        ),
        Node::Literal(Value::String(text)) => match placeholder::parse(text) {
            Some(slot) => resolve_slot(slot, context, blocks),
            None => node.clone(),
        },
        Node::Literal(value @ (Value::Array(_) | Value::Object(_))) => {
            resolve(&Node::from(value.clone()), context, blocks)
        }
        Node::Literal(_) => node.clone(),
    }
}

fn resolve_slot<B: LogicBlocks + ?Sized>(slot: Placeholder<'_>, context: &Context, blocks: &B) -> Node {
    let key = match slot {
        Placeholder::Block { name, key } => {
            // Block output is inserted as-is, never re-resolved.
            if let Some(value) = blocks.invoke(name, context) {
                return Node::from(value);
            }
            debug!(block = name, "no logic block registered; falling back to context");
            key
        }
        Placeholder::Key(key) => key,
    };

    match context.get(key) {
        Some(value) => Node::from(value.clone()),
        None => {
            debug!(key, "placeholder has no context value");
            Node::from(placeholder::missing_marker(key))
        }
    }
}
