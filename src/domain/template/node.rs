use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::placeholder;

/// A template or rendered-output node.
///
/// Containers nest arbitrarily. Mapping keys keep their declaration order.
/// `Literal` holds scalars; structured JSON values are normalized into the
/// container variants by `From<Value>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Sequence(Vec<Node>),
    Mapping(IndexMap<String, Node>),
    Literal(Value),
}

impl Node {
    /// Build a mapping node from key/node pairs, keeping their order.
    pub fn mapping<I, K, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: Into<Node>,
    {
        Node::Mapping(entries.into_iter().map(|(k, n)| (k.into(), n.into())).collect())
    }

    /// Build a sequence node.
    pub fn sequence<I, N>(items: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Node::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Literal(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a mapping entry.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Placeholder keys in depth-first traversal order, duplicates included.
    pub fn placeholders(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_placeholders(self, &mut keys);
        keys
    }

    /// Convert into a plain JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Node::Sequence(items) => Value::Array(items.into_iter().map(Node::into_value).collect()),
            Node::Mapping(entries) => {
                Value::Object(entries.into_iter().map(|(k, n)| (k, n.into_value())).collect())
            }
            Node::Literal(value) => value,
        }
    }
}

fn collect_placeholders(node: &Node, keys: &mut Vec<String>) {
    match node {
        Node::Sequence(items) => items.iter().for_each(|item| collect_placeholders(item, keys)),
        Node::Mapping(entries) => entries.values().for_each(|item| collect_placeholders(item, keys)),
        Node::Literal(Value::String(text)) => {
            if let Some(slot) = placeholder::parse(text) {
                keys.push(slot.key().to_string());
            }
        }
        Node::Literal(value @ (Value::Array(_) | Value::Object(_))) => {
            collect_placeholders(&Node::from(value.clone()), keys)
        }
        Node::Literal(_) => {}
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(entries) => {
                Node::Mapping(entries.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
            scalar => Node::Literal(scalar),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        node.into_value()
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Literal(Value::String(text.to_string()))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Literal(Value::String(text))
    }
}
