use serde::Serialize;

use crate::domain::template::placeholder::{self, Placeholder};
use crate::domain::{AppError, Node, TemplateEngine};

/// A registered template and the inputs it reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateDetail {
    pub name: String,
    pub structure: Node,
    /// Context keys read by plain slots, first occurrence order.
    pub context_keys: Vec<String>,
    /// Logic blocks referenced, first occurrence order.
    pub blocks: Vec<String>,
}

/// Registered template names, sorted.
pub fn list(engine: &TemplateEngine) -> Vec<String> {
    engine.names().into_iter().map(ToOwned::to_owned).collect()
}

pub fn show(engine: &TemplateEngine, name: &str) -> Result<TemplateDetail, AppError> {
    let structure =
        engine.template(name).cloned().ok_or_else(|| AppError::TemplateNotFound(name.to_string()))?;

    let mut context_keys = Vec::new();
    let mut blocks = Vec::new();
    for key in structure.placeholders() {
        let (target, entry) = match placeholder::classify(&key) {
            Placeholder::Block { name, .. } => (&mut blocks, name.to_string()),
            Placeholder::Key(key) => (&mut context_keys, key.to_string()),
        };
        if !target.contains(&entry) {
            target.push(entry);
        }
    }

    Ok(TemplateDetail { name: name.to_string(), structure, context_keys, blocks })
}
