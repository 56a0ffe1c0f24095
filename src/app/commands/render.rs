use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::logic_blocks::standard_blocks;
use crate::domain::{AppError, Context, Node, TemplateEngine};

/// Options for rendering a single template.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub template: String,
    /// JSON object file supplying the render context. Omitted means empty.
    pub context: Option<PathBuf>,
}

/// Render one registered template with the standard logic blocks.
pub fn execute(engine: &TemplateEngine, options: RenderOptions) -> Result<Node, AppError> {
    let context = match &options.context {
        Some(path) => read_context(path)?,
        None => Context::new(),
    };
    engine.render(&options.template, &context, &standard_blocks())
}

fn read_context(path: &Path) -> Result<Context, AppError> {
    if !path.exists() {
        return Err(AppError::InputNotFound(path.to_path_buf()));
    }

    let what = || format!("context file {}", path.display());
    let value: Value = serde_json::from_str(&fs::read_to_string(path)?)
        .map_err(|e| AppError::parse_error(what(), e))?;

    match value {
        Value::Object(context) => Ok(context),
        _ => Err(AppError::parse_error(what(), "expected a JSON object")),
    }
}
