use tracing::debug;

use crate::domain::{AppConfig, AppError, TemplateEngine};
use crate::ports::{LlmClient, TemplateSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<L: LlmClient> {
    config: AppConfig,
    engine: TemplateEngine,
    llm: L,
}

impl<L: LlmClient> AppContext<L> {
    /// Create a new application context.
    pub fn new(config: AppConfig, engine: TemplateEngine, llm: L) -> Self {
        Self { config, engine, llm }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the template engine.
    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Get a reference to the LLM client.
    pub fn llm(&self) -> &L {
        &self.llm
    }
}

/// Build an engine holding every template from `sources`.
///
/// Sources register in order, so a later source replaces same-named
/// templates from an earlier one.
pub fn build_engine(sources: &[&dyn TemplateSource]) -> Result<TemplateEngine, AppError> {
    let mut engine = TemplateEngine::new();
    for source in sources {
        for definition in source.templates()? {
            debug!(template = %definition.name, "registering template");
            engine.register_template(definition.name, definition.structure);
        }
    }
    Ok(engine)
}
