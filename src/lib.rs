//! copydeck: generate product marketing pages from LLM output and slot templates.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use adapters::{EmbeddedTemplateSource, FileTemplateSource, HttpLlmClient};
use app::commands::{generate as generate_cmd, render as render_cmd, templates as templates_cmd};
use app::{AppContext, build_engine};
use ports::{LlmClient, MockLlmClient, TemplateSource};

pub use app::commands::generate::{GenerateOptions, GenerateResult};
pub use app::commands::render::RenderOptions;
pub use app::commands::templates::TemplateDetail;
pub use domain::{AppError, BlockRegistry, Context, LogicBlocks, NoBlocks, Node, TemplateEngine};

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit configuration file; defaults to `copydeck.toml` in the working directory.
    pub config: Option<PathBuf>,
    /// Extra templates registered after the built-in ones.
    pub templates: Option<PathBuf>,
}

/// Run the full pipeline for one product record and write the page files.
///
/// Uses the HTTP LLM client when `OPENAI_API_KEY` is set, otherwise the mock
/// client.
pub fn generate(
    global: &GlobalOptions,
    options: GenerateOptions,
) -> Result<GenerateResult, AppError> {
    let root = std::env::current_dir()?;
    let config = app::config::load_config(global.config.as_deref(), &root)?;
    let engine = load_engine(global.templates.as_deref())?;

    let llm: Box<dyn LlmClient> = match HttpLlmClient::from_env_with_config(&config.llm)? {
        Some(client) => {
            info!(model = %config.llm.model, "using HTTP LLM client");
            Box::new(client)
        }
        None => {
            warn!("{} not set; using mock LLM responses", adapters::llm_client_http::API_KEY_ENV);
            Box::new(MockLlmClient)
        }
    };

    let ctx = AppContext::new(config, engine, llm);
    generate_cmd::execute(&ctx, options)
}

/// Render one template against a JSON context file.
pub fn render(global: &GlobalOptions, options: RenderOptions) -> Result<Node, AppError> {
    let engine = load_engine(global.templates.as_deref())?;
    render_cmd::execute(&engine, options)
}

/// Names of all registered templates.
pub fn templates_list(global: &GlobalOptions) -> Result<Vec<String>, AppError> {
    let engine = load_engine(global.templates.as_deref())?;
    Ok(templates_cmd::list(&engine))
}

/// A registered template with the context keys and blocks it reads.
pub fn templates_show(global: &GlobalOptions, name: &str) -> Result<TemplateDetail, AppError> {
    let engine = load_engine(global.templates.as_deref())?;
    templates_cmd::show(&engine, name)
}

fn load_engine(templates: Option<&Path>) -> Result<TemplateEngine, AppError> {
    let builtin = EmbeddedTemplateSource::new();
    let custom = templates.map(FileTemplateSource::new);

    let mut sources: Vec<&dyn TemplateSource> = vec![&builtin];
    if let Some(custom) = &custom {
        sources.push(custom);
    }
    build_engine(&sources)
}
