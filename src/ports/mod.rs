mod llm_client;
mod template_source;

pub use llm_client::{DEFAULT_SYSTEM_ROLE, LlmClient, MockLlmClient};
pub use template_source::{TemplateDefinition, TemplateSource};
