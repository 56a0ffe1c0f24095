pub mod embedded_template_source;
pub mod file_template_source;
pub mod llm_client_http;

pub use embedded_template_source::EmbeddedTemplateSource;
pub use file_template_source::FileTemplateSource;
pub use llm_client_http::HttpLlmClient;
