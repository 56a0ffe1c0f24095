//! Stateless LLM wrappers that produce the raw material for page templates.

mod comparison;
pub mod prompt;
mod question;
mod writer;

pub use comparison::ComparisonAgent;
pub use prompt::PromptRenderer;
pub use question::QuestionAgent;
pub use writer::WriterAgent;
