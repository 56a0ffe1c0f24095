pub mod config;
mod error;
pub mod logic_blocks;
pub mod product;
pub mod template;

pub use config::{AppConfig, GenerateConfig, LlmApiConfig};
pub use error::AppError;
pub use product::{Competitor, FaqItem, Product, Question};
pub use template::{BlockRegistry, Context, LogicBlocks, NoBlocks, Node, TemplateEngine};
