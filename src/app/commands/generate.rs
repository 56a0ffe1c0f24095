//! Full content pipeline: agents, page rendering, file output.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::info;

use crate::app::AppContext;
use crate::app::agents::{ComparisonAgent, PromptRenderer, QuestionAgent, WriterAgent};
use crate::domain::logic_blocks::standard_blocks;
use crate::domain::{AppError, Competitor, Context, FaqItem, Node, Product};
use crate::ports::LlmClient;

pub const PRODUCT_PAGE: &str = "product_page";
pub const COMPARISON_PAGE: &str = "comparison_page";
pub const FAQ_PAGE: &str = "faq_page";

const PRODUCT_PAGE_FILE: &str = "product_page.json";
const FAQ_FILE: &str = "faq.json";
const COMPARISON_PAGE_FILE: &str = "comparison_page.json";

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Structured product record (JSON).
    pub input: PathBuf,
    /// Overrides `generate.output_dir`.
    pub output_dir: Option<PathBuf>,
    /// Overrides `generate.question_count`.
    pub question_count: Option<usize>,
    /// Overrides `generate.faq_count`.
    pub faq_count: Option<usize>,
}

/// Outcome of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Written page files, in write order.
    pub written: Vec<PathBuf>,
    pub questions: usize,
    pub faqs: usize,
    pub competitor: String,
}

pub fn execute<L: LlmClient>(
    ctx: &AppContext<L>,
    options: GenerateOptions,
) -> Result<GenerateResult, AppError> {
    let settings = &ctx.config().generate;
    let output_dir = options.output_dir.unwrap_or_else(|| settings.output_dir.clone());
    let question_count = options.question_count.unwrap_or(settings.question_count);
    let faq_count = options.faq_count.unwrap_or(settings.faq_count);

    let product = read_product(&options.input)?;
    info!(product = %product.name, "generating content");

    let prompts = PromptRenderer::new()?;
    let questions =
        QuestionAgent::new(ctx.llm(), &prompts).generate_questions(&product, question_count)?;
    let faqs = WriterAgent::new(ctx.llm(), &prompts).answer_faqs(&product, &questions, faq_count)?;
    let competitor = ComparisonAgent::new(ctx.llm(), &prompts).create_competitor(&product)?;

    let blocks = standard_blocks();
    let engine = ctx.engine();
    let product_page = engine.render(PRODUCT_PAGE, &product.to_context(), &blocks)?;
    let comparison_page =
        engine.render(COMPARISON_PAGE, &comparison_context(&product, &competitor), &blocks)?;
    let faq_page = engine.render(FAQ_PAGE, &faq_context(&product, &faqs), &blocks)?;

    fs::create_dir_all(&output_dir)?;
    let written = vec![
        write_page(&output_dir, PRODUCT_PAGE_FILE, &product_page)?,
        write_page(&output_dir, FAQ_FILE, &faq_page)?,
        write_page(&output_dir, COMPARISON_PAGE_FILE, &comparison_page)?,
    ];
    info!(dir = %output_dir.display(), files = written.len(), "wrote content pages");

    Ok(GenerateResult {
        written,
        questions: questions.len(),
        faqs: faqs.len(),
        competitor: competitor.name(),
    })
}

pub(crate) fn read_product(path: &Path) -> Result<Product, AppError> {
    if !path.exists() {
        return Err(AppError::InputNotFound(path.to_path_buf()));
    }
    Product::from_json(&fs::read_to_string(path)?)
}

/// Context for the comparison page: headline fields plus both full records
/// for the `comparison_matrix` block.
pub fn comparison_context(product: &Product, competitor: &Competitor) -> Context {
    let comp_name = competitor.name();
    let mut context = Context::new();
    context.insert("title".into(), json!(format!("Comparison: {} vs {}", product.name, comp_name)));
    context.insert("name".into(), json!(product.name));
    context.insert("price".into(), json!(product.price));
    context.insert("comp_name".into(), json!(comp_name));
    context.insert("comp_price".into(), json!(competitor.price()));
    if let Some(side_effects) = &product.side_effects {
        context.insert("side_effects".into(), json!(side_effects));
    }
    context.insert("product".into(), json!(product));
    context.insert("competitor".into(), competitor.as_value().clone());
    context
}

pub fn faq_context(product: &Product, faqs: &[FaqItem]) -> Context {
    let mut context = Context::new();
    context.insert("name".into(), json!(product.name));
    context.insert("faqs".into(), json!(faqs));
    context
}

fn write_page(dir: &Path, file_name: &str, page: &Node) -> Result<PathBuf, AppError> {
    let path = dir.join(file_name);
    let mut content = serde_json::to_string_pretty(page)?;
    content.push('\n');
    fs::write(&path, content)?;
    Ok(path)
}
