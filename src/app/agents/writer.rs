use minijinja::context;
use tracing::debug;

use super::prompt::{self, PromptRenderer};
use crate::domain::{AppError, FaqItem, Product, Question};
use crate::ports::{DEFAULT_SYSTEM_ROLE, LlmClient};

/// Answers user questions from product data.
pub struct WriterAgent<'a, L: LlmClient + ?Sized> {
    llm: &'a L,
    prompts: &'a PromptRenderer,
}

impl<'a, L: LlmClient + ?Sized> WriterAgent<'a, L> {
    pub fn new(llm: &'a L, prompts: &'a PromptRenderer) -> Self {
        Self { llm, prompts }
    }

    /// Answer the first `limit` questions, one completion each.
    pub fn answer_faqs(
        &self,
        product: &Product,
        questions: &[Question],
        limit: usize,
    ) -> Result<Vec<FaqItem>, AppError> {
        let product_json = product.to_json_string();

        questions
            .iter()
            .take(limit)
            .map(|question| -> Result<FaqItem, AppError> {
                let prompt = self.prompts.render(
                    prompt::FAQ_ANSWER,
                    context! {
                        product => product,
                        product_json => &product_json,
                        question => &question.text,
                    },
                )?;
                debug!(question = %question.text, "answering question");
                Ok(FaqItem {
                    question: question.text.clone(),
                    answer: self.llm.generate(&prompt, DEFAULT_SYSTEM_ROLE),
                    category: question.category.clone(),
                })
            })
            .collect()
    }
}
