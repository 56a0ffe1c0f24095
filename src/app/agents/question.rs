use minijinja::context;
use serde_json::Value;
use tracing::{debug, warn};

use super::prompt::{self, PromptRenderer};
use crate::domain::{AppError, Product, Question};
use crate::ports::LlmClient;

const SYSTEM_ROLE: &str = "You are a customer support simulation agent.";

/// Generates simulated user questions about a product.
pub struct QuestionAgent<'a, L: LlmClient + ?Sized> {
    llm: &'a L,
    prompts: &'a PromptRenderer,
}

impl<'a, L: LlmClient + ?Sized> QuestionAgent<'a, L> {
    pub fn new(llm: &'a L, prompts: &'a PromptRenderer) -> Self {
        Self { llm, prompts }
    }

    /// Ask for `count` questions. Replies without a usable `questions` list
    /// yield an empty result.
    pub fn generate_questions(&self, product: &Product, count: usize) -> Result<Vec<Question>, AppError> {
        let prompt = self.prompts.render(
            prompt::QUESTIONS,
            context! {
                count => count,
                product => product,
                product_json => product.to_json_string(),
            },
        )?;

        let reply = self.llm.generate_json(&prompt, SYSTEM_ROLE);
        let Some(items) = reply.get("questions").and_then(Value::as_array) else {
            warn!(reply = %reply, "question reply has no questions list");
            return Ok(Vec::new());
        };

        let questions: Vec<Question> = items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect();
        debug!(requested = count, received = questions.len(), "generated questions");
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::{FakeLlmClient, sample_product};

    #[test]
    fn parses_questions_from_reply() {
        let llm = FakeLlmClient::new().respond_to(
            "user questions",
            json!({"questions": [
                {"category": "Usage", "text": "When should I apply it?"},
                {"category": "Safety", "text": "Is it safe for sensitive skin?"},
            ]})
            .to_string(),
        );
        let prompts = PromptRenderer::new().unwrap();

        let questions =
            QuestionAgent::new(&llm, &prompts).generate_questions(&sample_product(), 2).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].category, "Safety");
        let calls = llm.calls();
        assert!(calls[0].prompt.starts_with("Generate exactly 2 user questions about GlowBoost Vitamin C Serum."));
        assert!(calls[0].prompt.ends_with("Output strictly valid JSON only."));
        assert_eq!(calls[0].system_role, SYSTEM_ROLE);
    }

    #[test]
    fn skips_malformed_entries() {
        let llm = FakeLlmClient::new().respond_to(
            "user questions",
            json!({"questions": [{"category": "Usage"}, {"text": "No category?"}, 42]}).to_string(),
        );
        let prompts = PromptRenderer::new().unwrap();

        let questions =
            QuestionAgent::new(&llm, &prompts).generate_questions(&sample_product(), 3).unwrap();

        assert_eq!(questions, [Question { category: String::new(), text: "No category?".into() }]);
    }

    #[test]
    fn unparseable_reply_yields_no_questions() {
        let llm = FakeLlmClient::new();
        let prompts = PromptRenderer::new().unwrap();

        let questions =
            QuestionAgent::new(&llm, &prompts).generate_questions(&sample_product(), 15).unwrap();

        assert!(questions.is_empty());
    }
}
