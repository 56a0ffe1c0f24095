use minijinja::context;

use super::prompt::{self, PromptRenderer};
use crate::domain::{AppError, Competitor, Product};
use crate::ports::LlmClient;

const SYSTEM_ROLE: &str = "You are a creative product designer.";

/// Invents a fictional competitor for comparison pages.
pub struct ComparisonAgent<'a, L: LlmClient + ?Sized> {
    llm: &'a L,
    prompts: &'a PromptRenderer,
}

impl<'a, L: LlmClient + ?Sized> ComparisonAgent<'a, L> {
    pub fn new(llm: &'a L, prompts: &'a PromptRenderer) -> Self {
        Self { llm, prompts }
    }

    pub fn create_competitor(&self, product: &Product) -> Result<Competitor, AppError> {
        let prompt = self.prompts.render(prompt::COMPETITOR, context! { product => product })?;
        Ok(Competitor::new(self.llm.generate_json(&prompt, SYSTEM_ROLE)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::{FakeLlmClient, sample_product};

    #[test]
    fn competitor_comes_from_json_reply() {
        let llm = FakeLlmClient::new().respond_to(
            "fictional competitor",
            "```json\n{\"Name\": \"RadiantC\", \"Price\": \"₹899\", \"Ingredients\": [\"Vitamin C\"]}\n```",
        );
        let prompts = PromptRenderer::new().unwrap();

        let competitor = ComparisonAgent::new(&llm, &prompts).create_competitor(&sample_product()).unwrap();

        assert_eq!(competitor.name(), "RadiantC");
        assert_eq!(competitor.price(), "₹899");
        assert_eq!(llm.calls()[0].system_role, SYSTEM_ROLE);
        assert!(llm.calls()[0].prompt.contains("(priced at ₹699)"));
    }

    #[test]
    fn parse_failure_is_kept_as_competitor_record() {
        let llm = FakeLlmClient::new().with_default("I'd rather not.");
        let prompts = PromptRenderer::new().unwrap();

        let competitor = ComparisonAgent::new(&llm, &prompts).create_competitor(&sample_product()).unwrap();

        assert_eq!(competitor.as_value()["error"], json!("Failed to parse JSON"));
        assert_eq!(competitor.name(), "Generic Brand");
    }
}
