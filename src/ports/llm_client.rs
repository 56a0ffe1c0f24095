//! LLM completion client port definition.

use serde_json::{Value, json};
use tracing::warn;

/// System role used when the caller has no specific persona.
pub const DEFAULT_SYSTEM_ROLE: &str = "You are a helpful AI assistant.";

const JSON_INSTRUCTION: &str = "\n\nOutput strictly valid JSON only.";

/// Port for text-completion calls.
///
/// Failures are reported in-band: implementations return an error-shaped
/// string instead of a structured error.
pub trait LlmClient {
    /// Complete `prompt` under the given system role.
    fn generate(&self, prompt: &str, system_role: &str) -> String;

    /// Complete `prompt` and parse the reply as JSON.
    ///
    /// Markdown code fences are stripped before parsing. Unparseable replies
    /// become `{"error": "Failed to parse JSON", "raw": <reply>}`.
    fn generate_json(&self, prompt: &str, system_role: &str) -> Value {
        let reply = self.generate(&format!("{prompt}{JSON_INSTRUCTION}"), system_role);
        parse_json_reply(&reply)
    }
}

impl<C: LlmClient + ?Sized> LlmClient for &C {
    fn generate(&self, prompt: &str, system_role: &str) -> String {
        (**self).generate(prompt, system_role)
    }
}

impl<C: LlmClient + ?Sized> LlmClient for Box<C> {
    fn generate(&self, prompt: &str, system_role: &str) -> String {
        (**self).generate(prompt, system_role)
    }
}

fn parse_json_reply(reply: &str) -> Value {
    let content = reply.replace("```json", "").replace("```", "");
    let content = content.trim();

    match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "LLM reply is not valid JSON");
            json!({"error": "Failed to parse JSON", "raw": content})
        }
    }
}

/// Client used when no API key is configured.
#[derive(Debug, Clone, Default)]
pub struct MockLlmClient;

impl MockLlmClient {
    pub const RESPONSE: &'static str = "MOCK RESPONSE: LLM API Key not found.";
}

impl LlmClient for MockLlmClient {
    fn generate(&self, prompt: &str, _system_role: &str) -> String {
        tracing::debug!(prompt_len = prompt.len(), "mock LLM client answering");
        Self::RESPONSE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(&'static str);

    impl LlmClient for Canned {
        fn generate(&self, _prompt: &str, _system_role: &str) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn parses_plain_json_reply() {
        let value = Canned(r#"{"questions": []}"#).generate_json("p", "r");
        assert_eq!(value, json!({"questions": []}));
    }

    #[test]
    fn strips_markdown_fences() {
        let value = Canned("```json\n{\"Name\": \"RadiantC\"}\n```").generate_json("p", "r");
        assert_eq!(value, json!({"Name": "RadiantC"}));
    }

    #[test]
    fn unparseable_reply_becomes_error_object() {
        let value = Canned("  Sorry, I cannot do that.  ").generate_json("p", "r");
        assert_eq!(value, json!({"error": "Failed to parse JSON", "raw": "Sorry, I cannot do that."}));
    }

    #[test]
    fn json_instruction_is_appended_to_prompt() {
        struct Echo;
        impl LlmClient for Echo {
            fn generate(&self, prompt: &str, _system_role: &str) -> String {
                serde_json::to_string(prompt).unwrap()
            }
        }

        let value = Echo.generate_json("List things.", DEFAULT_SYSTEM_ROLE);
        assert_eq!(value, json!("List things.\n\nOutput strictly valid JSON only."));
    }

    #[test]
    fn mock_client_reports_missing_key() {
        assert_eq!(MockLlmClient.generate("anything", DEFAULT_SYSTEM_ROLE), MockLlmClient::RESPONSE);
        assert_eq!(
            MockLlmClient.generate_json("anything", DEFAULT_SYSTEM_ROLE)["error"],
            json!("Failed to parse JSON")
        );
    }
}
