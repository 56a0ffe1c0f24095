use std::sync::{Arc, Mutex};

use crate::ports::LlmClient;

/// A recorded `generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmCall {
    pub prompt: String,
    pub system_role: String,
}

/// Scripted LLM client. Replies are picked by the first registered prompt
/// substring that matches; unmatched prompts get the default reply.
#[derive(Clone)]
pub struct FakeLlmClient {
    pub calls: Arc<Mutex<Vec<LlmCall>>>,
    responses: Vec<(String, String)>,
    default_reply: String,
}

impl FakeLlmClient {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(vec![])),
            responses: vec![],
            default_reply: "fake reply".to_string(),
        }
    }

    pub fn respond_to(mut self, prompt_fragment: impl Into<String>, reply: impl Into<String>) -> Self {
        self.responses.push((prompt_fragment.into(), reply.into()));
        self
    }

    pub fn with_default(mut self, reply: impl Into<String>) -> Self {
        self.default_reply = reply.into();
        self
    }

    pub fn calls(&self) -> Vec<LlmCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl LlmClient for FakeLlmClient {
    fn generate(&self, prompt: &str, system_role: &str) -> String {
        self.calls
            .lock()
            .unwrap()
            .push(LlmCall { prompt: prompt.to_string(), system_role: system_role.to_string() });

        self.responses
            .iter()
            .find(|(fragment, _)| prompt.contains(fragment.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| self.default_reply.clone())
    }
}
