//! Product records handed to the generation pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::AppError;
use crate::domain::template::Context;

const DEFAULT_COMPETITOR_NAME: &str = "Generic Brand";
const DEFAULT_COMPETITOR_PRICE: &str = "999";

/// Structured product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration: Option<String>,
    #[serde(default)]
    pub skin_type: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub usage_instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<String>,
    pub price: String,
}

impl Product {
    /// Parse a product record from JSON text.
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|e| AppError::parse_error("product record", e))
    }

    /// Render context with one entry per field. Absent optional fields are omitted.
    pub fn to_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("name".into(), json!(self.name));
        if let Some(concentration) = &self.concentration {
            context.insert("concentration".into(), json!(concentration));
        }
        context.insert("skin_type".into(), json!(self.skin_type));
        context.insert("ingredients".into(), json!(self.ingredients));
        context.insert("benefits".into(), json!(self.benefits));
        context.insert("usage_instructions".into(), json!(self.usage_instructions));
        if let Some(side_effects) = &self.side_effects {
            context.insert("side_effects".into(), json!(side_effects));
        }
        context.insert("price".into(), json!(self.price));
        context
    }

    /// Compact JSON of the context entries, for embedding in prompts.
    pub fn to_json_string(&self) -> String {
        Value::Object(self.to_context()).to_string()
    }
}

/// A simulated user question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub category: String,
    pub text: String,
}

/// An answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    pub category: String,
}

/// Free-form competitor record produced by the LLM.
///
/// Field names are not under our control, so accessors accept both
/// `Name`/`name` spellings and fall back to fixed defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Competitor(Value);

impl Competitor {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn name(&self) -> String {
        self.text_field("Name").unwrap_or_else(|| DEFAULT_COMPETITOR_NAME.to_string())
    }

    pub fn price(&self) -> String {
        self.text_field("Price").unwrap_or_else(|| DEFAULT_COMPETITOR_PRICE.to_string())
    }

    /// Ingredient list; accepts a JSON array or a comma-separated string.
    pub fn ingredients(&self) -> Vec<String> {
        match self.field("Ingredients") {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(Value::String(text)) => text
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn field(&self, capitalized: &str) -> Option<&Value> {
        let object = self.0.as_object()?;
        object.get(capitalized).or_else(|| object.get(&capitalized.to_lowercase()))
    }

    fn text_field(&self, capitalized: &str) -> Option<String> {
        self.field(capitalized).and_then(scalar_text)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
