mod fake_llm_client;

pub use fake_llm_client::{FakeLlmClient, LlmCall};

use crate::domain::Product;

/// The vitamin C serum used across pipeline tests.
pub fn sample_product() -> Product {
    Product {
        name: "GlowBoost Vitamin C Serum".to_string(),
        concentration: Some("10% Vitamin C".to_string()),
        skin_type: vec!["Oily".to_string(), "Combination".to_string()],
        ingredients: vec!["Vitamin C".to_string(), "Hyaluronic Acid".to_string()],
        benefits: vec!["Brightening".to_string(), "Fades dark spots".to_string()],
        usage_instructions: "Apply 2-3 drops in the morning before sunscreen".to_string(),
        side_effects: Some("Mild tingling for sensitive skin".to_string()),
        price: "₹699".to_string(),
    }
}
