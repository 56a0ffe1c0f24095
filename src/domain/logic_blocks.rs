//! Pure content rules exposed to templates as logic blocks.

use std::collections::BTreeSet;

use serde_json::{Value, json};

use crate::domain::product::{Competitor, Product};
use crate::domain::template::{BlockRegistry, Context, placeholder};

const PATCH_TEST_TRIGGERS: [&str; 2] = ["tingling", "irritation"];

/// Normalize a rupee price for display (`₹699` → `INR 699`).
pub fn format_currency(price: &str) -> String {
    price.replace('₹', "INR ").trim().to_string()
}

/// Safety line derived from the product's side-effect text.
pub fn safety_warning(side_effects: &str) -> String {
    let lowered = side_effects.to_lowercase();
    if PATCH_TEST_TRIGGERS.iter().any(|trigger| lowered.contains(trigger)) {
        format!("⚠ Patch Test Recommended: {side_effects}")
    } else {
        "Dermatologically tested.".to_string()
    }
}

/// Price line and shared ingredients between the product and a competitor.
pub fn comparison_matrix(product: &Product, competitor: &Competitor) -> Value {
    let ours: BTreeSet<&str> = product.ingredients.iter().map(String::as_str).collect();
    let theirs = competitor.ingredients();
    let overlap: BTreeSet<&str> =
        theirs.iter().map(String::as_str).filter(|i| ours.contains(i)).collect();

    json!({
        "price_diff": format!(
            "{} is {} vs {} at {}",
            product.name,
            product.price,
            competitor.name(),
            competitor.price()
        ),
        "ingredient_overlap": overlap.into_iter().collect::<Vec<_>>(),
    })
}

/// Blocks available to the built-in page templates.
///
/// - `format_price`: formatted `price`
/// - `safety_logic`: safety line for `side_effects` (absent means none reported)
/// - `verdict_logic`: fixed verdict
/// - `comparison_matrix`: reads `product` and `competitor` records
pub fn standard_blocks() -> BlockRegistry {
    BlockRegistry::new()
        .with("format_price", |ctx: &Context| match ctx.get("price").and_then(Value::as_str) {
            Some(price) => json!(format_currency(price)),
            None => json!(placeholder::missing_marker("price")),
        })
        .with("safety_logic", |ctx: &Context| {
            let side_effects = ctx.get("side_effects").and_then(Value::as_str).unwrap_or_default();
            json!(safety_warning(side_effects))
        })
        .with("verdict_logic", |_: &Context| json!("Better Value"))
        .with("comparison_matrix", |ctx: &Context| {
            let product = ctx.get("product").cloned().map(serde_json::from_value::<Product>);
            match product {
                Some(Ok(product)) => {
                    let competitor =
                        Competitor::new(ctx.get("competitor").cloned().unwrap_or_default());
                    comparison_matrix(&product, &competitor)
                }
                _ => json!(placeholder::missing_marker("product")),
            }
        })
}
