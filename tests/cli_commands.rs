mod common;

use common::TestContext;
use predicates::prelude::*;
use serde_json::{Value, json};

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout should be JSON")
}

#[test]
fn templates_lists_builtin_pages() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("templates")
        .assert()
        .success()
        .stdout("comparison_page\nfaq_page\nproduct_page\n");
}

#[test]
fn templates_alias_and_custom_file() {
    let ctx = TestContext::new();
    ctx.write("extra.yml", "card:\n  title: \"{{ name }}\"\n");

    ctx.cli()
        .args(["t", "--templates", "extra.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("card\n"))
        .stdout(predicate::str::contains("product_page\n"));
}

#[test]
fn templates_show_reports_inputs() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["templates", "--show", "product_page"]).assert().success();
    let detail = stdout_json(&output.get_output().stdout);

    assert_eq!(detail["name"], json!("product_page"));
    assert_eq!(detail["blocks"], json!(["format_price", "safety_logic"]));
    assert!(detail["context_keys"].as_array().unwrap().contains(&json!("usage_instructions")));
}

#[test]
fn render_fills_slots_from_context_file() {
    let ctx = TestContext::new();
    ctx.write_product();

    let output =
        ctx.cli().args(["render", "product_page", "--context", "product.json"]).assert().success();
    let page = stdout_json(&output.get_output().stdout);

    assert_eq!(page["title"], json!("GlowBoost Vitamin C Serum"));
    assert_eq!(page["price_display"], json!("INR 699"));
    assert_eq!(page["suitable_for"], json!(["Oily", "Combination"]));
}

#[test]
fn render_without_context_shows_missing_markers() {
    let ctx = TestContext::new();
    ctx.write("extra.json", r#"{"card": {"title": "{{ name }}", "price": "{{ BLOCK:fmt }}"}}"#);

    let output = ctx.cli().args(["r", "card", "--templates", "extra.json"]).assert().success();

    assert_eq!(
        stdout_json(&output.get_output().stdout),
        json!({"title": "MISSING: name", "price": "MISSING: BLOCK:fmt"})
    );
}

#[test]
fn custom_template_replaces_builtin_of_same_name() {
    let ctx = TestContext::new();
    ctx.write("extra.yml", "product_page:\n  headline: \"{{ name }}\"\n");
    ctx.write_product();

    let output = ctx
        .cli()
        .args(["render", "product_page", "-c", "product.json", "--templates", "extra.yml"])
        .assert()
        .success();

    assert_eq!(
        stdout_json(&output.get_output().stdout),
        json!({"headline": "GlowBoost Vitamin C Serum"})
    );
}

#[test]
fn render_unknown_template_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "nonexistent"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Template 'nonexistent' not found"));
}

#[test]
fn render_missing_context_file_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "product_page", "--context", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn missing_templates_file_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["templates", "--templates", "absent.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yml"));
}

#[test]
fn version_flag_prints_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
