use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

pub const QUESTIONS: &str = "questions.j2";
pub const FAQ_ANSWER: &str = "faq_answer.j2";
pub const COMPETITOR: &str = "competitor.j2";

/// Renders the embedded prompt templates.
#[derive(Debug)]
pub struct PromptRenderer {
    env: Environment<'static>,
}

impl PromptRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for file in PROMPTS_DIR.files() {
            let (Some(name), Some(source)) = (file.path().to_str(), file.contents_utf8()) else {
                continue;
            };
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, context: S) -> Result<String, AppError> {
        Ok(self.env.get_template(name)?.render(context)?)
    }
}
