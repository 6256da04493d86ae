//! Embedded system instructions for the enhancement operations.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, LanguageConfig};

static INSTRUCTIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/instructions");

const ENRICH_TEMPLATE: &str = "enrich_system.j2";
const POLISH_TEMPLATE: &str = "polish_system.j2";

/// Word cap the enrich instruction imposes on the model.
const ENRICH_WORD_LIMIT: u32 = 60;

/// Renders the system instructions sent alongside enhancement requests.
pub struct InstructionSet {
    env: Environment<'static>,
}

impl InstructionSet {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for name in [ENRICH_TEMPLATE, POLISH_TEMPLATE] {
            let source = INSTRUCTIONS_DIR
                .get_file(name)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| {
                    AppError::InstructionTemplate(format!("embedded template '{name}' missing"))
                })?;
            env.add_template(name, source).map_err(|e| {
                AppError::InstructionTemplate(format!("failed to register '{name}': {e}"))
            })?;
        }

        Ok(Self { env })
    }

    /// System instruction for expanding a short idea.
    pub fn enrich(&self) -> Result<String, AppError> {
        self.render(ENRICH_TEMPLATE, context! { word_limit => ENRICH_WORD_LIMIT })
    }

    /// System instruction for the bilingual rewrite.
    pub fn polish(&self, languages: &LanguageConfig) -> Result<String, AppError> {
        self.render(
            POLISH_TEMPLATE,
            context! {
                primary_language => languages.primary.as_str(),
                secondary_language => languages.secondary.as_str(),
            },
        )
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
        let template = self.env.get_template(name).map_err(|e| {
            AppError::InstructionTemplate(format!("failed to load '{name}': {e}"))
        })?;
        template
            .render(ctx)
            .map(|text| text.trim_end().to_string())
            .map_err(|e| AppError::InstructionTemplate(format!("failed to render '{name}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrich_instruction_carries_the_word_limit() {
        let instructions = InstructionSet::new().unwrap();
        let text = instructions.enrich().unwrap();
        assert!(text.contains("under 60 words"));
    }

    #[test]
    fn polish_instruction_names_both_languages() {
        let instructions = InstructionSet::new().unwrap();
        let languages =
            LanguageConfig { primary: "English".into(), secondary: "Japanese".into() };
        let text = instructions.polish(&languages).unwrap();
        assert!(text.contains("version of the prompt in English"));
        assert!(text.contains("natural-sounding Japanese"));
        assert!(text.contains("\"primary\" and \"secondary\""));
    }
}
