//! Remote text enhancement port.

use crate::domain::AppError;

/// Bilingual result of the polish operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolishedPrompt {
    /// Elevated prompt in the primary language.
    pub primary: String,
    /// Translation into the secondary language.
    pub secondary: String,
}

/// Port for the remote generative text service.
///
/// Both operations are fallible and leave no state behind on failure; the
/// session layer owns the guards (busy flags, mode checks) around them.
pub trait TextEnhancer {
    /// Expand a short idea into a richer visual description.
    fn enrich(&self, idea: &str) -> Result<String, AppError>;

    /// Rewrite a prompt body and translate it. The body must not carry
    /// directive flags; the caller re-attaches them afterwards.
    fn polish(&self, body: &str) -> Result<PolishedPrompt, AppError>;
}

/// Canned enhancer for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct StaticTextEnhancer {
    /// Text returned by `enrich`; when empty, the idea is echoed back.
    pub enriched: String,
    /// Pair returned by `polish`; when empty, the body is echoed back.
    pub polished: Option<(String, String)>,
}

impl TextEnhancer for StaticTextEnhancer {
    fn enrich(&self, idea: &str) -> Result<String, AppError> {
        if self.enriched.is_empty() {
            Ok(idea.to_string())
        } else {
            Ok(self.enriched.clone())
        }
    }

    fn polish(&self, body: &str) -> Result<PolishedPrompt, AppError> {
        match &self.polished {
            Some((primary, secondary)) => {
                Ok(PolishedPrompt { primary: primary.clone(), secondary: secondary.clone() })
            }
            None => Ok(PolishedPrompt { primary: body.to_string(), secondary: body.to_string() }),
        }
    }
}
