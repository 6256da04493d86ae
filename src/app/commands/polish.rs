//! Compose from flags, polish the body remotely, and reattach directives.

use crate::app::commands::compose::{ComposeOptions, build_session};
use crate::domain::AppError;
use crate::ports::TextEnhancer;

/// Both display-ready language variants of a polished prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolishOutcome {
    pub primary: String,
    pub secondary: String,
}

pub fn execute<E: TextEnhancer>(
    enhancer: &E,
    options: &ComposeOptions,
) -> Result<PolishOutcome, AppError> {
    let mut session = build_session(options)?;

    let Some(request) = session.begin_polish()? else {
        // A freshly built session cannot have a pending polish.
        return Err(AppError::Validation("A polish request is already in flight".to_string()));
    };
    let result = enhancer.polish(request.body());
    session.complete_polish(request, result)?;

    let cache = session
        .polished()
        .ok_or_else(|| AppError::Validation("Polish produced no result".to_string()))?;
    Ok(PolishOutcome { primary: cache.primary.clone(), secondary: cache.secondary.clone() })
}
