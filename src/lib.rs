//! framecraft: compose text-to-image prompts from structured form fields,
//! with camera-shot simulation, Gemini-backed enrichment, and local
//! history/preset storage.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::AppContext;
use app::commands::{compose as compose_cmd, enrich as enrich_cmd, history as history_cmd,
    polish as polish_cmd, preset as preset_cmd, studio as studio_cmd};
use ports::{PolishedPrompt, TextEnhancer};
use services::{
    GeminiTextEnhancer, JsonFileStore, ProfileStore, RetryPolicy, RetryingTextEnhancer,
};

pub use app::commands::compose::ComposeOptions;
pub use app::commands::polish::PolishOutcome;
pub use domain::{AppError, HistoryEntry, Preset};

/// Compose the final prompt text from flag-driven form input.
pub fn compose(options: &ComposeOptions) -> Result<String, AppError> {
    compose_cmd::execute(options)
}

/// Expand a short idea into a richer visual description.
pub fn enrich(idea: &str) -> Result<String, AppError> {
    let config = domain::AppConfig::load()?;
    let enhancer = build_enhancer(&config);
    enrich_cmd::execute(&enhancer, idea)
}

/// Compose from flags, then rewrite the body into both configured languages.
pub fn polish(options: &ComposeOptions) -> Result<PolishOutcome, AppError> {
    let config = domain::AppConfig::load()?;
    let enhancer = build_enhancer(&config);
    polish_cmd::execute(&enhancer, options)
}

/// List the copied-prompt history, newest first.
pub fn history_list() -> Result<Vec<HistoryEntry>, AppError> {
    Ok(history_cmd::list(&profile_store()?))
}

/// Delete the entire copied-prompt history.
pub fn history_clear() -> Result<(), AppError> {
    history_cmd::clear(&profile_store()?);
    Ok(())
}

/// List stored presets.
pub fn preset_list() -> Result<Vec<Preset>, AppError> {
    Ok(preset_cmd::list(&profile_store()?))
}

/// Save the form described by the flags under a named preset.
pub fn preset_save(name: &str, options: &ComposeOptions) -> Result<Preset, AppError> {
    preset_cmd::save(&profile_store()?, name, options)
}

/// Delete a preset by id.
pub fn preset_delete(id: &str) -> Result<(), AppError> {
    preset_cmd::delete(&profile_store()?, id)
}

/// Fetch a preset by id.
pub fn preset_show(id: &str) -> Result<Preset, AppError> {
    preset_cmd::show(&profile_store()?, id)
}

/// Run the interactive studio loop.
pub fn studio() -> Result<(), AppError> {
    let config = domain::AppConfig::load()?;
    let enhancer = build_enhancer(&config);
    let profile = profile_store()?;
    let mut ctx = AppContext::new(enhancer, profile, ports::NoopClipboard);
    studio_cmd::execute(&mut ctx)
}

fn profile_store() -> Result<ProfileStore<JsonFileStore>, AppError> {
    Ok(ProfileStore::new(JsonFileStore::new(domain::AppConfig::profile_dir()?)))
}

/// Gemini handle that defers configuration problems to the first call, so the
/// studio stays usable without an API key until an enhancement is requested.
enum EnhancerHandle {
    Ready(RetryingTextEnhancer),
    Unavailable(String),
}

impl TextEnhancer for EnhancerHandle {
    fn enrich(&self, idea: &str) -> Result<String, AppError> {
        match self {
            EnhancerHandle::Ready(enhancer) => enhancer.enrich(idea),
            EnhancerHandle::Unavailable(reason) => {
                Err(AppError::EnhancerApi { message: reason.clone(), status: None })
            }
        }
    }

    fn polish(&self, body: &str) -> Result<PolishedPrompt, AppError> {
        match self {
            EnhancerHandle::Ready(enhancer) => enhancer.polish(body),
            EnhancerHandle::Unavailable(reason) => {
                Err(AppError::EnhancerApi { message: reason.clone(), status: None })
            }
        }
    }
}

fn build_enhancer(config: &domain::AppConfig) -> EnhancerHandle {
    match GeminiTextEnhancer::from_env(&config.gemini, config.languages.clone()) {
        Ok(client) => EnhancerHandle::Ready(RetryingTextEnhancer::new(
            Box::new(client),
            RetryPolicy::from_config(&config.gemini),
        )),
        Err(err) => EnhancerHandle::Unavailable(format!("Gemini client not initialized: {err}")),
    }
}
