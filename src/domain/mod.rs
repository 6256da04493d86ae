//! Pure domain logic: form state, composition, classification, persistence
//! records, and configuration. Nothing in this module performs I/O except
//! [`config::AppConfig::load`].

pub mod camera;
pub mod composer;
pub mod config;
mod error;
pub mod form;
pub mod history;
pub mod preset;
pub mod shot;

pub use composer::{ComposedPrompt, Composition, compose};
pub use config::{AppConfig, GeminiApiConfig, LanguageConfig};
pub use error::AppError;
pub use form::{ActiveTab, FieldUpdate, FormState, OutputMode, ViewLanguage};
pub use history::{HistoryEntry, HistoryLog};
pub use preset::{Preset, PresetState};
pub use shot::{CameraAngle, CameraPosition, CameraView, ShotDescriptor, ShotDistance};
