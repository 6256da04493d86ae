//! Adapters implementing the ports against real infrastructure.

mod gemini_http;
mod gemini_retrying;
mod instructions;
mod json_file_store;
mod memory_store;
mod profile_store;
mod scene_headless;

pub use gemini_http::GeminiTextEnhancer;
pub use gemini_retrying::{RetryPolicy, RetryingTextEnhancer};
pub use instructions::InstructionSet;
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use profile_store::ProfileStore;
pub use scene_headless::HeadlessScenePreview;
