//! Trait boundaries between the application core and the outside world.

mod clipboard_writer;
mod kv_store;
mod scene_preview;
mod text_enhancer;

pub use clipboard_writer::{BufferClipboard, ClipboardWriter, NoopClipboard};
pub use kv_store::KeyValueStore;
pub use scene_preview::ScenePreview;
pub use text_enhancer::{PolishedPrompt, StaticTextEnhancer, TextEnhancer};
